//! `mealcart_io_csv` v1:
//! Orders-export CSV ingestion for the manifest pipeline.
//!
//! Architecture:
//! - `spec`   : ingestion models and error types
//! - `ingest` : header validation and row extraction

pub mod ingest;
pub mod spec;

pub use ingest::{C_COLUMN_EMAIL, TUP_COLUMNS_REQUIRED, ingest_order_rows};
pub use spec::{IngestCsvError, SpecCsvIngest};
