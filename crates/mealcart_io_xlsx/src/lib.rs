//! `mealcart_io_xlsx` v1:
//! XLSX rendering and ZIP archive assembly for manifest sheet plans.
//!
//! Architecture:
//! - `conf`    : Excel constants
//! - `writer`  : sheet plan to workbook bytes
//! - `archive` : artifact plans to one ZIP archive

pub mod archive;
pub mod conf;
pub mod writer;

pub use archive::{RenderArchiveError, render_archive};
pub use conf::{C_NUM_FORMAT_TEXT, N_LEN_EXCEL_SHEET_NAME_MAX, TUP_EXCEL_ILLEGAL};
pub use writer::{render_sheet_to_workbook_bytes, sanitize_sheet_name};
