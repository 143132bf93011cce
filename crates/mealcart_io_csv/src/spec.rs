//! Ingestion models and top-level error types.

use std::fmt;

use mealcart_manifest::spec::SpecOrderRow;

/// Successful ingestion outcome: rows plus non-fatal per-field warnings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecCsvIngest {
    /// Parsed line-item rows in input order.
    pub l_rows: Vec<SpecOrderRow>,
    /// Non-fatal degradations (e.g. non-numeric quantities defaulted to 0).
    pub l_warnings: Vec<String>,
}

/// "Whole ingestion failed" errors; nothing partial is returned.
#[derive(Debug)]
pub enum IngestCsvError {
    /// One or more required columns are absent from the header row.
    MissingColumns(Vec<String>),
    /// Underlying CSV read/parse failure.
    Read {
        /// Underlying error text.
        message: String,
    },
}

impl fmt::Display for IngestCsvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingColumns(l_columns) => {
                write!(f, "Missing required columns: {}", l_columns.join(", "))
            }
            Self::Read { message } => write!(f, "Failed to read orders export: {message}"),
        }
    }
}

impl std::error::Error for IngestCsvError {}
