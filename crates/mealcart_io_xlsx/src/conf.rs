//! XLSX constants.

/// Excel sheet name maximum length.
pub const N_LEN_EXCEL_SHEET_NAME_MAX: usize = 31;
/// Characters not allowed in sheet names.
pub const TUP_EXCEL_ILLEGAL: [&str; 7] = ["*", ":", "?", "/", "\\", "[", "]"];
/// Number format code forcing text storage (preserves leading zeros).
pub const C_NUM_FORMAT_TEXT: &str = "@";
