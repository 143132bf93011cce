//! Sheet-plan to workbook rendering.

use std::collections::BTreeSet;

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use mealcart_manifest::sheet::{EnumCellValue, SpecSheetPlan};

use crate::conf::{C_NUM_FORMAT_TEXT, N_LEN_EXCEL_SHEET_NAME_MAX, TUP_EXCEL_ILLEGAL};

/// Render one sheet plan into XLSX workbook bytes.
///
/// Layout: preamble rows, then a bold header row, then data rows. Columns the
/// plan marks as text-forced are written with a text number format so values
/// like `0412345678` keep their leading zero. Blank cells are skipped rather
/// than written.
pub fn render_sheet_to_workbook_bytes(plan: &SpecSheetPlan) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(sanitize_sheet_name(&plan.sheet_name, "_"))
        .map_err(derive_xlsx_error_text)?;

    let fmt_header = Format::new().set_bold();
    let fmt_text_forced = Format::new().set_num_format(C_NUM_FORMAT_TEXT);
    let set_cols_idx_text_forced: BTreeSet<usize> =
        plan.l_cols_idx_text_forced.iter().copied().collect();

    let mut n_row_cursor = 0usize;
    for l_cells in &plan.l_rows_preamble {
        for (n_idx_col, value) in l_cells.iter().enumerate() {
            write_cell(worksheet, n_row_cursor, n_idx_col, value, None)?;
        }
        n_row_cursor += 1;
    }

    for (n_idx_col, c_name) in plan.l_columns.iter().enumerate() {
        worksheet
            .write_string_with_format(
                cast_row_num(n_row_cursor)?,
                cast_col_num(n_idx_col)?,
                c_name,
                &fmt_header,
            )
            .map_err(derive_xlsx_error_text)?;
    }
    n_row_cursor += 1;

    for l_cells in &plan.l_rows {
        for (n_idx_col, value) in l_cells.iter().enumerate() {
            let fmt_cell = if set_cols_idx_text_forced.contains(&n_idx_col) {
                Some(&fmt_text_forced)
            } else {
                None
            };
            write_cell(worksheet, n_row_cursor, n_idx_col, value, fmt_cell)?;
        }
        n_row_cursor += 1;
    }

    workbook.save_to_buffer().map_err(derive_xlsx_error_text)
}

/// Replace invalid chars and trim to a valid Excel sheet name.
pub fn sanitize_sheet_name(name: &str, replace_to: &str) -> String {
    let mut c_name = name.to_string();
    for c_illegal in TUP_EXCEL_ILLEGAL {
        c_name = c_name.replace(c_illegal, replace_to);
    }
    c_name = c_name.trim().to_string();
    if c_name.is_empty() {
        c_name = "Sheet".to_string();
    }

    c_name.chars().take(N_LEN_EXCEL_SHEET_NAME_MAX).collect()
}

fn write_cell(
    worksheet: &mut Worksheet,
    row_idx: usize,
    col_idx: usize,
    value: &EnumCellValue,
    fmt_cell: Option<&Format>,
) -> Result<(), String> {
    let n_row = cast_row_num(row_idx)?;
    let n_col = cast_col_num(col_idx)?;

    match (value, fmt_cell) {
        (EnumCellValue::None, _) => {}
        (EnumCellValue::String(val), Some(fmt)) => {
            worksheet
                .write_string_with_format(n_row, n_col, val, fmt)
                .map_err(derive_xlsx_error_text)?;
        }
        (EnumCellValue::String(val), None) => {
            worksheet
                .write_string(n_row, n_col, val)
                .map_err(derive_xlsx_error_text)?;
        }
        (EnumCellValue::Number(val), Some(fmt)) => {
            worksheet
                .write_number_with_format(n_row, n_col, *val, fmt)
                .map_err(derive_xlsx_error_text)?;
        }
        (EnumCellValue::Number(val), None) => {
            worksheet
                .write_number(n_row, n_col, *val)
                .map_err(derive_xlsx_error_text)?;
        }
    }
    Ok(())
}

fn cast_row_num(value: usize) -> Result<u32, String> {
    u32::try_from(value).map_err(|_| format!("row index overflow: {value}"))
}

fn cast_col_num(value: usize) -> Result<u16, String> {
    u16::try_from(value).map_err(|_| format!("column index overflow: {value}"))
}

fn derive_xlsx_error_text(err: XlsxError) -> String {
    format!("xlsx write error: {err}")
}
