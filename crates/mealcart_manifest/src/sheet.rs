//! Record sets projected into renderer-agnostic sheet plans.

use crate::conf::{
    C_SHEET_NAME_MANIFEST, N_IDX_COL_PHONE_MANIFEST, N_IDX_COL_PHONE_POLAR,
    TUP_COLUMNS_CARRIER_READY, TUP_COLUMNS_MANIFEST_CLEAN_EATS, TUP_COLUMNS_MANIFEST_MADE_ACTIVE,
    TUP_COLUMNS_POLAR_PARCEL,
};
use crate::spec::{
    EnumCustomerGroup, SpecCarrierReadyRecord, SpecManifestRecord, SpecPolarParcelManifest,
};

/// Normalized cell value handed to the workbook renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumCellValue {
    /// Missing/blank value.
    None,
    /// Text value.
    String(String),
    /// Numeric value.
    Number(f64),
}

/// Renderer-agnostic description of one worksheet.
///
/// The renderer writes preamble rows first, then the header row, then data
/// rows. Columns listed in `l_cols_idx_text_forced` must be stored with a
/// text number format so leading zeros survive (phone columns).
#[derive(Debug, Clone, PartialEq)]
pub struct SpecSheetPlan {
    /// Worksheet name (sanitized by the renderer).
    pub sheet_name: String,
    /// Rows written above the header (Polar Parcel delivery-date line).
    pub l_rows_preamble: Vec<Vec<EnumCellValue>>,
    /// Header row cell texts.
    pub l_columns: Vec<String>,
    /// Data rows, one cell per column.
    pub l_rows: Vec<Vec<EnumCellValue>>,
    /// Column indices forced to text storage.
    pub l_cols_idx_text_forced: Vec<usize>,
}

/// Plan one route-bucket manifest sheet for the given group layout.
pub fn plan_bucket_sheet(
    l_records: &[SpecManifestRecord],
    enum_group: EnumCustomerGroup,
) -> SpecSheetPlan {
    let l_columns: Vec<String> = match enum_group {
        EnumCustomerGroup::CleanEats => TUP_COLUMNS_MANIFEST_CLEAN_EATS
            .iter()
            .map(ToString::to_string)
            .collect(),
        EnumCustomerGroup::MadeActive => TUP_COLUMNS_MANIFEST_MADE_ACTIVE
            .iter()
            .map(ToString::to_string)
            .collect(),
    };

    let l_rows = l_records
        .iter()
        .map(|record| derive_bucket_row(record, enum_group))
        .collect();

    SpecSheetPlan {
        sheet_name: C_SHEET_NAME_MANIFEST.to_string(),
        l_rows_preamble: vec![],
        l_columns,
        l_rows,
        l_cols_idx_text_forced: vec![N_IDX_COL_PHONE_MANIFEST],
    }
}

/// Plan the chilled-carrier manifest sheet.
pub fn plan_carrier_ready_sheet(l_records: &[SpecCarrierReadyRecord]) -> SpecSheetPlan {
    let l_rows = l_records
        .iter()
        .map(|record| {
            vec![
                cell_text(&record.inv_no),
                cell_text(&record.delivery_date),
                EnumCellValue::None,
                cell_text(&record.store_name),
                cell_text(&record.address),
                cell_text(&record.suburb),
                cell_text(&record.state),
                cell_text(&record.postcode),
                cell_count(record.cnt_cartons),
                EnumCellValue::None,
                match record.weight_kg {
                    Some(n_weight) => EnumCellValue::Number(n_weight),
                    None => EnumCellValue::None,
                },
                EnumCellValue::None,
                EnumCellValue::None,
                cell_text(&record.temperature),
                cell_text(&record.comment),
            ]
        })
        .collect();

    SpecSheetPlan {
        sheet_name: C_SHEET_NAME_MANIFEST.to_string(),
        l_rows_preamble: vec![],
        l_columns: TUP_COLUMNS_CARRIER_READY
            .iter()
            .map(ToString::to_string)
            .collect(),
        l_rows,
        l_cols_idx_text_forced: vec![],
    }
}

/// Plan the Polar Parcel manifest sheet with its delivery-date preamble.
pub fn plan_polar_parcel_sheet(manifest: &SpecPolarParcelManifest) -> SpecSheetPlan {
    let l_rows = manifest
        .l_records
        .iter()
        .map(|record| {
            vec![
                cell_text(&record.seller_name),
                cell_text(&record.order_id),
                cell_text(&record.customer_name),
                cell_text(&record.address),
                cell_text(&record.city),
                cell_text(&record.postcode),
                cell_text(&record.phone),
                cell_text(&record.email),
                cell_text(&record.delivery_notes),
                cell_count(record.cnt_cartons),
            ]
        })
        .collect();

    SpecSheetPlan {
        sheet_name: C_SHEET_NAME_MANIFEST.to_string(),
        l_rows_preamble: vec![vec![
            cell_text("Delivery Date"),
            cell_text(&manifest.delivery_date),
        ]],
        l_columns: TUP_COLUMNS_POLAR_PARCEL
            .iter()
            .map(ToString::to_string)
            .collect(),
        l_rows,
        l_cols_idx_text_forced: vec![N_IDX_COL_PHONE_POLAR],
    }
}

fn derive_bucket_row(
    record: &SpecManifestRecord,
    enum_group: EnumCustomerGroup,
) -> Vec<EnumCellValue> {
    let mut l_cells = vec![
        cell_text(&record.order_id),
        cell_text(&record.delivery_date),
        cell_text(&record.address_1),
        cell_text(&record.address_2),
        cell_text(&record.postal_code),
        cell_text(&record.state),
        cell_text(&record.country),
        cell_text(&record.recipient_name),
        cell_text(&record.phone),
        cell_text(&record.time_window),
    ];

    if enum_group.if_infers_city() {
        l_cells.push(cell_text(&record.city));
    }
    l_cells.push(cell_text(&record.group_label));
    l_cells.push(cell_count(record.cnt_shipping_labels));
    l_cells.push(cell_count(record.cnt_total_units));
    if enum_group.if_carries_email() {
        l_cells.push(cell_text(record.email.as_deref().unwrap_or_default()));
    }
    l_cells.push(cell_text(&record.instructions));

    l_cells
}

fn cell_text(value: &str) -> EnumCellValue {
    EnumCellValue::String(value.to_string())
}

fn cell_count(value: Option<u64>) -> EnumCellValue {
    match value {
        Some(n_value) => EnumCellValue::Number(n_value as f64),
        None => EnumCellValue::None,
    }
}
