//! Order-export CSV ingestion: header schema validation and row extraction.

use std::collections::HashMap;
use std::io;

use csv::ReaderBuilder;

use mealcart_manifest::spec::{EnumCustomerGroup, SpecOrderRow};

use crate::spec::{IngestCsvError, SpecCsvIngest};

/// Column names required by both customer-group rulesets.
pub const TUP_COLUMNS_REQUIRED: [&str; 13] = [
    "Name",
    "Lineitem name",
    "Lineitem quantity",
    "Notes",
    "Tags",
    "Shipping Street",
    "Shipping City",
    "Shipping Zip",
    "Shipping Province",
    "Shipping Country",
    "Shipping Name",
    "Billing Phone",
    "Phone",
];

/// Column required only by the Made Active ruleset.
pub const C_COLUMN_EMAIL: &str = "Email";

/// Ingest an orders-export CSV stream into line-item rows.
///
/// Header names are trimmed before matching; extra columns are ignored.
/// Missing required columns abort the run before any row is produced.
/// Missing cells degrade to empty strings and non-numeric quantities to 0,
/// each recorded as a warning.
pub fn ingest_order_rows<R: io::Read>(
    read: R,
    enum_group: EnumCustomerGroup,
) -> Result<SpecCsvIngest, IngestCsvError> {
    let mut reader_csv = ReaderBuilder::new().flexible(true).from_reader(read);

    let headers = reader_csv
        .headers()
        .map_err(|err| IngestCsvError::Read {
            message: err.to_string(),
        })?
        .clone();
    let l_columns: Vec<String> = headers.iter().map(|name| name.trim().to_string()).collect();

    let mut dict_idx_by_column: HashMap<&str, usize> = HashMap::new();
    for (n_idx, c_name) in l_columns.iter().enumerate() {
        dict_idx_by_column.entry(c_name.as_str()).or_insert(n_idx);
    }

    let l_columns_missing = derive_missing_columns(&dict_idx_by_column, enum_group);
    if !l_columns_missing.is_empty() {
        return Err(IngestCsvError::MissingColumns(l_columns_missing));
    }

    let n_idx_email = dict_idx_by_column.get(C_COLUMN_EMAIL).copied();

    let mut outcome = SpecCsvIngest::default();
    for (n_idx_record, record_res) in reader_csv.records().enumerate() {
        let record = record_res.map_err(|err| IngestCsvError::Read {
            message: err.to_string(),
        })?;

        // Header is line 1; data starts on line 2.
        let n_line = n_idx_record + 2;
        let field = |c_name: &str| -> String {
            dict_idx_by_column
                .get(c_name)
                .and_then(|n_idx| record.get(*n_idx))
                .unwrap_or("")
                .to_string()
        };

        let c_quantity_raw = field("Lineitem quantity");
        let cnt_quantity = match c_quantity_raw.trim().parse::<u64>() {
            Ok(n_quantity) => n_quantity,
            Err(_) => {
                outcome.l_warnings.push(format!(
                    "Line {n_line}: non-numeric quantity {c_quantity_raw:?}; defaulted to 0."
                ));
                0
            }
        };

        outcome.l_rows.push(SpecOrderRow {
            order_id: field("Name"),
            lineitem_name: field("Lineitem name"),
            cnt_quantity,
            notes: field("Notes"),
            tags: field("Tags"),
            shipping_street: field("Shipping Street"),
            shipping_city: field("Shipping City"),
            shipping_zip: field("Shipping Zip"),
            shipping_province: field("Shipping Province"),
            shipping_country: field("Shipping Country"),
            shipping_name: field("Shipping Name"),
            billing_phone: field("Billing Phone"),
            phone: field("Phone"),
            email: match n_idx_email {
                Some(n_idx) => record.get(n_idx).unwrap_or("").to_string(),
                None => String::new(),
            },
        });
    }

    tracing::debug!(
        cnt_rows = outcome.l_rows.len(),
        cnt_warnings = outcome.l_warnings.len(),
        "orders export ingested"
    );
    Ok(outcome)
}

fn derive_missing_columns(
    dict_idx_by_column: &HashMap<&str, usize>,
    enum_group: EnumCustomerGroup,
) -> Vec<String> {
    let mut l_columns_missing: Vec<String> = TUP_COLUMNS_REQUIRED
        .iter()
        .filter(|c_name| !dict_idx_by_column.contains_key(**c_name))
        .map(ToString::to_string)
        .collect();

    if enum_group.if_carries_email() && !dict_idx_by_column.contains_key(C_COLUMN_EMAIL) {
        l_columns_missing.push(C_COLUMN_EMAIL.to_string());
    }

    l_columns_missing
}

#[cfg(test)]
mod tests {
    use mealcart_manifest::spec::EnumCustomerGroup;

    use super::ingest_order_rows;
    use crate::spec::IngestCsvError;

    const C_HEADER: &str = "Name,Lineitem name,Lineitem quantity,Notes,Tags,Shipping Street,\
Shipping City,Shipping Zip,Shipping Province,Shipping Country,Shipping Name,Billing Phone,\
Phone,Email";

    #[test]
    fn ingest_parses_rows_in_order() {
        let c_csv = format!(
            "{C_HEADER}\n\
#1001,20 Pack,2,leave at door,\"CM, 25/12/2024\",1 High St,Richmond,3121,VIC,AU,Jo Citizen,+61 412 345 678,,jo@example.com\n\
#1002,Protein Bar,5,,MC,2 Low St,Newtown,2042,NSW,AU,Sam Smith,,0400 000 000,sam@example.com\n"
        );
        let outcome = ingest_order_rows(c_csv.as_bytes(), EnumCustomerGroup::MadeActive)
            .expect("ingest succeeds");

        assert_eq!(outcome.l_rows.len(), 2);
        assert!(outcome.l_warnings.is_empty());
        assert_eq!(outcome.l_rows[0].order_id, "#1001");
        assert_eq!(outcome.l_rows[0].cnt_quantity, 2);
        assert_eq!(outcome.l_rows[0].tags, "CM, 25/12/2024");
        assert_eq!(outcome.l_rows[1].shipping_province, "NSW");
        assert_eq!(outcome.l_rows[1].email, "sam@example.com");
    }

    #[test]
    fn ingest_trims_header_names() {
        let c_csv = "Name , Lineitem name ,Lineitem quantity,Notes,Tags,Shipping Street,\
Shipping City,Shipping Zip,Shipping Province,Shipping Country,Shipping Name,Billing Phone,Phone\n\
#1,Meal,1,,,,,,,,,,\n";
        let outcome = ingest_order_rows(c_csv.as_bytes(), EnumCustomerGroup::CleanEats)
            .expect("ingest succeeds");

        assert_eq!(outcome.l_rows[0].order_id, "#1");
        assert_eq!(outcome.l_rows[0].lineitem_name, "Meal");
    }

    #[test]
    fn missing_required_columns_abort_before_rows() {
        let c_csv = "Name,Lineitem name\n#1,Meal\n";
        let err = ingest_order_rows(c_csv.as_bytes(), EnumCustomerGroup::CleanEats)
            .expect_err("schema error");

        match err {
            IngestCsvError::MissingColumns(l_columns) => {
                assert!(l_columns.contains(&"Lineitem quantity".to_string()));
                assert!(l_columns.contains(&"Shipping Zip".to_string()));
                assert!(!l_columns.contains(&"Email".to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn email_required_only_for_made_active() {
        let c_csv = "Name,Lineitem name,Lineitem quantity,Notes,Tags,Shipping Street,\
Shipping City,Shipping Zip,Shipping Province,Shipping Country,Shipping Name,Billing Phone,Phone\n";

        assert!(ingest_order_rows(c_csv.as_bytes(), EnumCustomerGroup::CleanEats).is_ok());

        let err = ingest_order_rows(c_csv.as_bytes(), EnumCustomerGroup::MadeActive)
            .expect_err("email required");
        match err {
            IngestCsvError::MissingColumns(l_columns) => {
                assert_eq!(l_columns, vec!["Email".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_numeric_quantity_degrades_to_zero_with_warning() {
        let c_csv = format!("{C_HEADER}\n#1,Meal,two,,,,,,,,,,,\n");
        let outcome = ingest_order_rows(c_csv.as_bytes(), EnumCustomerGroup::MadeActive)
            .expect("ingest succeeds");

        assert_eq!(outcome.l_rows[0].cnt_quantity, 0);
        assert_eq!(outcome.l_warnings.len(), 1);
        assert!(outcome.l_warnings[0].contains("Line 2"));
    }

    #[test]
    fn short_rows_default_missing_cells_to_empty() {
        let c_csv = format!("{C_HEADER}\n#1,Meal,1\n");
        let outcome = ingest_order_rows(c_csv.as_bytes(), EnumCustomerGroup::MadeActive)
            .expect("ingest succeeds");

        assert_eq!(outcome.l_rows[0].cnt_quantity, 1);
        assert_eq!(outcome.l_rows[0].tags, "");
        assert_eq!(outcome.l_rows[0].email, "");
    }

    #[test]
    fn extra_columns_are_ignored() {
        let c_csv = format!("{C_HEADER},Fulfillment Status\n#1,Meal,1,,,,,,,,,,,,fulfilled\n");
        let outcome = ingest_order_rows(c_csv.as_bytes(), EnumCustomerGroup::MadeActive)
            .expect("ingest succeeds");

        assert_eq!(outcome.l_rows.len(), 1);
        assert_eq!(outcome.l_rows[0].order_id, "#1");
    }
}
