//! Order grouping and per-order manifest record derivation.

use std::collections::HashMap;

use crate::conf::{
    C_TIME_WINDOW_DEFAULT, N_UNITS_PER_LABEL, derive_bundle_units_map,
    derive_excluded_bundle_names,
};
use crate::normalize::{
    expand_country_code, expand_region_code, extract_delivery_date, infer_city_from_region,
    sanitize_phone_number,
};
use crate::spec::{EnumCustomerGroup, SpecManifestRecord, SpecOrderRow};

/// Aggregate raw line-item rows into one manifest record per distinct order.
///
/// Grouping is stable: records come out in first-seen input order. Order-level
/// fields (address, tags, notes, phones) are taken from the first row of each
/// group and are not re-validated against later rows.
pub fn aggregate_orders(
    l_rows: &[SpecOrderRow],
    enum_group: EnumCustomerGroup,
) -> Vec<SpecManifestRecord> {
    let mut l_groups: Vec<Vec<&SpecOrderRow>> = Vec::new();
    let mut dict_idx_by_order: HashMap<&str, usize> = HashMap::new();

    for row in l_rows {
        match dict_idx_by_order.get(row.order_id.as_str()) {
            Some(n_idx) => l_groups[*n_idx].push(row),
            None => {
                dict_idx_by_order.insert(row.order_id.as_str(), l_groups.len());
                l_groups.push(vec![row]);
            }
        }
    }

    l_groups
        .iter()
        .map(|l_rows_order| derive_manifest_record(l_rows_order, enum_group))
        .collect()
}

/// Sum true ordered units for one order's line items.
///
/// The two rulesets are intentionally asymmetric: Clean Eats excludes bundle
/// items from the count entirely, Made Active expands them via the unit
/// table.
pub fn calculate_total_units(l_rows_order: &[&SpecOrderRow], enum_group: EnumCustomerGroup) -> u64 {
    match enum_group {
        EnumCustomerGroup::CleanEats => {
            let set_excluded_names = derive_excluded_bundle_names();
            l_rows_order
                .iter()
                .filter(|row| !set_excluded_names.contains(row.lineitem_name.trim()))
                .map(|row| row.cnt_quantity)
                .sum()
        }
        EnumCustomerGroup::MadeActive => {
            let dict_units_by_bundle = derive_bundle_units_map();
            l_rows_order
                .iter()
                .map(|row| match dict_units_by_bundle.get(row.lineitem_name.trim()) {
                    Some(n_units_per_bundle) => n_units_per_bundle * row.cnt_quantity,
                    None => row.cnt_quantity,
                })
                .sum()
        }
    }
}

/// Shipping labels needed for a unit count (capacity per label, rounded up).
pub fn calculate_label_count(cnt_total_units: u64) -> u64 {
    cnt_total_units.div_ceil(N_UNITS_PER_LABEL)
}

fn derive_manifest_record(
    l_rows_order: &[&SpecOrderRow],
    enum_group: EnumCustomerGroup,
) -> SpecManifestRecord {
    let row_first = l_rows_order[0];

    let cnt_total_units = calculate_total_units(l_rows_order, enum_group);
    let cnt_shipping_labels = calculate_label_count(cnt_total_units);

    let c_phone_raw = if row_first.billing_phone.trim().is_empty() {
        row_first.phone.as_str()
    } else {
        row_first.billing_phone.as_str()
    };

    let c_state = expand_region_code(&row_first.shipping_province, enum_group);
    let c_city = if enum_group.if_infers_city() {
        infer_city_from_region(&c_state)
    } else {
        String::new()
    };

    SpecManifestRecord {
        order_id: row_first.order_id.clone(),
        delivery_date: extract_delivery_date(&row_first.tags),
        address_1: row_first.shipping_street.clone(),
        address_2: row_first.shipping_city.clone(),
        postal_code: row_first.shipping_zip.replace('\'', ""),
        state: c_state,
        country: expand_country_code(&row_first.shipping_country),
        city: c_city,
        recipient_name: row_first.shipping_name.clone(),
        phone: sanitize_phone_number(c_phone_raw),
        time_window: C_TIME_WINDOW_DEFAULT.to_string(),
        group_label: enum_group.label().to_string(),
        cnt_shipping_labels: Some(cnt_shipping_labels),
        cnt_total_units: Some(cnt_total_units),
        instructions: row_first.notes.clone(),
        email: if enum_group.if_carries_email() {
            Some(row_first.email.clone())
        } else {
            None
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derive_row(order_id: &str, lineitem_name: &str, cnt_quantity: u64) -> SpecOrderRow {
        SpecOrderRow {
            order_id: order_id.to_string(),
            lineitem_name: lineitem_name.to_string(),
            cnt_quantity,
            tags: "wholesale, 25/12/2024, CM".to_string(),
            notes: "leave at door".to_string(),
            shipping_street: "1 High St".to_string(),
            shipping_city: "Richmond".to_string(),
            shipping_zip: "'3121".to_string(),
            shipping_province: "VIC".to_string(),
            shipping_country: "AU".to_string(),
            shipping_name: "Jo Citizen".to_string(),
            billing_phone: "+61 412 345 678".to_string(),
            phone: "0400 000 000".to_string(),
            email: "jo@example.com".to_string(),
        }
    }

    #[test]
    fn made_active_expands_bundles() {
        let l_rows = vec![derive_row("#1001", "20 Pack", 2)];
        let l_records = aggregate_orders(&l_rows, EnumCustomerGroup::MadeActive);

        assert_eq!(l_records.len(), 1);
        assert_eq!(l_records[0].cnt_total_units, Some(40));
        assert_eq!(l_records[0].cnt_shipping_labels, Some(2));
    }

    #[test]
    fn made_active_mixes_bundles_and_plain_items() {
        let l_rows = vec![
            derive_row("#1001", "10 Pack", 1),
            derive_row("#1001", "Protein Bar", 3),
            derive_row("#1001", " High Protein Pack ", 1),
        ];
        let l_records = aggregate_orders(&l_rows, EnumCustomerGroup::MadeActive);

        assert_eq!(l_records[0].cnt_total_units, Some(10 + 3 + 12));
        assert_eq!(l_records[0].cnt_shipping_labels, Some(2));
    }

    #[test]
    fn clean_eats_excludes_bundle_items() {
        let l_rows = vec![
            derive_row("#2001", "THE MEGA PACK", 1),
            derive_row("#2001", "Protein Bar", 5),
        ];
        let l_records = aggregate_orders(&l_rows, EnumCustomerGroup::CleanEats);

        assert_eq!(l_records[0].cnt_total_units, Some(5));
        assert_eq!(l_records[0].cnt_shipping_labels, Some(1));
    }

    #[test]
    fn clean_eats_all_bundles_yields_zero_units_zero_labels() {
        let l_rows = vec![
            derive_row("#2002", "Clean Eats Meal Plan", 2),
            derive_row("#2002", "  VEGGIE LOVERS PACK ", 1),
        ];
        let l_records = aggregate_orders(&l_rows, EnumCustomerGroup::CleanEats);

        assert_eq!(l_records[0].cnt_total_units, Some(0));
        assert_eq!(l_records[0].cnt_shipping_labels, Some(0));
    }

    #[test]
    fn one_record_per_order_in_first_seen_order() {
        let l_rows = vec![
            derive_row("#3", "Meal", 1),
            derive_row("#1", "Meal", 1),
            derive_row("#3", "Meal", 1),
            derive_row("#2", "Meal", 1),
        ];
        let l_records = aggregate_orders(&l_rows, EnumCustomerGroup::CleanEats);

        let l_ids: Vec<&str> = l_records.iter().map(|r| r.order_id.as_str()).collect();
        assert_eq!(l_ids, vec!["#3", "#1", "#2"]);
        assert_eq!(l_records[0].cnt_total_units, Some(2));
    }

    #[test]
    fn billing_phone_preferred_with_fallback() {
        let mut row = derive_row("#1", "Meal", 1);
        row.billing_phone = "  ".to_string();
        let l_records = aggregate_orders(&[row], EnumCustomerGroup::CleanEats);
        assert_eq!(l_records[0].phone, "0400000000");

        let row_billing = derive_row("#1", "Meal", 1);
        let l_records = aggregate_orders(&[row_billing], EnumCustomerGroup::CleanEats);
        assert_eq!(l_records[0].phone, "0412345678");
    }

    #[test]
    fn order_fields_normalized_from_first_row() {
        let l_rows = vec![derive_row("#1001", "Meal", 1)];
        let record = &aggregate_orders(&l_rows, EnumCustomerGroup::CleanEats)[0];

        assert_eq!(record.delivery_date, "25/12/2024");
        assert_eq!(record.postal_code, "3121");
        assert_eq!(record.state, "Victoria");
        assert_eq!(record.country, "Australia");
        assert_eq!(record.city, "Melbourne");
        assert_eq!(record.time_window, "0600-1800");
        assert_eq!(record.group_label, "Clean Eats Australia");
        assert_eq!(record.email, None);
    }

    #[test]
    fn made_active_carries_email_and_skips_city() {
        let l_rows = vec![derive_row("#1001", "Meal", 1)];
        let record = &aggregate_orders(&l_rows, EnumCustomerGroup::MadeActive)[0];

        assert_eq!(record.email.as_deref(), Some("jo@example.com"));
        assert_eq!(record.city, "");
        assert_eq!(record.group_label, "Made Active");
    }
}
