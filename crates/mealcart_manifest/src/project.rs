//! Carrier-ready projections: chilled carrier (CX) and Polar Parcel.

use chrono::{Duration, NaiveDate};

use crate::conf::{
    C_CARRIER_TEMPERATURE, C_FMT_DATE, N_DAYS_CARRIER_DELIVERY_OFFSET,
    N_DAYS_POLAR_DELIVERY_OFFSET, N_KG_PER_UNIT, TUP_POLAR_PARCEL_STATES,
};
use crate::spec::{
    EnumCustomerGroup, SpecCarrierReadyRecord, SpecManifestRecord, SpecPolarParcelManifest,
    SpecPolarParcelRecord,
};

/// Project CX bucket records into the chilled carrier's column semantics.
///
/// Delivery dates shift forward one day; unparsable or missing source dates
/// project to blank rather than failing the run.
pub fn derive_carrier_ready_records(
    l_records_cx: &[SpecManifestRecord],
) -> Vec<SpecCarrierReadyRecord> {
    l_records_cx
        .iter()
        .map(|record| SpecCarrierReadyRecord {
            inv_no: record.order_id.clone(),
            delivery_date: shift_date_text(&record.delivery_date, N_DAYS_CARRIER_DELIVERY_OFFSET),
            store_name: record.recipient_name.clone(),
            address: record.address_1.clone(),
            suburb: record.address_2.clone(),
            state: record.state.clone(),
            postcode: record.postal_code.clone(),
            cnt_cartons: record.cnt_shipping_labels,
            weight_kg: record.cnt_total_units.map(calculate_weight_kg),
            temperature: C_CARRIER_TEMPERATURE.to_string(),
            comment: record.instructions.clone(),
        })
        .collect()
}

/// Project Made Active records into the Polar Parcel manifest.
///
/// Only orders shipping to Polar-eligible states are included; the preamble
/// delivery date is the run date shifted forward two days.
pub fn derive_polar_parcel_manifest(
    l_records: &[SpecManifestRecord],
    date_run: NaiveDate,
) -> SpecPolarParcelManifest {
    let l_records_polar = l_records
        .iter()
        .filter(|record| TUP_POLAR_PARCEL_STATES.contains(&record.state.as_str()))
        .map(|record| SpecPolarParcelRecord {
            seller_name: EnumCustomerGroup::MadeActive.label().to_string(),
            order_id: record.order_id.clone(),
            customer_name: record.recipient_name.clone(),
            address: record.address_1.clone(),
            city: record.address_2.clone(),
            postcode: record.postal_code.clone(),
            phone: record.phone.clone(),
            email: record.email.clone().unwrap_or_default(),
            delivery_notes: record.instructions.clone(),
            cnt_cartons: record.cnt_shipping_labels,
        })
        .collect();

    SpecPolarParcelManifest {
        delivery_date: (date_run + Duration::days(N_DAYS_POLAR_DELIVERY_OFFSET))
            .format(C_FMT_DATE)
            .to_string(),
        l_records: l_records_polar,
    }
}

/// Estimated shipment weight in kilograms, rounded to 2 decimal places.
pub fn calculate_weight_kg(cnt_total_units: u64) -> f64 {
    (cnt_total_units as f64 * N_KG_PER_UNIT * 100.0).round() / 100.0
}

fn shift_date_text(c_date: &str, n_days_offset: i64) -> String {
    match NaiveDate::parse_from_str(c_date, C_FMT_DATE) {
        Ok(date) => (date + Duration::days(n_days_offset))
            .format(C_FMT_DATE)
            .to_string(),
        Err(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::spec::SpecManifestRecord;

    fn derive_record(order_id: &str, state: &str) -> SpecManifestRecord {
        SpecManifestRecord {
            order_id: order_id.to_string(),
            delivery_date: "25/12/2024".to_string(),
            address_1: "1 High St".to_string(),
            address_2: "Richmond".to_string(),
            postal_code: "3121".to_string(),
            state: state.to_string(),
            country: "Australia".to_string(),
            city: String::new(),
            recipient_name: "Jo Citizen".to_string(),
            phone: "0412345678".to_string(),
            time_window: "0600-1800".to_string(),
            group_label: "Made Active".to_string(),
            cnt_shipping_labels: Some(2),
            cnt_total_units: Some(10),
            instructions: "leave at door".to_string(),
            email: Some("jo@example.com".to_string()),
        }
    }

    #[test]
    fn carrier_ready_shifts_date_and_estimates_weight() {
        let l_records = vec![derive_record("#1", "Victoria")];
        let l_carrier = derive_carrier_ready_records(&l_records);

        assert_eq!(l_carrier.len(), 1);
        assert_eq!(l_carrier[0].inv_no, "#1");
        assert_eq!(l_carrier[0].delivery_date, "26/12/2024");
        assert_eq!(l_carrier[0].weight_kg, Some(4.0));
        assert_eq!(l_carrier[0].cnt_cartons, Some(2));
        assert_eq!(l_carrier[0].temperature, "chilled");
        assert_eq!(l_carrier[0].comment, "leave at door");
    }

    #[test]
    fn carrier_ready_date_rolls_over_month_and_year() {
        let mut record = derive_record("#1", "Victoria");
        record.delivery_date = "31/12/2024".to_string();
        let l_carrier = derive_carrier_ready_records(&[record]);

        assert_eq!(l_carrier[0].delivery_date, "01/01/2025");
    }

    #[test]
    fn carrier_ready_unparsable_date_projects_blank() {
        let mut record = derive_record("#1", "Victoria");
        record.delivery_date = "99/99/9999".to_string();
        let l_carrier = derive_carrier_ready_records(&[record]);
        assert_eq!(l_carrier[0].delivery_date, "");

        let mut record_empty = derive_record("#2", "Victoria");
        record_empty.delivery_date = String::new();
        let l_carrier = derive_carrier_ready_records(&[record_empty]);
        assert_eq!(l_carrier[0].delivery_date, "");
    }

    #[test]
    fn carrier_ready_blank_units_propagate_blank_weight() {
        let mut record = derive_record("#1", "Victoria");
        record.cnt_total_units = None;
        let l_carrier = derive_carrier_ready_records(&[record]);

        assert_eq!(l_carrier[0].weight_kg, None);
    }

    #[test]
    fn weight_rounds_to_two_decimals() {
        assert_eq!(calculate_weight_kg(10), 4.0);
        assert_eq!(calculate_weight_kg(1), 0.4);
        assert_eq!(calculate_weight_kg(7), 2.8);
    }

    #[test]
    fn polar_parcel_filters_by_state() {
        let l_records = vec![
            derive_record("#1", "New South Wales"),
            derive_record("#2", "Victoria"),
            derive_record("#3", "Australian Capital Territory"),
        ];
        let date_run = NaiveDate::from_ymd_opt(2024, 12, 30).expect("valid date");
        let manifest = derive_polar_parcel_manifest(&l_records, date_run);

        let l_ids: Vec<&str> = manifest
            .l_records
            .iter()
            .map(|r| r.order_id.as_str())
            .collect();
        assert_eq!(l_ids, vec!["#1", "#3"]);
        assert_eq!(manifest.delivery_date, "01/01/2025");
        assert_eq!(manifest.l_records[0].seller_name, "Made Active");
        assert_eq!(manifest.l_records[0].email, "jo@example.com");
    }
}
