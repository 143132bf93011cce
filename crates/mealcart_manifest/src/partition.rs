//! Route-tag bucket partitioning and the Cold Xpress synthetic row.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::conf::{
    C_COLD_XPRESS_NAME, C_COLD_XPRESS_ORDER_ID, C_COLD_XPRESS_POSTCODE, C_COLD_XPRESS_STREET,
    C_COLD_XPRESS_SUBURB, C_FMT_DATE, C_TAG_CM, C_TAG_CX, C_TAG_MC, C_TIME_WINDOW_DEFAULT,
};
use crate::spec::{EnumCustomerGroup, SpecBuckets, SpecManifestRecord, SpecOrderRow};

/// Partition manifest records into the four route buckets.
///
/// Membership is case-sensitive substring search over the raw tag text of any
/// row of the order, so `CM-URGENT` matches `CM` and `CMCX` matches two
/// buckets at once. `Other` collects orders matching none of the tags; the
/// union of the four buckets always covers every record.
pub fn partition_records(
    l_records: &[SpecManifestRecord],
    l_rows: &[SpecOrderRow],
) -> SpecBuckets {
    let set_ids_cm = select_order_ids_with_tag(l_rows, C_TAG_CM);
    let set_ids_mc = select_order_ids_with_tag(l_rows, C_TAG_MC);
    let set_ids_cx = select_order_ids_with_tag(l_rows, C_TAG_CX);

    let mut buckets = SpecBuckets::default();
    for record in l_records {
        let b_tagged_cm = set_ids_cm.contains(record.order_id.as_str());
        let b_tagged_mc = set_ids_mc.contains(record.order_id.as_str());
        let b_tagged_cx = set_ids_cx.contains(record.order_id.as_str());

        if b_tagged_cm {
            buckets.l_records_cm.push(record.clone());
        }
        if b_tagged_mc {
            buckets.l_records_mc.push(record.clone());
        }
        if b_tagged_cx {
            buckets.l_records_cx.push(record.clone());
        }
        if !b_tagged_cm && !b_tagged_mc && !b_tagged_cx {
            buckets.l_records_other.push(record.clone());
        }
    }

    buckets
}

/// Order identifiers whose tags land the order in more than one route bucket.
pub fn select_overlapping_order_ids(l_rows: &[SpecOrderRow]) -> Vec<String> {
    let set_ids_cm = select_order_ids_with_tag(l_rows, C_TAG_CM);
    let set_ids_mc = select_order_ids_with_tag(l_rows, C_TAG_MC);
    let set_ids_cx = select_order_ids_with_tag(l_rows, C_TAG_CX);

    let mut set_ids_overlapping = BTreeSet::new();
    for set_pair in [
        (&set_ids_cm, &set_ids_mc),
        (&set_ids_cm, &set_ids_cx),
        (&set_ids_mc, &set_ids_cx),
    ] {
        for order_id in set_pair.0.intersection(set_pair.1) {
            set_ids_overlapping.insert(order_id.to_string());
        }
    }

    set_ids_overlapping.into_iter().collect()
}

/// Append the administrative Cold Xpress pickup row to the MC bucket.
///
/// The row is not an order: it is addressed to the cold-storage handler,
/// dated with the run date, and carries the summed CX label count. An empty
/// CX bucket yields a blank label count, never zero.
pub fn append_cold_express_row(buckets: &mut SpecBuckets, date_run: NaiveDate) {
    let cnt_labels_cx = if buckets.l_records_cx.is_empty() {
        None
    } else {
        Some(
            buckets
                .l_records_cx
                .iter()
                .filter_map(|record| record.cnt_shipping_labels)
                .sum(),
        )
    };

    buckets.l_records_mc.push(SpecManifestRecord {
        order_id: C_COLD_XPRESS_ORDER_ID.to_string(),
        delivery_date: date_run.format(C_FMT_DATE).to_string(),
        address_1: C_COLD_XPRESS_STREET.to_string(),
        address_2: C_COLD_XPRESS_SUBURB.to_string(),
        postal_code: C_COLD_XPRESS_POSTCODE.to_string(),
        state: "Victoria".to_string(),
        country: "Australia".to_string(),
        city: "Melbourne".to_string(),
        recipient_name: C_COLD_XPRESS_NAME.to_string(),
        phone: String::new(),
        time_window: C_TIME_WINDOW_DEFAULT.to_string(),
        group_label: EnumCustomerGroup::CleanEats.label().to_string(),
        cnt_shipping_labels: cnt_labels_cx,
        cnt_total_units: None,
        instructions: String::new(),
        email: None,
    });
}

fn select_order_ids_with_tag<'a>(l_rows: &'a [SpecOrderRow], c_tag: &str) -> BTreeSet<&'a str> {
    l_rows
        .iter()
        .filter(|row| row.tags.contains(c_tag))
        .map(|row| row.order_id.as_str())
        .collect()
}
