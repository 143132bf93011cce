//! Shared pipeline models: raw rows, manifest records, buckets and options.

use chrono::NaiveDate;

////////////////////////////////////////////////////////////////////////////////
// #region CustomerGroup

/// Customer-group ruleset selector.
///
/// The two groups share the manifest pipeline but differ in unit counting,
/// region expansion, city inference, email carriage and projection format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumCustomerGroup {
    /// "Clean Eats Australia": bundle items excluded from unit counts,
    /// city inference, chilled-carrier projection.
    CleanEats,
    /// "Made Active": bundle items expanded via the unit table, email column,
    /// Polar Parcel projection.
    MadeActive,
}

impl EnumCustomerGroup {
    /// Group label stamped on every manifest record.
    pub fn label(&self) -> &'static str {
        match self {
            Self::CleanEats => "Clean Eats Australia",
            Self::MadeActive => "Made Active",
        }
    }

    /// Whether the `ACT` region code expands for this group.
    pub fn if_expands_act_region(&self) -> bool {
        matches!(self, Self::MadeActive)
    }

    /// Whether a city is inferred from the expanded state.
    pub fn if_infers_city(&self) -> bool {
        matches!(self, Self::CleanEats)
    }

    /// Whether manifest records carry the order email.
    pub fn if_carries_email(&self) -> bool {
        matches!(self, Self::MadeActive)
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region InputRows

/// One raw line-item row of the order export.
///
/// Order-level fields are repeated on every row of the same order and are
/// read from the first row at aggregation time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecOrderRow {
    /// Order identifier (grouping key).
    pub order_id: String,
    /// Line-item product name (trimmed at lookup time, not here).
    pub lineitem_name: String,
    /// Line-item quantity; non-numeric input degrades to 0 at ingestion.
    pub cnt_quantity: u64,
    /// Free-text order notes.
    pub notes: String,
    /// Free-text order tags (route tags, delivery date).
    pub tags: String,
    /// Shipping street line.
    pub shipping_street: String,
    /// Shipping city line.
    pub shipping_city: String,
    /// Shipping postcode.
    pub shipping_zip: String,
    /// Shipping state/territory code.
    pub shipping_province: String,
    /// Shipping country code.
    pub shipping_country: String,
    /// Shipping recipient name.
    pub shipping_name: String,
    /// Billing phone; preferred phone source.
    pub billing_phone: String,
    /// General phone; fallback when billing phone is blank.
    pub phone: String,
    /// Order email; carried only by the Made Active ruleset.
    pub email: String,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ManifestRecords

/// One normalized manifest record per distinct order.
///
/// `cnt_shipping_labels`/`cnt_total_units` are always `Some` for aggregated
/// orders; `None` exists for the synthetic Cold Xpress row, which must render
/// a blank label count when the CX bucket is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecManifestRecord {
    /// Order identifier ("D.O. No.").
    pub order_id: String,
    /// Delivery date extracted from tags; may be empty.
    pub delivery_date: String,
    /// Street line.
    pub address_1: String,
    /// City line.
    pub address_2: String,
    /// Postcode with apostrophes stripped.
    pub postal_code: String,
    /// Expanded state/territory name.
    pub state: String,
    /// Expanded country name.
    pub country: String,
    /// Inferred city; empty outside the Clean Eats ruleset.
    pub city: String,
    /// Recipient name ("Deliver to").
    pub recipient_name: String,
    /// Normalized phone number.
    pub phone: String,
    /// Delivery time window.
    pub time_window: String,
    /// Customer-group label that produced this record.
    pub group_label: String,
    /// Physical shipping labels needed.
    pub cnt_shipping_labels: Option<u64>,
    /// Total ordered units after bundle rules.
    pub cnt_total_units: Option<u64>,
    /// Free-text delivery instructions.
    pub instructions: String,
    /// Order email; `None` outside the Made Active ruleset.
    pub email: Option<String>,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Buckets

/// Named bucket selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumBucketKey {
    /// Orders whose tags contain `CM`.
    Cm,
    /// Orders whose tags contain `MC`.
    Mc,
    /// Orders whose tags contain `CX`.
    Cx,
    /// Orders matching none of the route tags.
    Other,
}

/// Route-tag partition of the manifest records.
///
/// Buckets may overlap: tag membership is independent substring search, so an
/// order tagged `CMCX` legitimately appears in two buckets. `Other` is
/// exclusive of all three.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecBuckets {
    /// Records of orders tagged `CM`.
    pub l_records_cm: Vec<SpecManifestRecord>,
    /// Records of orders tagged `MC` (plus the optional Cold Xpress row).
    pub l_records_mc: Vec<SpecManifestRecord>,
    /// Records of orders tagged `CX`.
    pub l_records_cx: Vec<SpecManifestRecord>,
    /// Records of untagged orders.
    pub l_records_other: Vec<SpecManifestRecord>,
}

impl SpecBuckets {
    /// Records of one named bucket.
    pub fn records(&self, key: EnumBucketKey) -> &[SpecManifestRecord] {
        match key {
            EnumBucketKey::Cm => &self.l_records_cm,
            EnumBucketKey::Mc => &self.l_records_mc,
            EnumBucketKey::Cx => &self.l_records_cx,
            EnumBucketKey::Other => &self.l_records_other,
        }
    }

    /// Total records across all four buckets (overlaps counted twice).
    pub fn record_count(&self) -> usize {
        self.l_records_cm.len()
            + self.l_records_mc.len()
            + self.l_records_cx.len()
            + self.l_records_other.len()
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Projections

/// One chilled-carrier row derived from a CX bucket record.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecCarrierReadyRecord {
    /// Invoice number (source order identifier).
    pub inv_no: String,
    /// Source delivery date shifted forward one day; empty when unparsable.
    pub delivery_date: String,
    /// Store/recipient name.
    pub store_name: String,
    /// Street line.
    pub address: String,
    /// Suburb line.
    pub suburb: String,
    /// Expanded state name.
    pub state: String,
    /// Postcode.
    pub postcode: String,
    /// Carton count (source shipping label count).
    pub cnt_cartons: Option<u64>,
    /// Estimated weight in kilograms, rounded to 2 decimals.
    pub weight_kg: Option<f64>,
    /// Temperature classification.
    pub temperature: String,
    /// Free-text comment (source instructions).
    pub comment: String,
}

/// One Polar Parcel row derived from a Made Active manifest record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecPolarParcelRecord {
    /// Seller display name.
    pub seller_name: String,
    /// Order identifier.
    pub order_id: String,
    /// Recipient name.
    pub customer_name: String,
    /// Street line.
    pub address: String,
    /// City line.
    pub city: String,
    /// Postcode.
    pub postcode: String,
    /// Normalized phone, rendered as text.
    pub phone: String,
    /// Order email.
    pub email: String,
    /// Free-text delivery notes.
    pub delivery_notes: String,
    /// Carton count (source shipping label count).
    pub cnt_cartons: Option<u64>,
}

/// Polar Parcel manifest: preamble delivery date plus eligible rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecPolarParcelManifest {
    /// Run date shifted forward two days, `DD/MM/YYYY`.
    pub delivery_date: String,
    /// Rows for orders shipping to Polar-eligible states.
    pub l_records: Vec<SpecPolarParcelRecord>,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region RunOptions

/// Caller-supplied run parameters.
///
/// The run date is explicit input so the pipeline stays deterministic; only
/// the outermost caller reads the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecRunOptions {
    /// Customer-group ruleset.
    pub enum_group: EnumCustomerGroup,
    /// Append the Cold Xpress pickup row to the MC bucket.
    pub if_cold_express: bool,
    /// Run date used by synthetic rows and projection offsets.
    pub date_run: NaiveDate,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
