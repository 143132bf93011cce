//! Pipeline constants and static lookup-table factories.

use std::collections::{BTreeMap, BTreeSet};

/// Units carried by one physical shipping label.
pub const N_UNITS_PER_LABEL: u64 = 20;
/// Delivery time window stamped on every manifest record.
pub const C_TIME_WINDOW_DEFAULT: &str = "0600-1800";
/// Kilograms per unit used by the chilled-carrier weight estimate.
pub const N_KG_PER_UNIT: f64 = 0.4;
/// Date layout shared by tag extraction, projections and synthetic rows.
pub const C_FMT_DATE: &str = "%d/%m/%Y";
/// Temperature classification stamped on every chilled-carrier row.
pub const C_CARRIER_TEMPERATURE: &str = "chilled";
/// Worksheet name used for every rendered manifest sheet.
pub const C_SHEET_NAME_MANIFEST: &str = "Manifest";

/// Route tags searched as case-sensitive substrings of the order tag text.
pub const C_TAG_CM: &str = "CM";
/// See [`C_TAG_CM`].
pub const C_TAG_MC: &str = "MC";
/// See [`C_TAG_CM`].
pub const C_TAG_CX: &str = "CX";

////////////////////////////////////////////////////////////////////////////////
// #region ColdXpressHandler

/// Synthetic order identifier of the Cold Xpress pickup row.
pub const C_COLD_XPRESS_ORDER_ID: &str = "CXMANIFEST";
/// Cold Xpress depot street line.
pub const C_COLD_XPRESS_STREET: &str = "830 Wellington Rd";
/// Cold Xpress depot suburb line.
pub const C_COLD_XPRESS_SUBURB: &str = "Rowville";
/// Cold Xpress depot postcode.
pub const C_COLD_XPRESS_POSTCODE: &str = "3178";
/// Cold Xpress recipient name.
pub const C_COLD_XPRESS_NAME: &str = "Cold Xpress";

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ProjectionConstants

/// Expanded state names eligible for the Polar Parcel manifest.
pub const TUP_POLAR_PARCEL_STATES: [&str; 2] =
    ["New South Wales", "Australian Capital Territory"];

/// Days added to the run date for the Polar Parcel preamble delivery date.
pub const N_DAYS_POLAR_DELIVERY_OFFSET: i64 = 2;
/// Days added to each source delivery date in the chilled-carrier projection.
pub const N_DAYS_CARRIER_DELIVERY_OFFSET: i64 = 1;

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region BundleTables

/// Build the Made Active bundle-name to unit-count expansion table.
///
/// Lookup is exact-string-match after trimming the line-item name.
pub fn derive_bundle_units_map() -> BTreeMap<&'static str, u64> {
    BTreeMap::from([
        ("10 Pack", 10),
        ("20 Pack", 20),
        ("30 Pack", 30),
        ("10 Meal Christmas Bundle", 10),
        ("14 Meal Christmas Bundle", 14),
        ("High Protein Pack", 12),
        ("The Bunny Bundle", 10),
    ])
}

/// Build the Clean Eats bundle/meal-plan name list excluded from unit counts.
///
/// Items matching these names contribute zero units; they are labeled outside
/// the per-order manifest record.
pub fn derive_excluded_bundle_names() -> BTreeSet<&'static str> {
    BTreeSet::from([
        "CARB LOVER'S FEAST",
        "SUPER CHARGED CALORIES",
        "FEED ME BEEF",
        "GIVE ME CHICKEN",
        "I WON'T PAS(TA) ON THIS MEAL",
        "THE MEGA PACK",
        "MAKE YOUR OWN MEGA PACK",
        "CARB HATERS FEAST",
        "UNDER CHARGED CALORIES",
        "VEGGIE LOVERS PACK",
        "Clean Eats Meal Plan",
    ])
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region SheetColumnLayouts

/// Bucket manifest columns for the Clean Eats ruleset.
pub const TUP_COLUMNS_MANIFEST_CLEAN_EATS: [&str; 15] = [
    "D.O. No.",
    "Date",
    "Address 1",
    "Address 2",
    "Postal Code",
    "State",
    "Country",
    "Deliver to",
    "Phone No.",
    "Time Window",
    "City",
    "Group",
    "No. of Shipping Labels",
    "Line Items",
    "Instructions",
];

/// Bucket manifest columns for the Made Active ruleset.
pub const TUP_COLUMNS_MANIFEST_MADE_ACTIVE: [&str; 15] = [
    "D.O. No.",
    "Date",
    "Address 1",
    "Address 2",
    "Postal Code",
    "State",
    "Country",
    "Deliver to",
    "Phone No.",
    "Time Window",
    "Group",
    "No. of Shipping Labels",
    "Line Items",
    "Email",
    "Instructions",
];

/// Chilled-carrier manifest columns (CX bucket projection).
pub const TUP_COLUMNS_CARRIER_READY: [&str; 15] = [
    "INV NO.",
    "DELIVERY DATE",
    "STORE NO",
    "STORE NAME",
    "ADDRESS",
    "SUBURB",
    "STATE",
    "POSTCODE",
    "CARTONS",
    "PALLETS",
    "WEIGHT (KG)",
    "INV. VALUE",
    "COD",
    "TEMP",
    "COMMENT",
];

/// Polar Parcel manifest columns (Made Active projection).
pub const TUP_COLUMNS_POLAR_PARCEL: [&str; 10] = [
    "Seller Name",
    "Order No.",
    "Customer Name",
    "Address",
    "City",
    "Postcode",
    "Phone",
    "Email",
    "Delivery Notes",
    "Cartons",
];

/// Zero-based index of `Phone No.` in both bucket manifest layouts.
pub const N_IDX_COL_PHONE_MANIFEST: usize = 8;
/// Zero-based index of `Phone` in the Polar Parcel layout.
pub const N_IDX_COL_PHONE_POLAR: usize = 6;

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ArtifactNames

/// Archive entry name of the CM bucket manifest.
pub const C_FILE_MANIFEST_CM: &str = "CM_Manifest.xlsx";
/// Archive entry name of the MC bucket manifest.
pub const C_FILE_MANIFEST_MC: &str = "MC_Manifest.xlsx";
/// Archive entry name of the CX bucket manifest.
pub const C_FILE_MANIFEST_CX: &str = "CX_Manifest.xlsx";
/// Archive entry name of the untagged-orders manifest.
pub const C_FILE_MANIFEST_OTHER: &str = "Other_Manifest.xlsx";
/// Archive entry name of the chilled-carrier manifest.
pub const C_FILE_MANIFEST_CARRIER_READY: &str = "CX_Ready_Manifest.xlsx";
/// Archive entry name of the Polar Parcel manifest.
pub const C_FILE_MANIFEST_POLAR_PARCEL: &str = "Polar_Parcel_Manifest.xlsx";

// #endregion
////////////////////////////////////////////////////////////////////////////////
