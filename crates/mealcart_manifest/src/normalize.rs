//! Stateless field normalizers applied during order aggregation.

use std::sync::OnceLock;

use regex::Regex;

use crate::spec::EnumCustomerGroup;

/// Normalize a raw phone value to local `0`-prefixed form.
///
/// Whitespace and `+` are stripped; a leading `61` country code becomes a
/// single `0`; a bare mobile number starting with `4` gains a leading `0`.
/// Anything else passes through unchanged. No digit or length validation.
pub fn sanitize_phone_number(phone_raw: &str) -> String {
    let c_phone: String = phone_raw
        .trim()
        .chars()
        .filter(|chr| !chr.is_whitespace() && *chr != '+')
        .collect();

    if let Some(c_rest) = c_phone.strip_prefix("61") {
        return format!("0{c_rest}");
    }
    if c_phone.starts_with('4') {
        return format!("0{c_phone}");
    }
    c_phone
}

/// Expand a state/territory code to its full name.
///
/// `ACT` expands only for the Made Active ruleset; unknown codes pass
/// through unchanged.
pub fn expand_region_code(region_code: &str, enum_group: EnumCustomerGroup) -> String {
    match region_code {
        "VIC" => "Victoria".to_string(),
        "NSW" => "New South Wales".to_string(),
        "ACT" if enum_group.if_expands_act_region() => {
            "Australian Capital Territory".to_string()
        }
        _ => region_code.to_string(),
    }
}

/// Expand a country code to its full name; unknown codes pass through.
pub fn expand_country_code(country_code: &str) -> String {
    match country_code {
        "AU" => "Australia".to_string(),
        _ => country_code.to_string(),
    }
}

/// Infer a delivery city from an expanded state name.
pub fn infer_city_from_region(region_name: &str) -> String {
    match region_name {
        "Victoria" => "Melbourne".to_string(),
        "New South Wales" => "Sydney".to_string(),
        _ => String::new(),
    }
}

/// Extract the first `DD/MM/YYYY` token from the order tag text.
///
/// The token is returned verbatim without calendar validation; no match
/// yields an empty string.
pub fn extract_delivery_date(tags: &str) -> String {
    static RE_DELIVERY_DATE: OnceLock<Regex> = OnceLock::new();
    let re_delivery_date = RE_DELIVERY_DATE
        .get_or_init(|| Regex::new(r"\b(\d{2}/\d{2}/\d{4})\b").expect("date pattern compiles"));

    re_delivery_date
        .captures(tags)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
