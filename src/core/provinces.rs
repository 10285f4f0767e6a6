//! Province-level administrative division codes (GB/T 2260).
//!
//! The first two digits of a resident identity card number name the
//! province, municipality or autonomous region where it was issued.
//! Codes `81`–`83` are used by residence permits for Hong Kong, Macao and
//! Taiwan residents.

/// Returned by [`province_name`] when a code is not in [`PROVINCES`].
pub const UNKNOWN_PROVINCE: &str = "Unknown province";

/// Look up the name for a 2-digit province code.
///
/// Returns [`UNKNOWN_PROVINCE`] for codes not in the table.
pub fn province_name(code: &str) -> &'static str {
    lookup(code).unwrap_or(UNKNOWN_PROVINCE)
}

/// Check whether `code` is a known 2-digit province code.
pub fn is_known_province_code(code: &str) -> bool {
    lookup(code).is_some()
}

/// Province codes that a mainland resident identity card may start with.
///
/// Excludes the SAR and Taiwan codes, which either belong to residence
/// permits (`81`–`83`) or are not issued (`71`).
pub fn mainland_province_codes() -> impl Iterator<Item = &'static str> {
    PROVINCES
        .iter()
        .map(|&(code, _)| code)
        .filter(|code| code.as_bytes()[0] < b'7')
}

fn lookup(code: &str) -> Option<&'static str> {
    PROVINCES
        .binary_search_by(|&(c, _)| c.cmp(code))
        .ok()
        .map(|idx| PROVINCES[idx].1)
}

/// Province code → name. Sorted by code for binary search.
pub static PROVINCES: &[(&str, &str)] = &[
    ("11", "Beijing"),
    ("12", "Tianjin"),
    ("13", "Hebei"),
    ("14", "Shanxi"),
    ("15", "Inner Mongolia"),
    ("21", "Liaoning"),
    ("22", "Jilin"),
    ("23", "Heilongjiang"),
    ("31", "Shanghai"),
    ("32", "Jiangsu"),
    ("33", "Zhejiang"),
    ("34", "Anhui"),
    ("35", "Fujian"),
    ("36", "Jiangxi"),
    ("37", "Shandong"),
    ("41", "Henan"),
    ("42", "Hubei"),
    ("43", "Hunan"),
    ("44", "Guangdong"),
    ("45", "Guangxi"),
    ("46", "Hainan"),
    ("50", "Chongqing"),
    ("51", "Sichuan"),
    ("52", "Guizhou"),
    ("53", "Yunnan"),
    ("54", "Tibet"),
    ("61", "Shaanxi"),
    ("62", "Gansu"),
    ("63", "Qinghai"),
    ("64", "Ningxia"),
    ("65", "Xinjiang"),
    ("71", "Taiwan"),
    ("81", "Hong Kong"),
    ("82", "Macao"),
    ("83", "Taiwan"),
];
