//! Month name lookup
//!
//! Maps English month names and abbreviations to two-digit month codes.

/// Every recognized month token, lowercase, with its two-digit code
const MONTHS: &[(&str, &str)] = &[
    ("january", "01"),
    ("jan", "01"),
    ("ja", "01"),
    ("february", "02"),
    ("feb", "02"),
    ("fe", "02"),
    ("march", "03"),
    ("mar", "03"),
    ("april", "04"),
    ("apr", "04"),
    ("ap", "04"),
    ("may", "05"),
    ("june", "06"),
    ("jun", "06"),
    ("july", "07"),
    ("jul", "07"),
    ("august", "08"),
    ("aug", "08"),
    ("au", "08"),
    ("september", "09"),
    ("sept", "09"),
    ("sep", "09"),
    ("se", "09"),
    ("october", "10"),
    ("oct", "10"),
    ("oc", "10"),
    ("november", "11"),
    ("nov", "11"),
    ("no", "11"),
    ("december", "12"),
    ("dec", "12"),
    ("de", "12"),
];

/// Look up the two-digit code for a month name (case-insensitive)
///
/// Returns an empty string for anything that is not a known month token,
/// so callers can treat it as "no match" without error handling.
///
/// ```
/// use neatdate::month::num_from_name;
///
/// assert_eq!(num_from_name("OcTobEr"), "10");
/// assert_eq!(num_from_name("ja"), "01");
/// assert_eq!(num_from_name("Invalid"), "");
/// ```
pub fn num_from_name(token: &str) -> &'static str {
    let token = token.trim();
    MONTHS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(token))
        .map(|(_, code)| *code)
        .unwrap_or("")
}

/// Month number (1-12) for a month name, or `None` if unknown
pub fn month_number(token: &str) -> Option<u32> {
    num_from_name(token).parse().ok()
}
