//! Field sanitizers.
//!
//! Every sanitizer is total: it maps any input text to a cleaned value or to
//! `""`, and never fails.

mod country;
mod email;
mod phone;

pub use country::validate_country;
pub use email::{EMAIL_PLACEHOLDERS, normalize_email};
pub use phone::{DEFAULT_REGION, MIN_PHONE_DIGITS, format_phone_e164_strict};

/// Cell contents treated as missing, compared case-insensitively.
pub const EMPTY_MARKERS: [&str; 8] = ["", "nan", "none", "null", "undefined", "-", "–", "—"];

/// Separators between several values packed into one cell, in priority order.
pub(crate) const MULTI_VALUE_SEPARATORS: [&str; 7] = [";", ",", "/", "|", "\n", "\t", " y "];

/// Trims a free-text cell and maps empty markers to `""`.
pub fn clean_value(raw: &str) -> String {
    let trimmed = raw.trim();
    if is_empty_marker(trimmed) {
        return String::new();
    }
    trimmed.to_string()
}

pub(crate) fn is_empty_marker(value: &str) -> bool {
    let lowered = value.to_lowercase();
    EMPTY_MARKERS.contains(&lowered.as_str())
}

/// Keeps the trimmed text before the first separator, checking separators in
/// list order. Returns `value` unchanged when none occurs.
pub(crate) fn first_segment<'a>(value: &'a str, separators: &[&str]) -> &'a str {
    separators
        .iter()
        .find_map(|separator| value.split_once(separator))
        .map_or(value, |(head, _)| head.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_value_maps_markers_to_empty() {
        for marker in ["", "   ", "nan", "NaN", "None", "NULL", "undefined", "-", "–", "—"] {
            assert_eq!(clean_value(marker), "", "marker {marker:?}");
        }
    }

    #[test]
    fn every_dash_is_an_empty_marker() {
        for dash in ["-", "–", "—"] {
            assert!(is_empty_marker(dash), "dash {dash:?}");
        }
        assert!(!is_empty_marker("--"));
    }

    #[test]
    fn clean_value_trims_real_text() {
        assert_eq!(clean_value("  UNAH  "), "UNAH");
        assert_eq!(clean_value("Nanotecnología"), "Nanotecnología");
    }

    #[test]
    fn first_segment_uses_separator_priority() {
        // ";" outranks "," even though "," appears first.
        assert_eq!(first_segment("a, b; c", &MULTI_VALUE_SEPARATORS), "a, b");
        assert_eq!(first_segment("a / b", &MULTI_VALUE_SEPARATORS), "a");
        assert_eq!(first_segment("maria y jose", &MULTI_VALUE_SEPARATORS), "maria");
        assert_eq!(first_segment("plain", &MULTI_VALUE_SEPARATORS), "plain");
    }
}
