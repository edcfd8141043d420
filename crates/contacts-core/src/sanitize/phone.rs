use std::sync::LazyLock;

use phonenumber::{Mode, country};
use regex::Regex;

use super::{first_segment, is_empty_marker};

/// Region assumed for numbers written without a country code.
pub const DEFAULT_REGION: &str = "US";

/// Numbers with fewer digits than this are rejected before parsing.
pub const MIN_PHONE_DIGITS: usize = 7;

static DISALLOWED_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9\s()+\-]").expect("phone filter compiles"));

static E164_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+[1-9][0-9]{1,14}$").expect("e164 pattern compiles"));

/// Formats a phone cell as a valid E.164 number, or returns `""`.
///
/// Spreadsheet artifacts are undone first (`50425618727.0`, `5.04e+10`),
/// only the first of several numbers is kept, and the candidate is parsed
/// with `default_region` as a hint and then without one. A number is kept
/// only when it validates for its region.
///
/// ```
/// use contacts_core::sanitize::format_phone_e164_strict;
///
/// assert_eq!(format_phone_e164_strict("12345", "US"), "");
/// ```
pub fn format_phone_e164_strict(raw: &str, default_region: &str) -> String {
    let trimmed = raw.trim();
    if is_empty_marker(trimmed) {
        return String::new();
    }
    let Some(expanded) = undo_numeric_artifacts(trimmed) else {
        return String::new();
    };

    let first = first_segment(&expanded, &PHONE_SEPARATORS);
    let filtered = DISALLOWED_CHARS.replace_all(first, "");
    let filtered = filtered.trim();
    if filtered.is_empty() {
        return String::new();
    }
    let digits = filtered.chars().filter(char::is_ascii_digit).count();
    if digits < MIN_PHONE_DIGITS {
        return String::new();
    }

    let candidate = if filtered.starts_with('+') {
        filtered.to_string()
    } else {
        format!("+{filtered}")
    };
    let region = default_region
        .trim()
        .to_ascii_uppercase()
        .parse::<country::Id>()
        .ok();
    region
        .and_then(|region| parse_valid_e164(Some(region), &candidate))
        .or_else(|| parse_valid_e164(None, &candidate))
        .unwrap_or_default()
}

/// Email separators plus the dashes people use between two numbers.
const PHONE_SEPARATORS: [&str; 9] = [";", ",", "/", "|", "\n", "\t", " y ", " - ", " -"];

/// Strips a float-style `.0` suffix and expands scientific notation.
///
/// Returns `None` when the text looks scientific but is not a finite number.
fn undo_numeric_artifacts(value: &str) -> Option<String> {
    let value = value.strip_suffix(".0").unwrap_or(value);
    let lowered = value.to_ascii_lowercase();
    if lowered.contains("e+") || lowered.contains("e-") {
        let parsed: f64 = value.trim().parse().ok()?;
        if !parsed.is_finite() {
            return None;
        }
        return Some(format!("{:.0}", parsed.trunc()));
    }
    Some(value.to_string())
}

fn parse_valid_e164(region: Option<country::Id>, candidate: &str) -> Option<String> {
    let number = phonenumber::parse(region, candidate).ok()?;
    if !phonenumber::is_valid(&number) {
        return None;
    }
    let formatted = number.format().mode(Mode::E164).to_string();
    E164_SHAPE.is_match(&formatted).then_some(formatted)
}
