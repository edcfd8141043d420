use std::sync::LazyLock;

use regex::Regex;

use super::{MULTI_VALUE_SEPARATORS, first_segment, is_empty_marker};

/// Placeholder texts that mean "no email", compared after lower-casing.
pub const EMAIL_PLACEHOLDERS: [&str; 6] = [
    "no disponible",
    "n/d",
    "n.d.",
    "nd",
    "sin email",
    "correo no disponible",
];

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$").expect("email pattern compiles")
});

/// Extracts one lower-cased, well-formed email address from a cell.
///
/// When the cell packs several values, only the first is kept. Anything that
/// does not look like `local@domain.tld` becomes `""`.
pub fn normalize_email(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    if is_empty_marker(&lowered) || EMAIL_PLACEHOLDERS.contains(&lowered.as_str()) {
        return String::new();
    }
    let candidate = first_segment(&lowered, &MULTI_VALUE_SEPARATORS);
    if EMAIL_SHAPE.is_match(candidate) {
        candidate.to_string()
    } else {
        String::new()
    }
}
