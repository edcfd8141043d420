//! Text folding used for keyword matching and for rendering tags.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Folds text into its matchable form.
///
/// Lower-cases, decomposes and drops combining marks (so `í` becomes `i`),
/// turns every character that is neither a word character nor whitespace
/// into a space, collapses whitespace runs and trims. Word characters are
/// letters, digits and `_`.
///
/// The result is stable: folding it again returns it unchanged.
///
/// ```
/// use contacts_core::text::normalize_text;
///
/// assert_eq!(normalize_text("Ingeniería"), "ingenieria");
/// assert_eq!(normalize_text("  Comercio Exterior & Negocios "), "comercio exterior negocios");
/// ```
pub fn normalize_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let lowered = text.to_lowercase();
    let mut folded = String::with_capacity(lowered.len());
    for ch in lowered.nfd().filter(|ch| !is_combining_mark(*ch)) {
        if is_word_char(ch) {
            folded.push(ch);
        } else {
            folded.push(' ');
        }
    }
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_case_and_diacritics() {
        assert_eq!(normalize_text("Ingeniería"), "ingenieria");
        assert_eq!(normalize_text("INGENIERIA"), "ingenieria");
        assert_eq!(
            normalize_text("Ingeniería en Energías Renovables"),
            "ingenieria en energias renovables"
        );
        assert_eq!(normalize_text("LOGÍSTICA INTERNACIONAL"), "logistica internacional");
        assert_eq!(normalize_text("CABINAS DE EXPERIMENTACIÓN"), "cabinas de experimentacion");
        assert_eq!(normalize_text("Psicología Organizacional"), "psicologia organizacional");
        assert_eq!(normalize_text("Diseño Industrial"), "diseno industrial");
    }

    #[test]
    fn collapses_punctuation_and_whitespace() {
        assert_eq!(normalize_text("  Ingeniería   Industrial  "), "ingenieria industrial");
        assert_eq!(
            normalize_text("Comercio Exterior & Negocios"),
            "comercio exterior negocios"
        );
        assert_eq!(normalize_text("Medicina,\tEnfermería;Odontología"), "medicina enfermeria odontologia");
        assert_eq!(normalize_text("n/a"), "n a");
    }

    #[test]
    fn keeps_underscores_and_digits() {
        assert_eq!(normalize_text("Sede_2 (Norte)"), "sede_2 norte");
    }

    #[test]
    fn empty_and_symbol_only_input_is_empty() {
        assert_eq!(normalize_text(""), "");
        assert_eq!(normalize_text("   "), "");
        assert_eq!(normalize_text("—/—"), "");
    }

    #[test]
    fn is_idempotent_on_samples() {
        for sample in ["Perú", "Ingeniería Industrial y Logística", "İstanbul", "Å ström"] {
            let once = normalize_text(sample);
            assert_eq!(normalize_text(&once), once);
        }
    }
}
