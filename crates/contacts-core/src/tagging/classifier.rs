use contacts_model::TagRule;

use crate::text::normalize_text;

/// Deterministic keyword classifier over a fixed rule table.
///
/// Keywords are normalized once at construction, so rules may be written
/// with accents or capitals. A rule fires when any of its keywords occurs as
/// a substring of the normalized careers text.
#[derive(Debug, Clone)]
pub struct TagClassifier {
    rules: Vec<TagRule>,
}

impl TagClassifier {
    pub fn new(rules: Vec<TagRule>) -> Self {
        let rules = rules
            .into_iter()
            .map(|rule| TagRule {
                keywords: rule
                    .keywords
                    .iter()
                    .map(String::as_str)
                    .map(normalize_text)
                    .filter(|keyword| !keyword.is_empty())
                    .collect(),
                ..rule
            })
            .collect();
        Self { rules }
    }

    pub fn rules(&self) -> &[TagRule] {
        &self.rules
    }

    /// Tag names in rule order.
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.tag.as_str())
    }

    pub fn is_known_tag(&self, tag: &str) -> bool {
        self.vocabulary().any(|known| known == tag)
    }

    /// Tags whose rules fire on already-normalized text, in rule order.
    pub fn match_rules<'a>(&'a self, normalized: &str) -> Vec<&'a str> {
        if normalized.is_empty() {
            return Vec::new();
        }
        self.rules
            .iter()
            .filter(|rule| {
                rule.keywords
                    .iter()
                    .any(|keyword| normalized.contains(keyword.as_str()))
            })
            .map(|rule| rule.tag.as_str())
            .collect()
    }
}
