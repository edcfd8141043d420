use contacts_model::TagSet;

use crate::oracle::{OracleAdapter, TagOracle};
use crate::text::normalize_text;

use super::TagClassifier;

/// Tags assigned to one contact plus how the oracle took part.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagOutcome {
    pub tags: TagSet,
    pub oracle_consulted: bool,
    pub oracle_assigned: bool,
}

/// Combines the country tag, keyword rules and the oracle fallback.
///
/// Tag order is: normalized country first, then matching rules in rule
/// order, then the oracle suggestion. The oracle is asked only when
/// `use_oracle` is set, an oracle is attached, the careers text is not
/// blank and the country is the only tag so far.
pub struct TagAggregator<'a> {
    classifier: &'a TagClassifier,
    oracle: Option<OracleAdapter<'a>>,
}

impl<'a> TagAggregator<'a> {
    pub fn new(classifier: &'a TagClassifier) -> Self {
        Self {
            classifier,
            oracle: None,
        }
    }

    #[must_use]
    pub fn with_oracle(mut self, oracle: &'a dyn TagOracle) -> Self {
        self.oracle = Some(OracleAdapter::new(oracle, self.classifier));
        self
    }

    pub fn tag(&self, careers: &str, country: &str, use_oracle: bool) -> TagOutcome {
        let mut outcome = TagOutcome::default();
        let country_tag = normalize_text(country);
        outcome.tags.push(country_tag.as_str());

        let normalized_careers = normalize_text(careers);
        outcome
            .tags
            .extend(self.classifier.match_rules(&normalized_careers));

        if use_oracle
            && outcome.tags.is_only(&country_tag)
            && !normalized_careers.is_empty()
            && let Some(oracle) = &self.oracle
        {
            outcome.oracle_consulted = true;
            let suggestion = oracle.classify(careers, country);
            outcome.oracle_assigned = outcome.tags.push(suggestion);
        }
        outcome
    }

    /// The rendered tag list, `", "`-separated.
    pub fn generate_tags(&self, careers: &str, country: &str, use_oracle: bool) -> String {
        self.tag(careers, country, use_oracle).tags.render()
    }
}
