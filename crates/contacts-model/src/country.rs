use std::collections::BTreeSet;

/// Canonical country names accepted by the CRM import.
///
/// Membership is an exact string comparison: no case folding, no diacritic
/// folding, no aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryAllowList {
    countries: BTreeSet<String>,
}

impl CountryAllowList {
    pub fn new<I, S>(countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            countries: countries.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, country: &str) -> bool {
        self.countries.contains(country)
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.countries.iter().map(String::as_str)
    }
}
