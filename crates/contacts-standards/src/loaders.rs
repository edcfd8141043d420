use std::collections::BTreeSet;
use std::path::Path;

use csv::ReaderBuilder;
use serde::Deserialize;

use contacts_model::{CountryAllowList, TagRule};

use crate::error::{Result, StandardsError};
use crate::paths::{countries_path, standards_root, tag_rules_path};

/// Header of the single column in the country list.
const COUNTRY_COLUMN: &str = "Country";

#[derive(Debug, Deserialize)]
struct RulesFile {
    #[serde(default)]
    rules: Vec<TagRule>,
}

/// Reference data loaded once per process and shared read-only.
#[derive(Debug, Clone)]
pub struct Standards {
    pub countries: CountryAllowList,
    pub tag_rules: Vec<TagRule>,
}

impl Standards {
    /// Loads both reference tables from a standards directory.
    pub fn load(root: &Path) -> Result<Self> {
        let tag_rules = load_tag_rules(&tag_rules_path(root))?;
        let countries = load_country_allow_list(&countries_path(root))?;
        Ok(Self {
            countries,
            tag_rules,
        })
    }

    /// Tag identifiers in rule order.
    pub fn tag_vocabulary(&self) -> Vec<String> {
        self.tag_rules.iter().map(|rule| rule.tag.clone()).collect()
    }
}

pub fn load_default_standards() -> Result<Standards> {
    Standards::load(&standards_root())
}

/// Reads the ordered tag rule table.
///
/// Rule order in the file is preserved; it determines tag output order.
pub fn load_tag_rules(path: &Path) -> Result<Vec<TagRule>> {
    let text = std::fs::read_to_string(path).map_err(|source| StandardsError::io(path, source))?;
    let parsed: RulesFile = toml::from_str(&text).map_err(|source| StandardsError::Toml {
        path: path.to_path_buf(),
        source,
    })?;
    let mut rules = Vec::with_capacity(parsed.rules.len());
    let mut seen = BTreeSet::new();
    for mut rule in parsed.rules {
        rule.tag = rule.tag.trim().to_string();
        if rule.tag.is_empty() {
            return Err(StandardsError::invalid_rules(path, "rule with empty tag"));
        }
        if !seen.insert(rule.tag.clone()) {
            return Err(StandardsError::invalid_rules(
                path,
                format!("duplicate tag '{}'", rule.tag),
            ));
        }
        rule.keywords = rule
            .keywords
            .iter()
            .map(|keyword| keyword.trim().to_string())
            .filter(|keyword| !keyword.is_empty())
            .collect();
        if rule.keywords.is_empty() {
            return Err(StandardsError::invalid_rules(
                path,
                format!("tag '{}' has no keywords", rule.tag),
            ));
        }
        rules.push(rule);
    }
    if rules.is_empty() {
        return Err(StandardsError::invalid_rules(path, "no rules defined"));
    }
    Ok(rules)
}

/// Reads the country allow-list from a one-column CSV with a `Country` header.
pub fn load_country_allow_list(path: &Path) -> Result<CountryAllowList> {
    let csv_error = |source| StandardsError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(csv_error)?;
    let headers = reader.headers().map_err(csv_error)?.clone();
    let index = headers
        .iter()
        .position(|header| header.trim().trim_matches('\u{feff}') == COUNTRY_COLUMN)
        .ok_or_else(|| StandardsError::MissingColumn {
            path: path.to_path_buf(),
            column: COUNTRY_COLUMN.to_string(),
        })?;
    let mut countries = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        let value = record.get(index).unwrap_or("").trim();
        if !value.is_empty() {
            countries.push(value.to_string());
        }
    }
    if countries.is_empty() {
        return Err(StandardsError::EmptyCountryList {
            path: path.to_path_buf(),
        });
    }
    Ok(CountryAllowList::new(countries))
}
