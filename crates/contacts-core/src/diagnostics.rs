//! Diagnostics that sit beside the conversion: country listing, tag
//! coverage and validation-only summaries.

use std::collections::{BTreeMap, BTreeSet};

use contacts_model::{
    CountryAllowList, CountryCount, NormalizedContact, PipelineStats, SourceTable,
    ValidationSummary,
};

use crate::error::{PipelineError, Result};
use crate::mapping;
use crate::sanitize::clean_value;
use crate::text::normalize_text;

/// Distinct non-blank raw `País` values, sorted, with their row counts.
pub fn list_countries(table: &SourceTable) -> Result<Vec<CountryCount>> {
    require_column(table, mapping::COUNTRY)?;
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in &table.records {
        let Some(country) = record.get(mapping::COUNTRY) else {
            continue;
        };
        if country.trim().is_empty() {
            continue;
        }
        *counts.entry(country).or_default() += 1;
    }
    Ok(counts
        .into_iter()
        .map(|(country, count)| CountryCount {
            country: country.to_string(),
            count,
        })
        .collect())
}

pub(crate) fn require_column(table: &SourceTable, column: &str) -> Result<()> {
    if table.has_column(column) {
        Ok(())
    } else {
        Err(PipelineError::MissingColumn {
            column: column.to_string(),
        })
    }
}

/// True when the rendered tags are exactly the normalized country.
pub fn has_only_country_tag(contact: &NormalizedContact) -> bool {
    let tags = contact.tags.trim();
    !tags.is_empty() && tags == normalize_text(&contact.country)
}

/// Fills the country-only / extra / untagged split from surviving contacts.
pub fn tally_tag_coverage(contacts: &[NormalizedContact], stats: &mut PipelineStats) {
    for contact in contacts {
        if contact.tags.trim().is_empty() {
            stats.untagged += 1;
        } else if has_only_country_tag(contact) {
            stats.country_only_tags += 1;
        } else {
            stats.extra_tags += 1;
        }
    }
}

/// Channel mismatches among `contacts`, and the raw country values that the
/// allow-list rejected.
pub fn validation_summary<'a>(
    contacts: &[NormalizedContact],
    raw_countries: impl IntoIterator<Item = &'a str>,
    countries: &CountryAllowList,
) -> ValidationSummary {
    let phone_empty_email_present = contacts
        .iter()
        .filter(|contact| contact.phone.is_empty() && !contact.email.is_empty())
        .count();
    let email_empty_phone_present = contacts
        .iter()
        .filter(|contact| contact.email.is_empty() && !contact.phone.is_empty())
        .count();
    let invalid_countries: BTreeSet<String> = raw_countries
        .into_iter()
        .map(clean_value)
        .filter(|country| !country.is_empty() && !countries.contains(country))
        .collect();
    ValidationSummary {
        phone_empty_email_present,
        email_empty_phone_present,
        invalid_countries: invalid_countries.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use contacts_model::RawRecord;

    use super::*;

    fn table(countries: &[Option<&str>]) -> SourceTable {
        let records = countries
            .iter()
            .map(|country| {
                [
                    (mapping::NAME, Some("U")),
                    (mapping::COUNTRY, *country),
                ]
                .into_iter()
                .collect::<RawRecord>()
            })
            .collect();
        SourceTable::new(
            vec![mapping::NAME.to_string(), mapping::COUNTRY.to_string()],
            records,
        )
    }

    #[test]
    fn countries_are_sorted_and_counted() {
        let table = table(&[
            Some("Honduras"),
            Some("Chile"),
            None,
            Some("Honduras"),
            Some("   "),
        ]);
        let listed = list_countries(&table).unwrap();
        assert_eq!(
            listed,
            vec![
                CountryCount {
                    country: "Chile".into(),
                    count: 1
                },
                CountryCount {
                    country: "Honduras".into(),
                    count: 2
                },
            ]
        );
    }

    #[test]
    fn listing_requires_the_country_column() {
        let table = SourceTable::new(vec![mapping::NAME.to_string()], Vec::new());
        let error = list_countries(&table).unwrap_err();
        assert!(matches!(error, PipelineError::MissingColumn { ref column } if column == "País"));
    }

    #[test]
    fn tag_coverage_split() {
        let contact = |country: &str, tags: &str| NormalizedContact {
            country: country.to_string(),
            tags: tags.to_string(),
            ..NormalizedContact::default()
        };
        let contacts = vec![
            contact("Perú", "peru"),
            contact("Perú", "peru, logistica internacional"),
            contact("", ""),
            contact("", "logistica internacional"),
        ];
        let mut stats = PipelineStats::default();
        tally_tag_coverage(&contacts, &mut stats);
        assert_eq!(stats.country_only_tags, 1);
        assert_eq!(stats.extra_tags, 2);
        assert_eq!(stats.untagged, 1);
    }

    #[test]
    fn validation_counts_missing_channels() {
        let allow = CountryAllowList::new(["Chile"]);
        let contact = |email: &str, phone: &str, country: &str| NormalizedContact {
            email: email.to_string(),
            phone: phone.to_string(),
            country: country.to_string(),
            ..NormalizedContact::default()
        };
        let summary = validation_summary(
            &[
                contact("a@x.com", "", "Chile"),
                contact("", "+12024561111", "Chile"),
                contact("b@x.com", "+12024561111", ""),
            ],
            ["Chile", " Chile ", "Atlantis", "chile", "", "nan", "Atlantis"],
            &allow,
        );
        assert_eq!(summary.phone_empty_email_present, 1);
        assert_eq!(summary.email_empty_phone_present, 1);
        assert_eq!(
            summary.invalid_countries,
            vec!["Atlantis".to_string(), "chile".to_string()]
        );
        assert!(!summary.all_countries_valid());
    }

    #[test]
    fn allowed_raw_countries_are_all_valid() {
        let allow = CountryAllowList::new(["Chile", "Honduras"]);
        let summary = validation_summary(&[], ["Chile", "Honduras", "  "], &allow);
        assert!(summary.all_countries_valid());
    }
}
