//! The conversion pipeline: select, sanitize, tag, validate, deduplicate.
//!
//! [`ContactPipeline`] bundles the reference data loaded from `standards/`,
//! the optional classification oracle and the run options. One call to
//! [`ContactPipeline::run`] processes a whole [`SourceTable`] and returns the
//! surviving contacts together with the run statistics.

use contacts_model::{
    CountryAllowList, NormalizedContact, PipelineStats, RawRecord, SourceTable,
    ValidationSummary,
};
use contacts_standards::Standards;
use tracing::{debug, info, info_span, warn};

use crate::diagnostics::{require_column, tally_tag_coverage, validation_summary};
use crate::error::{PipelineError, Result};
use crate::mapping::{self, MappingContext, email_was_cleared, map_record};
use crate::oracle::TagOracle;
use crate::sanitize::DEFAULT_REGION;
use crate::tagging::{TagAggregator, TagClassifier};
use crate::validate::{dedupe_by_email, retain_identified};

/// Run options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Case-insensitive substring matched against the raw `País` cell.
    pub country_filter: Option<String>,
    /// Consult the oracle for rows no keyword rule tags.
    pub use_oracle: bool,
    /// Compute statistics and the validation summary but emit no contacts.
    pub validate_only: bool,
    /// Region hint for phone numbers without a country code.
    pub default_region: String,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            country_filter: None,
            use_oracle: true,
            validate_only: false,
            default_region: DEFAULT_REGION.to_string(),
        }
    }
}

impl PipelineOptions {
    /// Sets the country filter; blank filters select every row.
    #[must_use]
    pub fn with_country_filter(mut self, filter: Option<String>) -> Self {
        self.country_filter = filter
            .map(|filter| filter.trim().to_string())
            .filter(|filter| !filter.is_empty());
        self
    }

    #[must_use]
    pub fn with_oracle(mut self, use_oracle: bool) -> Self {
        self.use_oracle = use_oracle;
        self
    }

    #[must_use]
    pub fn with_validate_only(mut self, validate_only: bool) -> Self {
        self.validate_only = validate_only;
        self
    }

    #[must_use]
    pub fn with_default_region(mut self, region: impl Into<String>) -> Self {
        self.default_region = region.into();
        self
    }
}

/// Result of one pipeline run.
#[derive(Debug, Clone, Default)]
pub struct PipelineOutcome {
    /// Surviving contacts in email order; empty in validation-only runs.
    pub contacts: Vec<NormalizedContact>,
    pub stats: PipelineStats,
    /// Present only in validation-only runs.
    pub validation: Option<ValidationSummary>,
}

/// Reference data, oracle and options for converting source sheets.
pub struct ContactPipeline {
    countries: CountryAllowList,
    classifier: TagClassifier,
    oracle: Option<Box<dyn TagOracle>>,
    options: PipelineOptions,
}

impl ContactPipeline {
    pub fn new(countries: CountryAllowList, classifier: TagClassifier) -> Self {
        Self {
            countries,
            classifier,
            oracle: None,
            options: PipelineOptions::default(),
        }
    }

    pub fn from_standards(standards: &Standards) -> Self {
        Self::new(
            standards.countries.clone(),
            TagClassifier::new(standards.tag_rules.clone()),
        )
    }

    /// Attaches the oracle consulted when `use_oracle` is set.
    #[must_use]
    pub fn with_oracle(mut self, oracle: Box<dyn TagOracle>) -> Self {
        self.oracle = Some(oracle);
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: PipelineOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    pub fn classifier(&self) -> &TagClassifier {
        &self.classifier
    }

    pub fn countries(&self) -> &CountryAllowList {
        &self.countries
    }

    pub fn run(&self, table: &SourceTable) -> Result<PipelineOutcome> {
        let span = info_span!("pipeline", rows = table.len());
        let _guard = span.enter();

        let mut stats = PipelineStats {
            rows_in: table.len(),
            ..PipelineStats::default()
        };
        let selected = self.select_rows(table)?;
        stats.rows_selected = selected.len();
        info!(
            rows_in = stats.rows_in,
            rows_selected = stats.rows_selected,
            "selected source rows"
        );

        let contacts = self.sanitize_and_tag(&selected, &mut stats);

        let identified = retain_identified(contacts);
        stats.missing_identifier_dropped = identified.removed;
        if identified.removed > 0 {
            warn!(
                dropped = identified.removed,
                "dropped rows without name, email or phone"
            );
        }

        // Validation counts every identified row, before duplicates collapse.
        let validation = self.options.validate_only.then(|| {
            validation_summary(
                &identified.kept,
                selected.iter().map(|record| record.value(mapping::COUNTRY)),
                &self.countries,
            )
        });

        let deduped = dedupe_by_email(identified.kept);
        stats.duplicate_emails_removed = deduped.removed;
        if deduped.removed > 0 {
            info!(removed = deduped.removed, "removed duplicate emails");
        }
        let contacts = deduped.kept;

        stats.contacts_out = contacts.len();
        tally_tag_coverage(&contacts, &mut stats);
        if stats.country_only_tags > 0 {
            warn!(
                count = stats.country_only_tags,
                "contacts tagged with their country only"
            );
        }
        info!(
            contacts_out = stats.contacts_out,
            invalid_emails_cleared = stats.invalid_emails_cleared,
            extra_tags = stats.extra_tags,
            oracle_requests = stats.oracle_requests,
            oracle_tags_assigned = stats.oracle_tags_assigned,
            "pipeline complete"
        );

        if validation.is_some() {
            return Ok(PipelineOutcome {
                contacts: Vec::new(),
                stats,
                validation,
            });
        }
        Ok(PipelineOutcome {
            contacts,
            stats,
            validation: None,
        })
    }

    fn select_rows<'t>(&self, table: &'t SourceTable) -> Result<Vec<&'t RawRecord>> {
        let Some(filter) = self.options.country_filter.as_deref() else {
            return Ok(table.records.iter().collect());
        };
        require_column(table, mapping::COUNTRY)?;
        let needle = filter.to_lowercase();
        let selected: Vec<_> = table
            .records
            .iter()
            .filter(|record| {
                record
                    .get(mapping::COUNTRY)
                    .is_some_and(|country| country.to_lowercase().contains(&needle))
            })
            .collect();
        if selected.is_empty() {
            return Err(PipelineError::NoMatchingRecords {
                filter: filter.to_string(),
            });
        }
        Ok(selected)
    }

    fn sanitize_and_tag(
        &self,
        records: &[&RawRecord],
        stats: &mut PipelineStats,
    ) -> Vec<NormalizedContact> {
        let _span = info_span!("sanitize", rows = records.len()).entered();
        let context = MappingContext {
            countries: &self.countries,
            default_region: &self.options.default_region,
        };
        let mut aggregator = TagAggregator::new(&self.classifier);
        if let Some(oracle) = &self.oracle {
            aggregator = aggregator.with_oracle(oracle.as_ref());
        }

        let mut contacts = Vec::with_capacity(records.len());
        for record in records {
            let mut contact = map_record(record, &context);
            if email_was_cleared(record, &contact) {
                stats.invalid_emails_cleared += 1;
                debug!(
                    name = %contact.first_name,
                    raw = record.value(mapping::EMAIL),
                    "email cleared"
                );
            }
            let outcome = aggregator.tag(&contact.careers, &contact.country, self.options.use_oracle);
            if outcome.oracle_consulted {
                stats.oracle_requests += 1;
            }
            if outcome.oracle_assigned {
                stats.oracle_tags_assigned += 1;
            }
            contact.tags = outcome.tags.render();
            contacts.push(contact);
        }
        contacts
    }
}

#[cfg(test)]
mod tests {
    use contacts_model::TagRule;

    use super::*;

    fn pipeline() -> ContactPipeline {
        ContactPipeline::new(
            CountryAllowList::new(["Honduras", "Chile"]),
            TagClassifier::new(vec![TagRule::new(
                "logistica internacional",
                ["logistica"],
            )]),
        )
        .with_options(PipelineOptions::default().with_oracle(false))
    }

    fn table(rows: &[&[(&str, &str)]]) -> SourceTable {
        let mut headers: Vec<String> = Vec::new();
        let records = rows
            .iter()
            .map(|row| {
                for (column, _) in *row {
                    if !headers.iter().any(|header| header == column) {
                        headers.push((*column).to_string());
                    }
                }
                row.iter()
                    .map(|(column, value)| (*column, Some(*value)))
                    .collect::<RawRecord>()
            })
            .collect();
        SourceTable::new(headers, records)
    }

    #[test]
    fn blank_filter_selects_everything() {
        let options = PipelineOptions::default().with_country_filter(Some("  ".into()));
        assert_eq!(options.country_filter, None);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let table = table(&[
            &[(mapping::NAME, "UNAH"), (mapping::COUNTRY, "Honduras")],
            &[(mapping::NAME, "UCH"), (mapping::COUNTRY, "Chile")],
        ]);
        let pipeline = pipeline().with_options(
            PipelineOptions::default()
                .with_oracle(false)
                .with_country_filter(Some("hond".into())),
        );
        let outcome = pipeline.run(&table).unwrap();
        assert_eq!(outcome.stats.rows_in, 2);
        assert_eq!(outcome.stats.rows_selected, 1);
        assert_eq!(outcome.contacts[0].first_name, "UNAH");
    }

    #[test]
    fn unmatched_filter_is_an_error() {
        let table = table(&[&[(mapping::NAME, "UNAH"), (mapping::COUNTRY, "Honduras")]]);
        let pipeline = pipeline()
            .with_options(PipelineOptions::default().with_country_filter(Some("Perú".into())));
        let error = pipeline.run(&table).unwrap_err();
        assert!(matches!(error, PipelineError::NoMatchingRecords { .. }));
    }

    #[test]
    fn filter_without_country_column_is_an_error() {
        let table = table(&[&[(mapping::NAME, "UNAH")]]);
        let pipeline = pipeline()
            .with_options(PipelineOptions::default().with_country_filter(Some("Chile".into())));
        let error = pipeline.run(&table).unwrap_err();
        assert!(matches!(error, PipelineError::MissingColumn { .. }));
    }

    #[test]
    fn validate_only_reports_without_contacts() {
        let table = table(&[
            &[(mapping::NAME, "UNAH"), (mapping::EMAIL, "a@x.com")],
            &[(mapping::NAME, "UCH"), (mapping::PHONE, "+1 202 456 1111")],
        ]);
        let pipeline = pipeline().with_options(
            PipelineOptions::default()
                .with_oracle(false)
                .with_validate_only(true),
        );
        let outcome = pipeline.run(&table).unwrap();
        assert!(outcome.contacts.is_empty());
        assert_eq!(outcome.stats.contacts_out, 2);
        let validation = outcome.validation.unwrap();
        assert_eq!(validation.phone_empty_email_present, 1);
        assert_eq!(validation.email_empty_phone_present, 1);
    }

    #[test]
    fn validate_only_counts_rows_before_duplicates_collapse() {
        let table = table(&[
            &[(mapping::NAME, "UNAH"), (mapping::PHONE, "+504 2561-8727")],
            &[(mapping::NAME, "UPNFM"), (mapping::PHONE, "+504 2561-8727")],
            &[(mapping::NAME, "UCH"), (mapping::PHONE, "+1 202 456 1111")],
            &[
                (mapping::NAME, "PUC"),
                (mapping::EMAIL, "a@x.com"),
                (mapping::COUNTRY, "Atlantis"),
            ],
        ]);
        let pipeline = pipeline().with_options(
            PipelineOptions::default()
                .with_oracle(false)
                .with_validate_only(true),
        );
        let outcome = pipeline.run(&table).unwrap();
        assert_eq!(outcome.stats.contacts_out, 2);
        assert_eq!(outcome.stats.duplicate_emails_removed, 2);
        let validation = outcome.validation.unwrap();
        assert_eq!(validation.email_empty_phone_present, 3);
        assert_eq!(validation.phone_empty_email_present, 1);
        assert_eq!(validation.invalid_countries, vec!["Atlantis".to_string()]);
    }
}
