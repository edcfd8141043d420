use serde::{Deserialize, Serialize};

/// Counters accumulated over one pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineStats {
    /// Rows read from the source sheet.
    pub rows_in: usize,
    /// Rows left after the optional country filter.
    pub rows_selected: usize,
    /// Rows dropped because first name, email and phone were all empty.
    pub missing_identifier_dropped: usize,
    /// Rows dropped because an earlier row had the same email.
    pub duplicate_emails_removed: usize,
    /// Rows whose email cell had content that did not survive sanitization.
    pub invalid_emails_cleared: usize,
    /// Contacts surviving validation and deduplication.
    pub contacts_out: usize,
    /// Surviving contacts tagged with nothing but their country.
    pub country_only_tags: usize,
    /// Surviving contacts with at least one tag beyond the country.
    pub extra_tags: usize,
    /// Surviving contacts with no tag at all.
    pub untagged: usize,
    /// Rows for which the classification oracle was consulted.
    pub oracle_requests: usize,
    /// Oracle consultations that produced a tag.
    pub oracle_tags_assigned: usize,
}

/// Extra diagnostics reported in validation-only runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub phone_empty_email_present: usize,
    pub email_empty_phone_present: usize,
    /// Distinct non-blank raw `País` values the allow-list rejected, sorted.
    pub invalid_countries: Vec<String>,
}

impl ValidationSummary {
    pub fn all_countries_valid(&self) -> bool {
        self.invalid_countries.is_empty()
    }
}

/// A distinct raw country value and the number of rows carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryCount {
    pub country: String,
    pub count: usize,
}
