use std::path::PathBuf;

use contacts_model::{PipelineStats, ValidationSummary};

/// What a `convert` run did, for the summary tables.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    pub input: PathBuf,
    pub country_filter: Option<String>,
    /// `None` in validation-only runs.
    pub output: Option<PathBuf>,
    pub oracle_enabled: bool,
    pub stats: PipelineStats,
    pub validation: Option<ValidationSummary>,
}
