use thiserror::Error;

/// Structural failures that stop a whole conversion run.
///
/// Bad cell values never end up here; sanitizers turn them into `""`.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("input has no '{column}' column")]
    MissingColumn { column: String },
    #[error("no records match country filter '{filter}'")]
    NoMatchingRecords { filter: String },
}

pub type Result<T> = std::result::Result<T, PipelineError>;
