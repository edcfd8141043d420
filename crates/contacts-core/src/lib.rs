//! Sanitization, tagging and the conversion pipeline for university contacts.
//!
//! Source rows come in as [`contacts_model::RawRecord`]s. Each one is mapped
//! through the field sanitizers, tagged by country and keyword rules (with an
//! optional [`TagOracle`] fallback), then filtered for identifiers and
//! deduplicated by email.

pub mod diagnostics;
pub mod error;
pub mod mapping;
pub mod oracle;
pub mod pipeline;
pub mod sanitize;
pub mod tagging;
pub mod text;
pub mod validate;

pub use diagnostics::{list_countries, validation_summary};
pub use error::{PipelineError, Result};
pub use oracle::{OracleAdapter, OracleError, OracleRequest, TagOracle, sanitize_oracle_response};
pub use pipeline::{ContactPipeline, PipelineOptions, PipelineOutcome};
pub use tagging::{TagAggregator, TagClassifier, TagOutcome};
pub use text::normalize_text;
