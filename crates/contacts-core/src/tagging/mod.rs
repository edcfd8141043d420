//! Tag assignment: keyword rules, the country tag and the oracle fallback.

mod aggregator;
mod classifier;

pub use aggregator::{TagAggregator, TagOutcome};
pub use classifier::TagClassifier;
