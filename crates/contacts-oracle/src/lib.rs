//! OpenAI-compatible classification oracle.
//!
//! Implements [`contacts_core::TagOracle`] over a blocking `POST
//! {base}/chat/completions` call. Settings come from `OPENAI_API_KEY`,
//! `OPENAI_API_BASE`, `CONTACTS_ORACLE_MODEL` and
//! `CONTACTS_ORACLE_TIMEOUT_SECS`.

pub mod client;
pub mod config;
pub mod wire;

pub use client::ChatCompletionsOracle;
pub use config::OracleConfig;
