//! Oracle connection settings.

use std::env;
use std::time::Duration;

/// API key variable.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
/// Base URL variable, e.g. `https://api.example.com/v1`.
pub const API_BASE_VAR: &str = "OPENAI_API_BASE";
/// Optional model override.
pub const MODEL_VAR: &str = "CONTACTS_ORACLE_MODEL";
/// Optional request timeout override, in whole seconds.
pub const TIMEOUT_VAR: &str = "CONTACTS_ORACLE_TIMEOUT_SECS";

pub const DEFAULT_MODEL: &str = "hf:mistralai/Mistral-7B-Instruct-v0.3";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Completion parameters. A single short tag is all we ever want back.
pub const MAX_TOKENS: u32 = 20;
pub const TEMPERATURE: f32 = 0.0;
pub const STOP_SEQUENCES: [&str; 4] = ["\n", ".", "!", "?"];

#[derive(Debug, Clone, PartialEq)]
pub struct OracleConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: String,
    pub timeout: Duration,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl OracleConfig {
    /// Reads the settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads the settings through `lookup`; blank values count as unset and
    /// an unparsable timeout falls back to the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let timeout = read(TIMEOUT_VAR)
            .and_then(|secs| secs.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map_or(DEFAULT_TIMEOUT, Duration::from_secs);
        Self {
            api_key: read(API_KEY_VAR),
            base_url: read(API_BASE_VAR),
            model: read(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            timeout,
        }
    }

    /// Name of the first missing required variable, if any.
    pub fn missing_setting(&self) -> Option<&'static str> {
        if self.api_key.is_none() {
            Some(API_KEY_VAR)
        } else if self.base_url.is_none() {
            Some(API_BASE_VAR)
        } else {
            None
        }
    }

    pub fn is_configured(&self) -> bool {
        self.missing_setting().is_none()
    }

    /// `{base}/chat/completions`, tolerating a trailing slash on the base.
    pub fn completions_url(&self) -> Option<String> {
        self.base_url
            .as_deref()
            .map(|base| format!("{}/chat/completions", base.trim_end_matches('/')))
    }
}
