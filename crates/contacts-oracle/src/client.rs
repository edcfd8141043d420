//! Blocking HTTP client for OpenAI-compatible chat completion endpoints.

use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use tracing::debug;

use contacts_core::{OracleError, OracleRequest, TagOracle};

use crate::config::OracleConfig;
use crate::wire::{ChatRequest, interpret_response};

/// Classification oracle backed by a chat completions endpoint.
///
/// Each [`TagOracle::suggest`] call is one blocking request; nothing is
/// retried or cached.
pub struct ChatCompletionsOracle {
    client: Client,
    config: OracleConfig,
}

impl ChatCompletionsOracle {
    pub fn new(config: OracleConfig) -> Result<Self, OracleError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|error| OracleError::Transport(error.to_string()))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &OracleConfig {
        &self.config
    }
}

impl TagOracle for ChatCompletionsOracle {
    fn suggest(&self, request: &OracleRequest<'_>) -> Result<String, OracleError> {
        let (Some(api_key), Some(url)) = (self.config.api_key.as_deref(), self.config.completions_url())
        else {
            let missing = self.config.missing_setting().unwrap_or("OPENAI_API_BASE");
            return Err(OracleError::Unconfigured(format!("{missing} is not set")));
        };

        debug!(model = %self.config.model, country = request.country, "querying classification oracle");
        let body = ChatRequest::for_classification(&self.config.model, request);
        let response = self
            .client
            .post(url)
            .bearer_auth(api_key)
            .header(USER_AGENT, format!("contacts-ghl/{}", env!("CARGO_PKG_VERSION")))
            .json(&body)
            .send()
            .map_err(|error| OracleError::Transport(error.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .map_err(|error| OracleError::Transport(error.to_string()))?;
        interpret_response(status, &text)
    }
}
