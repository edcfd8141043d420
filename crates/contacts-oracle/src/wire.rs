//! Chat completions request and response bodies.

use serde::{Deserialize, Serialize};

use contacts_core::{OracleError, OracleRequest};

use crate::config::{MAX_TOKENS, STOP_SEQUENCES, TEMPERATURE};

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
    pub stop: &'a [&'a str],
}

#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

impl<'a> ChatRequest<'a> {
    pub fn for_classification(model: &'a str, request: &OracleRequest<'_>) -> Self {
        Self {
            model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: request.system_prompt(),
                },
                ChatMessage {
                    role: "user",
                    content: request.user_prompt(),
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            stop: &STOP_SEQUENCES,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Maps an HTTP status and body to the raw reply text.
///
/// A `null` message content is an empty reply, not an error.
pub fn interpret_response(status: u16, body: &str) -> Result<String, OracleError> {
    if status == 401 || status == 403 {
        return Err(OracleError::Unauthorized);
    }
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|parsed| parsed.error.message)
            .unwrap_or_else(|_| body.trim().to_string());
        return Err(OracleError::Api { status, message });
    }
    let parsed: ChatResponse =
        serde_json::from_str(body).map_err(|error| OracleError::Malformed(error.to_string()))?;
    let choice = parsed
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| OracleError::Malformed("response has no choices".to_string()))?;
    Ok(choice.message.content.unwrap_or_default())
}
