//! The classification oracle seam.
//!
//! An oracle is any external classifier that, given a careers text and a
//! country, proposes at most one tag from the rule vocabulary. Transport
//! lives in `contacts-oracle`; this module owns the prompt, the response
//! cleanup and the vocabulary check, so every failure mode ends as "no tag".

use thiserror::Error;
use tracing::{debug, warn};

use crate::tagging::TagClassifier;
use crate::text::normalize_text;

/// Why an oracle call produced no answer.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("classification oracle is not configured: {0}")]
    Unconfigured(String),
    #[error("classification oracle rejected the credentials")]
    Unauthorized,
    #[error("classification oracle request failed: {0}")]
    Transport(String),
    #[error("classification oracle returned HTTP {status}: {message}")]
    Api { status: u16, message: String },
    #[error("classification oracle returned a malformed response: {0}")]
    Malformed(String),
}

/// Replies that mean "no tag", compared after normalization.
pub const NO_TAG_REPLIES: [&str; 12] = [
    "nada",
    "ninguna",
    "ninguno",
    "no aplica",
    "no aplicable",
    "sin etiqueta",
    "vacio",
    "empty",
    "none",
    "n/a",
    "n a",
    "na",
];

/// Everything an oracle needs to classify one contact.
#[derive(Debug, Clone, Copy)]
pub struct OracleRequest<'a> {
    pub careers: &'a str,
    pub country: &'a str,
    pub classifier: &'a TagClassifier,
}

impl<'a> OracleRequest<'a> {
    pub fn new(careers: &'a str, country: &'a str, classifier: &'a TagClassifier) -> Self {
        Self {
            careers,
            country,
            classifier,
        }
    }

    /// Instructions listing the allowed tags with their descriptions.
    pub fn system_prompt(&self) -> String {
        let rules = self.classifier.rules();
        let count = rules.len();
        let vocabulary: String = rules
            .iter()
            .enumerate()
            .map(|(idx, rule)| match &rule.description {
                Some(description) => format!("{}. \"{}\" - {}\n", idx + 1, rule.tag, description),
                None => format!("{}. \"{}\"\n", idx + 1, rule.tag),
            })
            .collect();
        format!(
            "Eres un clasificador de carreras universitarias. Tu única tarea es asignar \
             UNA SOLA etiqueta de las siguientes opciones:\n\n\
             ETIQUETAS VÁLIDAS (solo estas {count}):\n\
             {vocabulary}\n\
             REGLAS ESTRICTAS:\n\
             - Responde SOLO con una de las {count} etiquetas exactas de arriba\n\
             - Si no hay una categoría clara, responde con una cadena vacía (nada)\n\
             - NO uses \"ninguna\", \"ninguno\", \"no aplica\", \"ninguna de las anteriores\"\n\
             - NO uses comillas en tu respuesta\n\
             - NO añadas explicaciones ni texto adicional"
        )
    }

    pub fn user_prompt(&self) -> String {
        format!(
            "CARRERAS A ANALIZAR:\n{}\n\nPAÍS: {}\n\nRESPUESTA (solo una de las {} etiquetas o nada):",
            self.careers,
            self.country,
            self.classifier.rules().len()
        )
    }
}

/// An external classifier consulted when no keyword rule fires.
pub trait TagOracle {
    /// Returns the raw reply text. Cleanup and validation happen in
    /// [`OracleAdapter`].
    fn suggest(&self, request: &OracleRequest<'_>) -> Result<String, OracleError>;
}

impl<T: TagOracle + ?Sized> TagOracle for Box<T> {
    fn suggest(&self, request: &OracleRequest<'_>) -> Result<String, OracleError> {
        (**self).suggest(request)
    }
}

/// Cleans a raw oracle reply into a candidate tag.
///
/// Surrounding whitespace and quotes are removed, the text is normalized,
/// and the usual ways of saying "nothing" map to `""`.
pub fn sanitize_oracle_response(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let unquoted = lowered.trim_matches(|ch| ch == '"' || ch == '\'').trim();
    if unquoted.is_empty() || NO_TAG_REPLIES.contains(&unquoted) {
        return String::new();
    }
    let normalized = normalize_text(unquoted);
    if NO_TAG_REPLIES.contains(&normalized.as_str()) {
        return String::new();
    }
    normalized
}

/// Wraps an oracle so that only vocabulary tags ever come out of it.
pub struct OracleAdapter<'a> {
    oracle: &'a dyn TagOracle,
    classifier: &'a TagClassifier,
}

impl<'a> OracleAdapter<'a> {
    pub fn new(oracle: &'a dyn TagOracle, classifier: &'a TagClassifier) -> Self {
        Self { oracle, classifier }
    }

    /// Asks the oracle for a tag; returns `""` on any failure or off-list reply.
    pub fn classify(&self, careers: &str, country: &str) -> String {
        let request = OracleRequest::new(careers, country, self.classifier);
        let raw = match self.oracle.suggest(&request) {
            Ok(raw) => raw,
            Err(error) => {
                warn!(%error, "classification oracle unavailable");
                return String::new();
            }
        };
        let tag = sanitize_oracle_response(&raw);
        if tag.is_empty() {
            debug!(raw = %raw, "classification oracle returned no tag");
            return tag;
        }
        if self.classifier.is_known_tag(&tag) {
            tag
        } else {
            warn!(raw = %raw, sanitized = %tag, "classification oracle suggested an unknown tag");
            String::new()
        }
    }
}
