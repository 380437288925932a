//! LibreTranslate request and response types.

use serde::{Deserialize, Serialize};

/// Request body for `POST /translate`.
#[derive(Debug, Clone, Serialize)]
pub struct TranslateRequest {
    /// Text to translate.
    pub q: String,
    /// Source language code, or `"auto"` to detect.
    pub source: String,
    /// Target language code.
    pub target: String,
    /// Payload format; this client always sends plain text.
    pub format: String,
}

impl TranslateRequest {
    /// Create a plain-text translation request.
    pub fn text(q: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            source: source.into(),
            target: target.into(),
            format: "text".to_string(),
        }
    }
}

/// Response body for `POST /translate`.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslateResponse {
    /// The translated text.
    #[serde(rename = "translatedText")]
    pub translated_text: String,
}

/// Error body returned by the service on failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceError {
    /// Human-readable error message.
    pub error: String,
}
