//! Route handlers for the medassist HTTP surface.

pub mod analyze;
pub mod chat;
pub mod health;

use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // Conversational endpoint
        .route("/chat", post(chat::chat))
        // Keyword analysis endpoints
        .route("/analyze", post(analyze::analyze))
        .route("/analyze-ml", post(analyze::analyze_multilingual))
        // Health check
        .route("/health", get(health::health))
}

/// Language selection shared by the translated endpoints.
#[derive(Debug, Deserialize)]
pub struct LangQuery {
    /// ISO 639-1 code of the caller's language; `en` skips translation.
    #[serde(default = "default_lang")]
    pub lang: String,
}

fn default_lang() -> String {
    "en".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lang_defaults_to_english() {
        let query: LangQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.lang, "en");

        let query: LangQuery = serde_json::from_str(r#"{"lang": "es"}"#).unwrap();
        assert_eq!(query.lang, "es");
    }
}
