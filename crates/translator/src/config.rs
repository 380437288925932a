//! Configuration for the translation client.

use std::env;

/// Default public LibreTranslate instance.
pub const DEFAULT_BASE_URL: &str = "https://libretranslate.de";

/// Default HTTP timeout for translation requests (seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Configuration for [`LibreTranslator`](crate::LibreTranslator).
#[derive(Debug, Clone)]
pub struct TranslatorConfig {
    /// Base URL of the LibreTranslate-compatible service.
    pub base_url: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl TranslatorConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `LIBRETRANSLATE_URL` | Service base URL | `https://libretranslate.de` |
    /// | `LIBRETRANSLATE_TIMEOUT_SECS` | Request timeout in seconds | `15` |
    pub fn from_env() -> Self {
        let base_url =
            env::var("LIBRETRANSLATE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout_secs = env::var("LIBRETRANSLATE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            base_url,
            timeout_secs,
        }
    }

    /// Create a configuration pointing at a specific service instance.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}
