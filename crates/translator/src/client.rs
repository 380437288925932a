//! The LibreTranslate HTTP client.

use assistant_core::{async_trait, Translate, TranslateError};
use reqwest::Client;
use tracing::{debug, info};

use crate::api_types::{ServiceError, TranslateRequest, TranslateResponse};
use crate::config::TranslatorConfig;

/// A [`Translate`] implementation backed by a LibreTranslate-compatible
/// service.
///
/// Calls block the requesting task until the service answers or the
/// request times out; a timeout surfaces as
/// [`TranslateError::Network`], never as the untranslated input.
pub struct LibreTranslator {
    client: Client,
    config: TranslatorConfig,
}

impl LibreTranslator {
    /// Create a new translator with the given configuration.
    pub fn new(config: TranslatorConfig) -> Result<Self, TranslateError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                TranslateError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        info!(
            base_url = %config.base_url,
            timeout_secs = config.timeout_secs,
            "LibreTranslator initialized"
        );

        Ok(Self { client, config })
    }

    /// Create a translator from environment variables.
    ///
    /// See [`TranslatorConfig::from_env`] for the variables read.
    pub fn from_env() -> Result<Self, TranslateError> {
        Self::new(TranslatorConfig::from_env())
    }

    /// Get the configuration.
    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!("{}/translate", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl Translate for LibreTranslator {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslateError> {
        let request = TranslateRequest::text(text, source, target);

        debug!(source, target, chars = text.chars().count(), "Requesting translation");

        let response = self
            .client
            .post(self.endpoint())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                TranslateError::Network(format!("Failed to reach translation service: {}", e))
            })?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ServiceError>(&body) {
                Ok(service_error) => service_error.error,
                Err(_) => body,
            };
            return Err(TranslateError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: TranslateResponse = response.json().await.map_err(|e| {
            TranslateError::MalformedResponse(format!("Failed to parse response: {}", e))
        })?;

        Ok(parsed.translated_text)
    }
}
