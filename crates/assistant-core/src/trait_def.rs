//! The Assistant and Translate trait definitions.

use async_trait::async_trait;

use crate::error::{AssistantError, TranslateError};
use crate::reply::AssistantReply;

/// A trait for completing a user message into an assistant answer.
///
/// Implementations range from canned test doubles to full LLM backends.
/// The trait is object-safe and is used as `Arc<dyn Assistant>` by the
/// pipeline.
#[async_trait]
pub trait Assistant: Send + Sync {
    /// Complete a single user message.
    ///
    /// # Arguments
    ///
    /// * `message` - The sanitized, English user message.
    /// * `context` - Optional grounding text from the condition catalog.
    ///
    /// # Returns
    ///
    /// An [`AssistantReply`], or a typed error when the backend is
    /// unreachable or answers with an unusable body. Errors are mapped to
    /// a user-facing degraded-service message at the HTTP boundary, never
    /// shown raw.
    async fn complete(
        &self,
        message: &str,
        context: Option<&str>,
    ) -> Result<AssistantReply, AssistantError>;

    /// Get a human-readable name for this assistant implementation.
    fn name(&self) -> &str;
}

/// A trait for text translation between languages.
///
/// Only [`translate`](Translate::translate) must be implemented; the two
/// directional helpers are derived from it. A failed remote call must
/// surface as an error, never as a silent pass-through of the original
/// text, because downstream keyword matching would then run against the
/// wrong language.
#[async_trait]
pub trait Translate: Send + Sync {
    /// Translate `text` from `source` to `target` (ISO 639-1 codes,
    /// `"auto"` allowed as source).
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslateError>;

    /// Translate incoming text of unknown language to English.
    async fn to_english(&self, text: &str) -> Result<String, TranslateError> {
        self.translate(text, "auto", "en").await
    }

    /// Translate an English answer back to the caller's language.
    async fn from_english(&self, text: &str, target: &str) -> Result<String, TranslateError> {
        self.translate(text, "en", target).await
    }
}
