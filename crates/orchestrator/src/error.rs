//! Error types for pipeline operations.

use assistant_core::{AssistantError, TranslateError};
use thiserror::Error;

/// Errors that can occur while a request moves through the pipeline.
///
/// Each variant maps to exactly one HTTP status at the api boundary:
/// `Validation` → 400, `RateLimited` → 429, `Translation` and
/// `Assistant` → 503, `Internal` → 500.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The request failed validation before entering the pipeline.
    /// The message is safe to show to the caller.
    #[error("invalid request: {0}")]
    Validation(String),

    /// The process-wide request budget is exhausted.
    #[error("rate limit exceeded")]
    RateLimited,

    /// The translation service is unreachable or answered unusably.
    #[error("translation failed: {0}")]
    Translation(#[from] TranslateError),

    /// The assistant backend is unreachable or answered unusably.
    #[error("assistant failed: {0}")]
    Assistant(#[from] AssistantError),

    /// Anything else.
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collaborator_errors_convert() {
        let err: PipelineError = TranslateError::Network("timed out".to_string()).into();
        assert!(matches!(err, PipelineError::Translation(_)));

        let err: PipelineError = AssistantError::Network("timed out".to_string()).into();
        assert!(matches!(err, PipelineError::Assistant(_)));
    }

    #[test]
    fn test_display_includes_source_detail() {
        let err: PipelineError = AssistantError::Provider {
            status: 500,
            message: "upstream exploded".to_string(),
        }
        .into();

        assert!(err.to_string().contains("upstream exploded"));
    }
}
