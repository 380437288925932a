//! Error-to-response mapping at the HTTP boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use orchestrator::{PipelineError, RATE_LIMIT_MESSAGE};

/// Shown to callers when the assistant backend is unreachable.
pub const ASSISTANT_UNAVAILABLE: &str =
    "The assistant is temporarily unavailable. Please try again later.";

/// Shown to callers when the translation service is unreachable.
pub const TRANSLATION_UNAVAILABLE: &str =
    "The translation service is temporarily unavailable. Please try again later.";

/// Shown to callers on any unexpected internal failure.
pub const INTERNAL_MESSAGE: &str = "Something went wrong. Please try again later.";

/// Wrapper that turns a [`PipelineError`] into an HTTP response.
///
/// This is the single place where collaborator failures become
/// user-facing text. Remote error detail is logged here and never put in
/// the response body; validation messages are user-correctable and pass
/// through as-is.
#[derive(Debug)]
pub struct ApiError(PipelineError);

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// The status this error maps to.
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            PipelineError::Validation(_) => StatusCode::BAD_REQUEST,
            PipelineError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            PipelineError::Translation(_) | PipelineError::Assistant(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            PipelineError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self.0 {
            PipelineError::Validation(msg) => msg.clone(),
            PipelineError::RateLimited => RATE_LIMIT_MESSAGE.to_string(),
            PipelineError::Translation(err) => {
                tracing::error!(error = %err, "Translation service failure");
                TRANSLATION_UNAVAILABLE.to_string()
            }
            PipelineError::Assistant(err) => {
                tracing::error!(error = %err, "Assistant failure");
                ASSISTANT_UNAVAILABLE.to_string()
            }
            PipelineError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal failure");
                INTERNAL_MESSAGE.to_string()
            }
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
