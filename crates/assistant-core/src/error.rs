//! Error types for remote collaborators.

use thiserror::Error;

/// Errors that can occur while talking to the assistant backend.
#[derive(Debug, Error)]
pub enum AssistantError {
    /// The client could not be constructed or configured.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The request never completed (transport failure or timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("provider error ({status}): {message}")]
    Provider { status: u16, message: String },

    /// The service answered 2xx but the body was not usable.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Errors that can occur while talking to the translation backend.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// The client could not be constructed or configured.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The request never completed (transport failure or timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("translation service error ({status}): {message}")]
    Service { status: u16, message: String },

    /// The service answered 2xx but the body was not usable.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
