//! Error types for catalog loading.

use thiserror::Error;

/// Errors that can occur while loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog file is not a valid record array.
    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),
}
