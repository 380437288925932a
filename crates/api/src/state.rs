//! Application state shared across handlers.

use std::sync::Arc;

use orchestrator::ChatPipeline;

/// Shared application state.
///
/// Cloned per request by axum; the pipeline itself is shared, so the
/// request budget inside it is process-wide.
#[derive(Clone)]
pub struct AppState {
    /// The request pipeline serving every route.
    pub pipeline: Arc<ChatPipeline>,
}

impl AppState {
    /// Create new application state.
    pub fn new(pipeline: Arc<ChatPipeline>) -> Self {
        Self { pipeline }
    }
}
