//! The conversational chat endpoint.

use axum::extract::{Query, State};
use axum::Json;
use orchestrator::ChatResult;
use serde::Deserialize;

use crate::error::Result;
use crate::routes::LangQuery;
use crate::state::AppState;

/// Body of a chat request.
///
/// A missing `message` field deserializes to an empty string, which the
/// pipeline's validation gate rejects with 400.
#[derive(Debug, Deserialize)]
pub struct ChatBody {
    #[serde(default)]
    pub message: String,
}

/// Handle `POST /chat?lang=<code>`.
pub async fn chat(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
    Json(body): Json<ChatBody>,
) -> Result<Json<ChatResult>> {
    let result = state.pipeline.chat(&body.message, &query.lang).await?;
    Ok(Json(result))
}
