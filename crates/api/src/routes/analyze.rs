//! Keyword analysis endpoints.

use axum::extract::{Query, State};
use axum::Json;
use orchestrator::{AnalyzeResult, TranslatedAnalysis};
use serde::Deserialize;

use crate::error::Result;
use crate::routes::LangQuery;
use crate::state::AppState;

/// Body of an analysis request.
#[derive(Debug, Deserialize)]
pub struct AnalyzeBody {
    #[serde(default)]
    pub text: String,
}

/// Handle `POST /analyze`: English-only keyword match against the
/// catalog, no assistant involved.
pub async fn analyze(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeBody>,
) -> Result<Json<AnalyzeResult>> {
    let result = state.pipeline.analyze(&body.text)?;
    Ok(Json(result))
}

/// Handle `POST /analyze-ml?lang=<code>`: the same keyword match with
/// translation on both sides when the caller is not English.
pub async fn analyze_multilingual(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
    Json(body): Json<AnalyzeBody>,
) -> Result<Json<TranslatedAnalysis>> {
    let result = state
        .pipeline
        .analyze_multilingual(&body.text, &query.lang)
        .await?;
    Ok(Json(result))
}
