//! Service entry point: configuration, catalog load, collaborator
//! construction, and the axum server.

use std::sync::Arc;

use axum::http::{header, Method};
use catalog::ConditionCatalog;
use openai_assistant::OpenAiAssistant;
use orchestrator::{ChatPipeline, RequestBudget};
use tower_http::cors::CorsLayer;
use tracing::info;
use translator::LibreTranslator;

use api::config::Config;
use api::routes;
use api::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;

    // Load the condition catalog once; it is read-only from here on
    let catalog = Arc::new(ConditionCatalog::load(&config.catalog_path)?);
    info!(
        path = %config.catalog_path,
        records = catalog.len(),
        "Loaded condition catalog"
    );

    // Construct the remote collaborators
    let assistant = Arc::new(OpenAiAssistant::from_env(catalog.clone())?);
    let translator = Arc::new(LibreTranslator::from_env()?);

    // Build the pipeline and application state
    let pipeline = ChatPipeline::new(
        assistant,
        translator,
        catalog,
        RequestBudget::per_hour(config.rate_limit_per_hour),
    );
    let state = AppState::new(Arc::new(pipeline));

    // Build router
    let mut app = routes::router().with_state(state);
    if let Some(origin) = config.allowed_origin.clone() {
        info!(origin = ?origin, "CORS enabled for configured origin");
        app = app.layer(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        );
    }

    // Start server
    info!(addr = %config.addr, rate_limit_per_hour = config.rate_limit_per_hour, "medassist API listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
