//! Request pipeline for the medassist service.
//!
//! This crate provides the [`ChatPipeline`] type which carries a single
//! user message through rate limiting, sanitization, optional translation,
//! catalog grounding, and the assistant call, and assembles the final
//! result.
//!
//! # Architecture
//!
//! ```text
//! HTTP request (from the api crate)
//!          ↓
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        CHAT PIPELINE                         │
//! │                                                              │
//! │  1. Consume one unit of the process-wide request budget      │
//! │         ↓                                                    │
//! │  2. Validate (non-blank, at most 1000 chars) and sanitize    │
//! │         ↓                                                    │
//! │  3. lang != "en" → translate the message to English          │
//! │         ↓                                                    │
//! │  4. Catalog lookup → optional grounding context              │
//! │         ↓                                                    │
//! │  5. Assistant call (symptom_checker function declared)       │
//! │         ↓                                                    │
//! │  6. lang != "en" → translate the reply back                  │
//! │         ↓                                                    │
//! │  7. Assemble ChatResult (disclaimer, session id)             │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every gate exits early with a typed [`PipelineError`]; the api crate
//! maps those to HTTP statuses in one place.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use catalog::ConditionCatalog;
//! use openai_assistant::OpenAiAssistant;
//! use orchestrator::{ChatPipeline, RequestBudget};
//! use translator::LibreTranslator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = Arc::new(ConditionCatalog::load("data/conditions.json")?);
//!     let assistant = Arc::new(OpenAiAssistant::from_env(catalog.clone())?);
//!     let translator = Arc::new(LibreTranslator::from_env()?);
//!
//!     let pipeline = ChatPipeline::new(
//!         assistant,
//!         translator,
//!         catalog,
//!         RequestBudget::default(),
//!     );
//!
//!     let result = pipeline.chat("I have a fever and a cough", "en").await?;
//!     println!("{}", result.ai_response);
//!     Ok(())
//! }
//! ```

mod error;
mod outcome;
mod pipeline;
mod rate_limit;

// Public exports
pub use error::PipelineError;
pub use outcome::{AnalyzeResult, ChatResult, SymptomResult, TranslatedAnalysis};
pub use pipeline::{ChatPipeline, DISCLAIMER, FOLLOWUP_PROMPT};
pub use rate_limit::{RequestBudget, DEFAULT_REQUESTS_PER_HOUR, RATE_LIMIT_MESSAGE};

// Re-export the quota type so callers can tune budgets without
// depending on governor directly
pub use governor::Quota;
