//! Core traits and types for the medassist pipeline.
//!
//! This crate provides the shared interface between the orchestration
//! pipeline and its remote collaborators. It defines:
//!
//! - [`Assistant`] - The trait an LLM-backed assistant client implements
//! - [`Translate`] - The trait a translation backend implements
//! - [`AssistantReply`] - The assistant's answer plus how it was produced
//! - [`AssistantError`] / [`TranslateError`] - Typed collaborator failures
//! - [`sanitize`] - The user-input cleaner applied before any prompt is built
//! - [`SymptomQuery`] - The parsed payload of a `symptom_checker` tool call
//!
//! # Example
//!
//! ```rust
//! use assistant_core::{Assistant, AssistantError, AssistantReply};
//! use async_trait::async_trait;
//!
//! struct CannedAssistant;
//!
//! #[async_trait]
//! impl Assistant for CannedAssistant {
//!     async fn complete(
//!         &self,
//!         _message: &str,
//!         _context: Option<&str>,
//!     ) -> Result<AssistantReply, AssistantError> {
//!         Ok(AssistantReply::model("Drink fluids and rest."))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "CannedAssistant"
//!     }
//! }
//! ```

mod error;
mod prompt;
mod reply;
mod sanitize;
mod tools;
mod trait_def;

pub use error::{AssistantError, TranslateError};
pub use prompt::hash_prompt;
pub use reply::{AssistantReply, ReplySource};
pub use sanitize::{sanitize, MAX_MESSAGE_CHARS};
pub use tools::{SymptomQuery, SYMPTOM_TOOL_NAME};
pub use trait_def::{Assistant, Translate};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
