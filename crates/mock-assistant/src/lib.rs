//! Mock assistant and translator implementations for pipeline testing.
//!
//! This crate provides test doubles for the `Assistant` and `Translate`
//! traits:
//! - `EchoAssistant` - Returns the user message as the reply
//! - `ScriptedAssistant` - Pops canned replies and records every call
//! - `FailingAssistant` - Always fails with a network error
//! - `MappingTranslator` - Dictionary-backed translator with call counters
//! - `FailingTranslator` - Always fails with a network error
//!
//! For real remote calls, use the `openai-assistant` and `translator`
//! crates instead.
//!
//! # Example
//!
//! ```rust
//! use mock_assistant::{Assistant, EchoAssistant};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mock_assistant::AssistantError> {
//!     let assistant = EchoAssistant::new();
//!
//!     let reply = assistant.complete("I have a headache", None).await?;
//!     println!("Reply: {}", reply.text);
//!     Ok(())
//! }
//! ```

mod echo;
mod failing;
mod scripted;
mod translate;

// Re-export assistant-core types for convenience
pub use assistant_core::{
    async_trait, Assistant, AssistantError, AssistantReply, ReplySource, Translate, TranslateError,
};

// Export mock implementations
pub use echo::EchoAssistant;
pub use failing::FailingAssistant;
pub use scripted::{RecordedCall, ScriptedAssistant};
pub use translate::{FailingTranslator, MappingTranslator};
