//! OpenAI-backed implementation of the [`Assistant`] trait.
//!
//! The client builds a three-part conversation (fixed system instruction,
//! optional catalog-derived grounding message, user message), declares a
//! single `symptom_checker` function with selection left to the model, and
//! resolves the response through a two-branch state machine: either the
//! model answered directly, or it invoked the tool and the answer is
//! synthesized locally from the condition catalog.
//!
//! [`Assistant`]: assistant_core::Assistant

mod api_types;
mod assistant;
mod config;
mod tools;

pub use api_types::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice, FunctionCall,
    ResponseMessage, Usage,
};
pub use assistant::OpenAiAssistant;
pub use config::OpenAiConfig;
pub use tools::FunctionSpec;
