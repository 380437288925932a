//! The assistant's answer and how it was produced.

/// Where a reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    /// Free-text content generated by the model.
    Model,
    /// Synthesized locally from a `symptom_checker` tool invocation.
    SymptomTool,
}

/// A completed assistant answer.
#[derive(Debug, Clone)]
pub struct AssistantReply {
    /// The final answer text shown to the user.
    pub text: String,
    /// Which branch produced the text.
    pub source: ReplySource,
}

impl AssistantReply {
    /// Create a reply from the model's free-text content.
    pub fn model(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: ReplySource::Model,
        }
    }

    /// Create a reply synthesized from a symptom-checker invocation.
    pub fn symptom_tool(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: ReplySource::SymptomTool,
        }
    }

    /// Whether the reply was synthesized from a tool invocation.
    pub fn is_from_tool(&self) -> bool {
        self.source == ReplySource::SymptomTool
    }
}
