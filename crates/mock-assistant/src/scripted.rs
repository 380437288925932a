//! Scripted assistant implementation - canned replies plus call recording.

use std::collections::VecDeque;
use std::sync::Mutex;

use assistant_core::{async_trait, Assistant, AssistantError, AssistantReply};

/// One recorded invocation of [`ScriptedAssistant::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// The user message the pipeline passed in.
    pub message: String,
    /// The catalog context the pipeline passed in, if any.
    pub context: Option<String>,
}

/// An assistant that pops replies from a fixed script and records every
/// call it receives.
///
/// The script is consumed front to back; a call past the end of the
/// script fails with [`AssistantError::MalformedResponse`].
pub struct ScriptedAssistant {
    replies: Mutex<VecDeque<AssistantReply>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedAssistant {
    /// Create a scripted assistant from a list of replies.
    pub fn new(replies: Vec<AssistantReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Create a scripted assistant with a single model reply.
    pub fn with_reply(text: impl Into<String>) -> Self {
        Self::new(vec![AssistantReply::model(text)])
    }

    /// Create a scripted assistant with a single tool-branch reply.
    pub fn with_tool_reply(text: impl Into<String>) -> Self {
        Self::new(vec![AssistantReply::symptom_tool(text)])
    }

    /// Get all recorded calls, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the number of calls received so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Assistant for ScriptedAssistant {
    async fn complete(
        &self,
        message: &str,
        context: Option<&str>,
    ) -> Result<AssistantReply, AssistantError> {
        self.calls.lock().unwrap().push(RecordedCall {
            message: message.to_string(),
            context: context.map(String::from),
        });

        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| AssistantError::MalformedResponse("script exhausted".to_string()))
    }

    fn name(&self) -> &str {
        "ScriptedAssistant"
    }
}
