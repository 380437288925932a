//! Failing assistant implementation - simulates an unreachable provider.

use assistant_core::{async_trait, Assistant, AssistantError, AssistantReply};

/// An assistant that always fails with a network error.
///
/// Useful for testing the degraded-service path end-to-end.
#[derive(Debug, Clone, Default)]
pub struct FailingAssistant;

impl FailingAssistant {
    /// Create a new FailingAssistant.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Assistant for FailingAssistant {
    async fn complete(
        &self,
        _message: &str,
        _context: Option<&str>,
    ) -> Result<AssistantReply, AssistantError> {
        Err(AssistantError::Network("simulated outage".to_string()))
    }

    fn name(&self) -> &str {
        "FailingAssistant"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_always_fails() {
        let assistant = FailingAssistant::new();
        let err = assistant.complete("hello", None).await.unwrap_err();
        assert!(matches!(err, AssistantError::Network(_)));
    }
}
