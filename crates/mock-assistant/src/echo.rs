//! Echo assistant implementation - replies with the user's message.

use assistant_core::{async_trait, Assistant, AssistantError, AssistantReply};

/// A simple assistant that replies with the user's own message.
///
/// Useful for testing the pipeline flow without any model behavior.
#[derive(Debug, Clone, Default)]
pub struct EchoAssistant {
    /// Optional prefix to add before the echo.
    prefix: Option<String>,
}

impl EchoAssistant {
    /// Create a new EchoAssistant with no prefix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new EchoAssistant with a custom prefix.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mock_assistant::EchoAssistant;
    ///
    /// let assistant = EchoAssistant::with_prefix("You said: ");
    /// // Will reply with "You said: <original message>"
    /// ```
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }
}

#[async_trait]
impl Assistant for EchoAssistant {
    async fn complete(
        &self,
        message: &str,
        _context: Option<&str>,
    ) -> Result<AssistantReply, AssistantError> {
        let text = match &self.prefix {
            Some(prefix) => format!("{}{}", prefix, message),
            None => message.to_string(),
        };

        Ok(AssistantReply::model(text))
    }

    fn name(&self) -> &str {
        "EchoAssistant"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_echo_no_prefix() {
        let assistant = EchoAssistant::new();

        let reply = assistant.complete("I have a cough", None).await.unwrap();
        assert_eq!(reply.text, "I have a cough");
        assert!(!reply.is_from_tool());
    }

    #[tokio::test]
    async fn test_echo_with_prefix() {
        let assistant = EchoAssistant::with_prefix("You said: ");

        let reply = assistant.complete("I have a cough", None).await.unwrap();
        assert_eq!(reply.text, "You said: I have a cough");
    }

    #[tokio::test]
    async fn test_assistant_name() {
        let assistant = EchoAssistant::new();
        assert_eq!(assistant.name(), "EchoAssistant");
    }
}
