//! OpenAiAssistant implementation.

use std::sync::Arc;

use assistant_core::{
    async_trait, hash_prompt, Assistant, AssistantError, AssistantReply, SymptomQuery,
    SYMPTOM_TOOL_NAME,
};
use catalog::ConditionCatalog;
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::api_types::{
    ApiError, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ResponseMessage,
};
use crate::config::OpenAiConfig;
use crate::tools::FunctionSpec;

/// Fixed system instruction for every conversation.
///
/// The assistant must stay within general health information: no
/// diagnosis, no prescriptions, plain language, and explicit escalation
/// wording for emergencies.
const SYSTEM_PROMPT: &str = "\
You are a friendly virtual health-information assistant. You help people \
understand common symptoms and general wellness topics in plain, \
empathetic language.

Rules you must always follow:
- Provide general health information only. Never state or imply a medical \
diagnosis, and never prescribe or dose prescription medication.
- If symptoms sound severe or sudden (chest pain, difficulty breathing, \
signs of stroke, heavy bleeding, loss of consciousness), tell the user to \
contact local emergency services immediately.
- Encourage the user to consult a qualified healthcare provider for \
anything beyond self-care.
- Only answer health-related questions. Politely decline other topics.
- If the user's description is vague, ask for more detail instead of \
guessing.";

/// Replies shorter than this are treated as vague.
const MIN_CONFIDENT_REPLY_CHARS: usize = 30;

/// Phrases that mark a reply as hedging, checked case-insensitively.
const HEDGE_PHRASES: [&str; 2] = ["i'm not sure", "i don't know"];

/// Appended when the model's direct reply is short or hedging.
const CLARIFY_SUFFIX: &str =
    "\n\nCould you please describe your symptoms or question in more detail so I can assist you better?";

/// Fallbacks for empty fields in a matched record.
const UNKNOWN_CONDITION: &str = "Unknown";
const NO_MEDICATION: &str = "None recommended";
const DEFAULT_ADVICE: &str = "Please consult a healthcare provider.";

/// Returned by the tool branch when the catalog has no match.
const NO_MATCH_REPLY: &str =
    "No specific condition identified. Please provide more details about your symptoms.";

/// An [`Assistant`] backed by the OpenAI chat-completions API.
///
/// Holds the condition catalog so that `symptom_checker` invocations can
/// be answered locally, without a second model round-trip.
pub struct OpenAiAssistant {
    client: Client,
    config: OpenAiConfig,
    catalog: Arc<ConditionCatalog>,
    prompt_hash: String,
}

impl OpenAiAssistant {
    /// Create a new assistant client with the given configuration.
    pub fn new(
        config: OpenAiConfig,
        catalog: Arc<ConditionCatalog>,
    ) -> Result<Self, AssistantError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                AssistantError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        let prompt_hash = hash_prompt(SYSTEM_PROMPT);

        info!(
            model = %config.model,
            timeout_secs = config.timeout_secs,
            prompt_fingerprint = %prompt_hash,
            "OpenAiAssistant initialized"
        );

        Ok(Self {
            client,
            config,
            catalog,
            prompt_hash,
        })
    }

    /// Create an assistant client from environment variables.
    ///
    /// See [`OpenAiConfig::from_env`] for the variables read.
    pub fn from_env(catalog: Arc<ConditionCatalog>) -> Result<Self, AssistantError> {
        let config = OpenAiConfig::from_env()?;
        Self::new(config, catalog)
    }

    /// Get the configuration.
    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }

    /// Get the system prompt fingerprint.
    pub fn prompt_fingerprint(&self) -> &str {
        &self.prompt_hash
    }

    /// Build the ordered conversation for a completion request.
    ///
    /// Order is fixed: system instruction, optional catalog-derived
    /// grounding message, the user's message.
    fn build_messages(&self, user_message: &str, context: Option<&str>) -> Vec<ChatMessage> {
        let mut messages = Vec::new();

        messages.push(ChatMessage::system(SYSTEM_PROMPT));

        if let Some(context) = context {
            messages.push(ChatMessage::assistant(context));
        }

        messages.push(ChatMessage::user(user_message));

        messages
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.config.api_url.trim_end_matches('/'))
    }

    /// Make a chat completion request.
    async fn chat_completion(
        &self,
        messages: Vec<ChatMessage>,
    ) -> Result<ChatCompletionResponse, AssistantError> {
        let url = self.endpoint();

        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages,
            functions: vec![FunctionSpec::symptom_checker()],
            function_call: "auto".to_string(),
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| AssistantError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            // Prefer the structured message when the body parses
            let message = match serde_json::from_str::<ApiError>(&error_text) {
                Ok(api_error) => api_error.error.message,
                Err(_) => error_text,
            };

            return Err(AssistantError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            AssistantError::MalformedResponse(format!("Failed to parse response: {}", e))
        })?;

        Ok(completion)
    }

    /// Resolve a completion into a reply through the two-branch state
    /// machine: tool invocation or direct text.
    fn resolve_reply(
        &self,
        completion: ChatCompletionResponse,
    ) -> Result<AssistantReply, AssistantError> {
        let message: ResponseMessage = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message)
            .ok_or_else(|| {
                AssistantError::MalformedResponse("response contained no choices".to_string())
            })?;

        if let Some(call) = message.function_call {
            if call.name != SYMPTOM_TOOL_NAME {
                return Err(AssistantError::MalformedResponse(format!(
                    "model requested unknown function: {}",
                    call.name
                )));
            }

            let query = SymptomQuery::from_arguments(&call.arguments).map_err(|e| {
                AssistantError::MalformedResponse(format!(
                    "unparseable symptom_checker arguments: {}",
                    e
                ))
            })?;

            debug!(symptoms = %query.symptoms, "Model invoked symptom_checker");
            return Ok(AssistantReply::symptom_tool(
                self.check_symptoms(&query.symptoms),
            ));
        }

        match message.content {
            Some(content) => Ok(AssistantReply::model(clarify_if_vague(content))),
            None => Err(AssistantError::MalformedResponse(
                "response had neither content nor a function call".to_string(),
            )),
        }
    }

    /// Synthesize the fixed-format structured answer for a tool call.
    fn check_symptoms(&self, symptoms: &str) -> String {
        match self.catalog.find_match(symptoms) {
            Some(record) => format!(
                "Symptom Checker Result:\nCondition: {}\nMedication: {}\nAdvice: {}",
                field_or(&record.condition, UNKNOWN_CONDITION),
                field_or(&record.medication, NO_MEDICATION),
                field_or(&record.advice, DEFAULT_ADVICE),
            ),
            None => {
                warn!(symptoms = %symptoms, "symptom_checker found no catalog match");
                NO_MATCH_REPLY.to_string()
            }
        }
    }
}

fn field_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

/// Append the clarifying suffix when a reply is short or hedging.
///
/// The heuristic is deliberately literal (two fixed phrases plus a length
/// threshold) and English-specific; the pipeline translates before and
/// after this point.
fn clarify_if_vague(reply: String) -> String {
    let lowered = reply.to_lowercase();
    let hedges = HEDGE_PHRASES.iter().any(|phrase| lowered.contains(phrase));

    if reply.trim().chars().count() < MIN_CONFIDENT_REPLY_CHARS || hedges {
        format!("{}{}", reply, CLARIFY_SUFFIX)
    } else {
        reply
    }
}

#[async_trait]
impl Assistant for OpenAiAssistant {
    async fn complete(
        &self,
        message: &str,
        context: Option<&str>,
    ) -> Result<AssistantReply, AssistantError> {
        debug!(has_context = context.is_some(), "Requesting completion");

        let messages = self.build_messages(message, context);
        let completion = self.chat_completion(messages).await?;

        if let Some(ref usage) = completion.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "Token usage"
            );
        }

        self.resolve_reply(completion)
    }

    fn name(&self) -> &str {
        "OpenAiAssistant"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::ConditionRecord;
    use serde_json::json;

    fn test_catalog() -> Arc<ConditionCatalog> {
        Arc::new(ConditionCatalog::from_records(vec![
            ConditionRecord {
                keywords: vec!["fever".to_string()],
                condition: "Flu".to_string(),
                medication: "Rest".to_string(),
                advice: "Hydrate".to_string(),
                description: Some("Influenza is a common viral infection.".to_string()),
            },
            ConditionRecord {
                keywords: vec!["dizzy".to_string()],
                condition: String::new(),
                medication: String::new(),
                advice: String::new(),
                description: None,
            },
        ]))
    }

    fn test_assistant() -> OpenAiAssistant {
        let config = OpenAiConfig::builder().api_key("test-key").build();
        OpenAiAssistant::new(config, test_catalog()).unwrap()
    }

    fn completion_with(message: serde_json::Value) -> ChatCompletionResponse {
        serde_json::from_value(json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "created": 0,
            "model": "gpt-3.5-turbo",
            "choices": [{
                "index": 0,
                "message": message,
                "finish_reason": "stop"
            }]
        }))
        .unwrap()
    }

    #[test]
    fn test_endpoint_joins_cleanly() {
        let slashed = OpenAiConfig::builder()
            .api_key("test-key")
            .api_url("http://localhost:9000/")
            .build();
        let assistant = OpenAiAssistant::new(slashed, test_catalog()).unwrap();
        assert_eq!(
            assistant.endpoint(),
            "http://localhost:9000/v1/chat/completions"
        );

        let bare = OpenAiConfig::builder()
            .api_key("test-key")
            .api_url("http://localhost:9000")
            .build();
        let assistant = OpenAiAssistant::new(bare, test_catalog()).unwrap();
        assert_eq!(
            assistant.endpoint(),
            "http://localhost:9000/v1/chat/completions"
        );
    }

    #[test]
    fn test_build_messages_without_context() {
        let assistant = test_assistant();
        let messages = assistant.build_messages("I have a headache", None);

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[1].role, "user");
        assert_eq!(messages[1].content, "I have a headache");
    }

    #[test]
    fn test_build_messages_with_context() {
        let assistant = test_assistant();
        let messages =
            assistant.build_messages("I have a fever", Some("Influenza is a viral infection."));

        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].role, "assistant");
        assert_eq!(messages[1].content, "Influenza is a viral infection.");
        assert_eq!(messages[2].role, "user");
    }

    #[test]
    fn test_direct_reply_long_is_verbatim() {
        let assistant = test_assistant();
        let text = "Headaches are commonly caused by dehydration, eye strain, or stress.";
        let reply = assistant
            .resolve_reply(completion_with(json!({
                "role": "assistant",
                "content": text
            })))
            .unwrap();

        assert_eq!(reply.text, text);
        assert!(!reply.is_from_tool());
    }

    #[test]
    fn test_direct_reply_short_gets_suffix() {
        let assistant = test_assistant();
        let reply = assistant
            .resolve_reply(completion_with(json!({
                "role": "assistant",
                "content": "Not sure."
            })))
            .unwrap();

        assert_eq!(reply.text, format!("Not sure.{}", CLARIFY_SUFFIX));
    }

    #[test]
    fn test_direct_reply_hedge_gets_suffix() {
        let assistant = test_assistant();
        // Longer than the threshold, so only the hedge phrase triggers.
        let text = "I'm Not Sure what could be causing that, it depends on many factors.";
        let reply = assistant
            .resolve_reply(completion_with(json!({
                "role": "assistant",
                "content": text
            })))
            .unwrap();

        assert!(reply.text.starts_with(text));
        assert!(reply.text.ends_with(CLARIFY_SUFFIX));
    }

    #[test]
    fn test_tool_branch_synthesizes_template() {
        let assistant = test_assistant();
        let reply = assistant
            .resolve_reply(completion_with(json!({
                "role": "assistant",
                "content": null,
                "function_call": {
                    "name": "symptom_checker",
                    "arguments": "{\"symptoms\": \"fever\"}"
                }
            })))
            .unwrap();

        assert!(reply.is_from_tool());
        assert_eq!(
            reply.text,
            "Symptom Checker Result:\nCondition: Flu\nMedication: Rest\nAdvice: Hydrate"
        );
    }

    #[test]
    fn test_tool_branch_fallbacks_for_empty_fields() {
        let assistant = test_assistant();
        let reply = assistant
            .resolve_reply(completion_with(json!({
                "role": "assistant",
                "content": null,
                "function_call": {
                    "name": "symptom_checker",
                    "arguments": "{\"symptoms\": \"feeling dizzy\"}"
                }
            })))
            .unwrap();

        assert_eq!(
            reply.text,
            "Symptom Checker Result:\nCondition: Unknown\nMedication: None recommended\n\
             Advice: Please consult a healthcare provider."
        );
    }

    #[test]
    fn test_tool_branch_no_match() {
        let assistant = test_assistant();
        let reply = assistant
            .resolve_reply(completion_with(json!({
                "role": "assistant",
                "content": null,
                "function_call": {
                    "name": "symptom_checker",
                    "arguments": "{\"symptoms\": \"xyzzy\"}"
                }
            })))
            .unwrap();

        assert_eq!(reply.text, NO_MATCH_REPLY);
        assert!(reply.is_from_tool());
    }

    #[test]
    fn test_tool_branch_bad_arguments() {
        let assistant = test_assistant();
        let err = assistant
            .resolve_reply(completion_with(json!({
                "role": "assistant",
                "content": null,
                "function_call": {
                    "name": "symptom_checker",
                    "arguments": "not json"
                }
            })))
            .unwrap_err();

        assert!(matches!(err, AssistantError::MalformedResponse(_)));
    }

    #[test]
    fn test_unknown_function_is_error() {
        let assistant = test_assistant();
        let err = assistant
            .resolve_reply(completion_with(json!({
                "role": "assistant",
                "content": null,
                "function_call": {
                    "name": "order_pizza",
                    "arguments": "{}"
                }
            })))
            .unwrap_err();

        assert!(matches!(err, AssistantError::MalformedResponse(_)));
    }

    #[test]
    fn test_empty_choices_is_error() {
        let assistant = test_assistant();
        let completion: ChatCompletionResponse = serde_json::from_value(json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "created": 0,
            "model": "gpt-3.5-turbo",
            "choices": []
        }))
        .unwrap();

        assert!(matches!(
            assistant.resolve_reply(completion),
            Err(AssistantError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_no_content_no_call_is_error() {
        let assistant = test_assistant();
        let result = assistant.resolve_reply(completion_with(json!({
            "role": "assistant",
            "content": null
        })));

        assert!(matches!(result, Err(AssistantError::MalformedResponse(_))));
    }

    #[test]
    fn test_assistant_name() {
        assert_eq!(test_assistant().name(), "OpenAiAssistant");
    }

    #[test]
    fn test_prompt_fingerprint_is_stable() {
        let first = test_assistant();
        let second = test_assistant();
        assert_eq!(first.prompt_fingerprint(), second.prompt_fingerprint());
    }

    #[tokio::test]
    async fn test_complete_unreachable_endpoint_is_network_error() {
        let config = OpenAiConfig::builder()
            .api_key("test-key")
            .api_url("http://127.0.0.1:59994")
            .build();
        let assistant = OpenAiAssistant::new(config, test_catalog()).unwrap();

        let err = assistant
            .complete("I have a headache", None)
            .await
            .unwrap_err();
        assert!(matches!(err, AssistantError::Network(_)));
    }
}
