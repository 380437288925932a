//! The pipeline that carries one request end-to-end.

use std::sync::Arc;

use assistant_core::{sanitize, Assistant, Translate, MAX_MESSAGE_CHARS};
use catalog::ConditionCatalog;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::PipelineError;
use crate::outcome::{AnalyzeResult, ChatResult, SymptomResult, TranslatedAnalysis};
use crate::rate_limit::RequestBudget;

/// Fixed medical disclaimer attached to every successful chat result.
pub const DISCLAIMER: &str = "This assistant provides general health information and is not a \
     substitute for professional medical advice, diagnosis, or treatment. Always consult a \
     qualified healthcare provider with any questions about a medical condition.";

/// Fixed follow-up returned when keyword analysis finds no match.
pub const FOLLOWUP_PROMPT: &str =
    "I'm not sure yet—could you describe your symptoms in more detail?";

const EMPTY_MESSAGE: &str = "Message cannot be empty";
const OVERSIZED_MESSAGE: &str = "Message must be between 1 and 1000 characters";

/// The end-to-end request pipeline.
///
/// Collaborators sit behind trait objects so tests can substitute
/// doubles. One instance serves all requests concurrently; the only
/// shared mutable state is the request budget, and the catalog is
/// read-only.
pub struct ChatPipeline {
    assistant: Arc<dyn Assistant>,
    translator: Arc<dyn Translate>,
    catalog: Arc<ConditionCatalog>,
    budget: RequestBudget,
}

impl ChatPipeline {
    /// Create a pipeline with the given collaborators.
    pub fn new(
        assistant: Arc<dyn Assistant>,
        translator: Arc<dyn Translate>,
        catalog: Arc<ConditionCatalog>,
        budget: RequestBudget,
    ) -> Self {
        Self {
            assistant,
            translator,
            catalog,
            budget,
        }
    }

    /// Carry one chat message through the full pipeline.
    ///
    /// `lang` is the caller's ISO 639-1 language code. `"en"` skips both
    /// translation stages; anything else translates the message to
    /// English before matching and the reply back afterwards.
    pub async fn chat(&self, message: &str, lang: &str) -> Result<ChatResult, PipelineError> {
        let session_id = Uuid::new_v4().to_string();

        info!(session_id = %session_id, lang = %lang, "Chat request received");

        if !self.budget.try_consume() {
            warn!(session_id = %session_id, "Request budget exhausted");
            return Err(PipelineError::RateLimited);
        }

        validate_message(message)?;

        let sanitized = sanitize(message);
        if sanitized.is_empty() {
            // Markup-only input sanitizes down to nothing.
            return Err(PipelineError::Validation(EMPTY_MESSAGE.to_string()));
        }

        let english = if lang == "en" {
            sanitized
        } else {
            debug!(session_id = %session_id, "Translating message to English");
            self.translator.to_english(&sanitized).await.map_err(|e| {
                warn!(session_id = %session_id, error = %e, "Inbound translation failed");
                PipelineError::from(e)
            })?
        };

        let matched = self.catalog.find_match(&english);
        let context = matched.and_then(|record| record.grounding());
        if let Some(record) = matched {
            debug!(session_id = %session_id, condition = %record.condition, "Catalog matched");
        }

        let reply = self
            .assistant
            .complete(&english, context)
            .await
            .map_err(|e| {
                warn!(session_id = %session_id, error = %e, "Assistant call failed");
                PipelineError::from(e)
            })?;

        info!(
            session_id = %session_id,
            from_tool = reply.is_from_tool(),
            chars = reply.text.chars().count(),
            "Assistant replied"
        );

        let ai_response = if lang == "en" {
            reply.text
        } else {
            debug!(session_id = %session_id, target = %lang, "Translating reply back");
            self.translator
                .from_english(&reply.text, lang)
                .await
                .map_err(|e| {
                    warn!(session_id = %session_id, error = %e, "Outbound translation failed");
                    PipelineError::from(e)
                })?
        };

        // An all-empty record is presented the same as no match.
        let symptom_result = matched
            .filter(|record| record.has_details())
            .map(|record| SymptomResult {
                condition: record.condition.clone(),
                medication: record.medication.clone(),
                advice: record.advice.clone(),
            });

        Ok(ChatResult {
            ai_response,
            symptom_result,
            disclaimer: DISCLAIMER.to_string(),
            session_id,
        })
    }

    /// Match a symptom description directly against the catalog, without
    /// involving the assistant.
    pub fn analyze(&self, text: &str) -> Result<AnalyzeResult, PipelineError> {
        let analysis_id = Uuid::new_v4();

        info!(analysis_id = %analysis_id, "Analyze request received");

        if !self.budget.try_consume() {
            warn!(analysis_id = %analysis_id, "Request budget exhausted");
            return Err(PipelineError::RateLimited);
        }

        let sanitized = sanitize(text);
        match self.catalog.find_match(&sanitized) {
            Some(record) => {
                debug!(
                    analysis_id = %analysis_id,
                    condition = %record.condition,
                    "Analysis matched"
                );
                Ok(AnalyzeResult::Match {
                    condition: record.condition.clone(),
                    medication: record.medication.clone(),
                    advice: record.advice.clone(),
                })
            }
            None => Ok(AnalyzeResult::Followup {
                followup: FOLLOWUP_PROMPT.to_string(),
            }),
        }
    }

    /// Multilingual analysis: translate in, match, format, translate out.
    pub async fn analyze_multilingual(
        &self,
        text: &str,
        lang: &str,
    ) -> Result<TranslatedAnalysis, PipelineError> {
        let analysis_id = Uuid::new_v4();

        info!(analysis_id = %analysis_id, lang = %lang, "Analyze request received");

        if !self.budget.try_consume() {
            warn!(analysis_id = %analysis_id, "Request budget exhausted");
            return Err(PipelineError::RateLimited);
        }

        let sanitized = sanitize(text);
        let english = if lang == "en" {
            sanitized
        } else {
            debug!(analysis_id = %analysis_id, "Translating message to English");
            self.translator.to_english(&sanitized).await.map_err(|e| {
                warn!(analysis_id = %analysis_id, error = %e, "Inbound translation failed");
                PipelineError::from(e)
            })?
        };

        match self.catalog.find_match(&english) {
            Some(record) => {
                debug!(
                    analysis_id = %analysis_id,
                    condition = %record.condition,
                    "Analysis matched"
                );
                let answer = format!(
                    "Condition: {}\nMedication: {}\nAdvice: {}\n",
                    record.condition, record.medication, record.advice
                );
                let answer = self.localize(answer, lang, analysis_id).await?;
                Ok(TranslatedAnalysis::Answer { answer })
            }
            None => {
                let followup = self
                    .localize(FOLLOWUP_PROMPT.to_string(), lang, analysis_id)
                    .await?;
                Ok(TranslatedAnalysis::Followup { followup })
            }
        }
    }

    /// Translate an English answer back to the caller's language when the
    /// caller is not English.
    async fn localize(
        &self,
        english: String,
        lang: &str,
        analysis_id: Uuid,
    ) -> Result<String, PipelineError> {
        if lang == "en" {
            return Ok(english);
        }

        self.translator
            .from_english(&english, lang)
            .await
            .map_err(|e| {
                warn!(analysis_id = %analysis_id, error = %e, "Outbound translation failed");
                PipelineError::from(e)
            })
    }
}

fn validate_message(message: &str) -> Result<(), PipelineError> {
    if message.trim().is_empty() {
        return Err(PipelineError::Validation(EMPTY_MESSAGE.to_string()));
    }
    if message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(PipelineError::Validation(OVERSIZED_MESSAGE.to_string()));
    }
    Ok(())
}
