//! Result types assembled by the pipeline.

use serde::Serialize;

/// Structured symptom data attached to a chat result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymptomResult {
    pub condition: String,
    pub medication: String,
    pub advice: String,
}

/// The assembled response for a chat request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResult {
    /// The assistant's answer, in the caller's language.
    pub ai_response: String,
    /// Catalog data for the matched condition, omitted when nothing
    /// matched or every field was empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symptom_result: Option<SymptomResult>,
    /// The fixed medical disclaimer, present on every success.
    pub disclaimer: String,
    /// Correlation id, also attached to every log line for this request.
    pub session_id: String,
}

/// The response for an English-only keyword analysis.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AnalyzeResult {
    Match {
        condition: String,
        medication: String,
        advice: String,
    },
    Followup {
        followup: String,
    },
}

/// The response for a multilingual keyword analysis.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum TranslatedAnalysis {
    Answer { answer: String },
    Followup { followup: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chat_result_serializes_camel_case() {
        let result = ChatResult {
            ai_response: "Rest and hydrate.".to_string(),
            symptom_result: Some(SymptomResult {
                condition: "Flu".to_string(),
                medication: "Rest".to_string(),
                advice: "Hydrate".to_string(),
            }),
            disclaimer: "General information only.".to_string(),
            session_id: "abc-123".to_string(),
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({
                "aiResponse": "Rest and hydrate.",
                "symptomResult": {
                    "condition": "Flu",
                    "medication": "Rest",
                    "advice": "Hydrate"
                },
                "disclaimer": "General information only.",
                "sessionId": "abc-123"
            })
        );
    }

    #[test]
    fn test_chat_result_omits_absent_symptom_result() {
        let result = ChatResult {
            ai_response: "Hello!".to_string(),
            symptom_result: None,
            disclaimer: "General information only.".to_string(),
            session_id: "abc-123".to_string(),
        };

        let value = serde_json::to_value(&result).unwrap();
        assert!(value.get("symptomResult").is_none());
        assert!(value.get("aiResponse").is_some());
    }

    #[test]
    fn test_analyze_result_wire_shapes() {
        let matched = AnalyzeResult::Match {
            condition: "Flu".to_string(),
            medication: "Rest".to_string(),
            advice: "Hydrate".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&matched).unwrap(),
            json!({"condition": "Flu", "medication": "Rest", "advice": "Hydrate"})
        );

        let followup = AnalyzeResult::Followup {
            followup: "Tell me more.".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&followup).unwrap(),
            json!({"followup": "Tell me more."})
        );
    }

    #[test]
    fn test_translated_analysis_wire_shapes() {
        let answer = TranslatedAnalysis::Answer {
            answer: "Condition: Flu\n".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&answer).unwrap(),
            json!({"answer": "Condition: Flu\n"})
        );

        let followup = TranslatedAnalysis::Followup {
            followup: "Tell me more.".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&followup).unwrap(),
            json!({"followup": "Tell me more."})
        );
    }
}
