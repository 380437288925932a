//! Typed payload for the `symptom_checker` tool call.
//!
//! The assistant declares a single callable function; when the model
//! invokes it, the arguments arrive as a JSON string that must be
//! validated at the boundary before the local catalog lookup runs.

use serde::Deserialize;

/// Name of the one function the assistant may call.
pub const SYMPTOM_TOOL_NAME: &str = "symptom_checker";

/// Parsed arguments of a `symptom_checker` invocation.
#[derive(Debug, Clone, Deserialize)]
pub struct SymptomQuery {
    /// The symptom description the model extracted from the conversation.
    pub symptoms: String,
}

impl SymptomQuery {
    /// Parse the raw `arguments` JSON string from a function call.
    pub fn from_arguments(arguments_json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(arguments_json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_arguments() {
        let query = SymptomQuery::from_arguments(r#"{"symptoms": "fever and chills"}"#).unwrap();
        assert_eq!(query.symptoms, "fever and chills");
    }

    #[test]
    fn test_extra_fields_ignored() {
        let query =
            SymptomQuery::from_arguments(r#"{"symptoms": "cough", "severity": "mild"}"#).unwrap();
        assert_eq!(query.symptoms, "cough");
    }

    #[test]
    fn test_missing_symptoms_is_error() {
        assert!(SymptomQuery::from_arguments(r#"{"query": "cough"}"#).is_err());
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(SymptomQuery::from_arguments("not json").is_err());
    }
}
