//! Function declarations offered to the model.
//!
//! The legacy chat-completions `functions` array carries bare function
//! objects; the typed payload of an invocation lives in
//! `assistant_core::SymptomQuery`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use assistant_core::SYMPTOM_TOOL_NAME;

/// A callable function declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionSpec {
    /// Name of the function.
    pub name: String,
    /// Description of what the function does.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// JSON Schema for the function parameters.
    pub parameters: Value,
}

impl FunctionSpec {
    /// Create the `symptom_checker` function declaration.
    ///
    /// This is the only function the assistant may call. Selection is left
    /// to the model; when invoked, the arguments are matched against the
    /// local condition catalog and the answer is synthesized without a
    /// second model round-trip.
    pub fn symptom_checker() -> Self {
        Self {
            name: SYMPTOM_TOOL_NAME.to_string(),
            description: Some(
                "Check the user's described symptoms against a curated reference and \
                 return a possible condition, a suggested over-the-counter measure, \
                 and general advice. Call this when the user describes physical \
                 symptoms they are currently experiencing."
                    .to_string(),
            ),
            parameters: serde_json::json!({
                "type": "object",
                "properties": {
                    "symptoms": {
                        "type": "string",
                        "description": "The user's symptom description in plain language."
                    }
                },
                "required": ["symptoms"]
            }),
        }
    }
}
