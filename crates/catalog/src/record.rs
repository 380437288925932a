//! A single catalog entry.

use serde::{Deserialize, Serialize};

/// One keyword-to-condition mapping.
///
/// All fields default when absent from the catalog file, so a sparse
/// record still loads; empty fields fall back to neutral wording at the
/// point of presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionRecord {
    /// Keywords that select this record (matched as case-insensitive
    /// substrings of the user text).
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Name of the condition.
    #[serde(default)]
    pub condition: String,

    /// Suggested over-the-counter medication or self-care measure.
    #[serde(default)]
    pub medication: String,

    /// Advice text.
    #[serde(default)]
    pub advice: String,

    /// Longer description used as conversational grounding.
    #[serde(default)]
    pub description: Option<String>,
}

impl ConditionRecord {
    /// Whether any keyword occurs in the already-lowercased text.
    ///
    /// Keywords are normalized to lowercase when the catalog is built, so
    /// a plain substring test suffices here.
    pub(crate) fn matches(&self, lowered_text: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| lowered_text.contains(keyword.as_str()))
    }

    /// Whether at least one of condition, medication, or advice is set.
    pub fn has_details(&self) -> bool {
        !self.condition.is_empty() || !self.medication.is_empty() || !self.advice.is_empty()
    }

    /// Usable grounding text: the description, unless absent or blank.
    pub fn grounding(&self) -> Option<&str> {
        self.description
            .as_deref()
            .filter(|description| !description.trim().is_empty())
    }
}
