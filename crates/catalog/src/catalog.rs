//! The ordered first-match keyword matcher.

use std::fs;
use std::path::Path;

use crate::error::CatalogError;
use crate::record::ConditionRecord;

/// An ordered, immutable collection of condition records.
///
/// Insertion order is the catalog-file order and is semantically
/// significant: lookup returns the *first* record with any matching
/// keyword, without scoring or ranking. Read-only after construction, so
/// it can be shared across request tasks without locking.
#[derive(Debug, Clone, Default)]
pub struct ConditionCatalog {
    records: Vec<ConditionRecord>,
}

impl ConditionCatalog {
    /// Build a catalog from already-parsed records, preserving order.
    ///
    /// Keywords are normalized to lowercase here so lookups only have to
    /// lowercase the input text.
    pub fn from_records(mut records: Vec<ConditionRecord>) -> Self {
        for record in &mut records {
            for keyword in &mut record.keywords {
                *keyword = keyword.to_lowercase();
            }
        }
        Self { records }
    }

    /// Load a catalog from a JSON file containing an array of records.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path)?;
        let records: Vec<ConditionRecord> = serde_json::from_str(&raw)?;
        Ok(Self::from_records(records))
    }

    /// Find the first record with a keyword occurring in `text`
    /// (case-insensitive substring match). `None` when nothing matches.
    pub fn find_match(&self, text: &str) -> Option<&ConditionRecord> {
        let lowered = text.to_lowercase();
        self.records.iter().find(|record| record.matches(&lowered))
    }

    /// Grounding context for a message: the matched record's description.
    ///
    /// `None` when no record matches or the matched record has no usable
    /// description.
    pub fn context_for(&self, text: &str) -> Option<&str> {
        self.find_match(text).and_then(|record| record.grounding())
    }

    /// Number of records in the catalog.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
