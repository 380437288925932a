//! Translator test doubles with per-direction call counters.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use assistant_core::{async_trait, Translate, TranslateError};

/// A translator backed by a fixed phrase dictionary.
///
/// Calls with target `"en"` are counted as inbound and looked up in the
/// dictionary (unknown phrases pass through unchanged, since the test
/// controls both sides). All other calls are counted as outbound and
/// prefixed with the target language code, so tests can assert that a
/// reply really went through back-translation.
#[derive(Debug, Default)]
pub struct MappingTranslator {
    dictionary: HashMap<String, String>,
    to_english_calls: AtomicUsize,
    from_english_calls: AtomicUsize,
}

impl MappingTranslator {
    /// Create a translator with an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a foreign-phrase to English-phrase mapping.
    pub fn entry(mut self, foreign: impl Into<String>, english: impl Into<String>) -> Self {
        self.dictionary.insert(foreign.into(), english.into());
        self
    }

    /// Number of inbound (to-English) calls received.
    pub fn to_english_count(&self) -> usize {
        self.to_english_calls.load(Ordering::SeqCst)
    }

    /// Number of outbound (from-English) calls received.
    pub fn from_english_count(&self) -> usize {
        self.from_english_calls.load(Ordering::SeqCst)
    }

    /// Total calls in both directions.
    pub fn total_calls(&self) -> usize {
        self.to_english_count() + self.from_english_count()
    }
}

#[async_trait]
impl Translate for MappingTranslator {
    async fn translate(
        &self,
        text: &str,
        _source: &str,
        target: &str,
    ) -> Result<String, TranslateError> {
        if target == "en" {
            self.to_english_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .dictionary
                .get(text)
                .cloned()
                .unwrap_or_else(|| text.to_string()))
        } else {
            self.from_english_calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!("[{}] {}", target, text))
        }
    }
}

/// A translator that always fails with a network error.
#[derive(Debug, Clone, Default)]
pub struct FailingTranslator;

impl FailingTranslator {
    /// Create a new FailingTranslator.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Translate for FailingTranslator {
    async fn translate(
        &self,
        _text: &str,
        _source: &str,
        _target: &str,
    ) -> Result<String, TranslateError> {
        Err(TranslateError::Network("simulated outage".to_string()))
    }
}
