//! LibreTranslate-backed implementation of the [`Translate`] trait.
//!
//! The pipeline only ever calls the two directional helpers
//! (`to_english` / `from_english`); both funnel through the single
//! `/translate` endpoint of a LibreTranslate-compatible service.
//!
//! [`Translate`]: assistant_core::Translate

mod api_types;
mod client;
mod config;

pub use api_types::{TranslateRequest, TranslateResponse};
pub use client::LibreTranslator;
pub use config::TranslatorConfig;
