//! Keyword-to-condition reference catalog.
//!
//! A [`ConditionCatalog`] is an ordered, read-only list of
//! [`ConditionRecord`]s loaded once at startup. Lookup is a first-match
//! keyword scan, so results are deterministic and order-stable. A miss
//! produces a clarifying follow-up downstream instead of a guessed
//! condition.

mod catalog;
mod error;
mod record;

pub use catalog::ConditionCatalog;
pub use error::CatalogError;
pub use record::ConditionRecord;
