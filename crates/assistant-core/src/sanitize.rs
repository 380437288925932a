//! User-input cleaning applied before any prompt is built.
//!
//! This is a defense against reflected content ending up in the AI prompt,
//! not a full HTML sanitizer; inputs that are not tag-shaped pass through
//! unchanged.

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum number of characters kept from a user message.
pub const MAX_MESSAGE_CHARS: usize = 1000;

static SCRIPT_BLOCKS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script.*?>.*?</script>").expect("valid regex"));

static MARKUP_TAGS: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

/// Clean a raw user message.
///
/// Steps, in order: trim surrounding whitespace, strip
/// `<script>...</script>` blocks (non-greedy, case-insensitive), strip all
/// remaining `<...>` markup, truncate to [`MAX_MESSAGE_CHARS`] characters.
/// A final trim keeps the function idempotent when stripping exposes
/// interior whitespace at the ends.
pub fn sanitize(raw: &str) -> String {
    let trimmed = raw.trim();
    let without_scripts = SCRIPT_BLOCKS.replace_all(trimmed, "");
    let without_markup = MARKUP_TAGS.replace_all(&without_scripts, "");
    let bounded: String = without_markup.chars().take(MAX_MESSAGE_CHARS).collect();
    bounded.trim().to_string()
}
