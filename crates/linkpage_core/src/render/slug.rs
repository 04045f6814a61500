//! Anchor slugs for area sections.

use once_cell::sync::Lazy;
use regex::Regex;

/// Slug used when nothing survives normalization.
pub const DEFAULT_SLUG: &str = "section";

const MAX_SLUG_CHARS: usize = 64;

static DISALLOWED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s-]").expect("valid slug filter regex"));
static SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s_]+").expect("valid slug separator regex"));

/// Builds a lower-case, hyphenated anchor of at most 64 characters.
///
/// Distinct names can share a slug (`"A B"` and `"a-b"`); callers accept that.
pub fn slug(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let filtered = DISALLOWED_RE.replace_all(&lowered, "");
    let hyphenated = SEPARATOR_RE.replace_all(&filtered, "-");
    let truncated = hyphenated.chars().take(MAX_SLUG_CHARS).collect::<String>();
    let trimmed = truncated.trim_matches('-');
    if trimmed.is_empty() {
        DEFAULT_SLUG.to_string()
    } else {
        trimmed.to_string()
    }
}
