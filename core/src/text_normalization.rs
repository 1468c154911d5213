use once_cell::sync::Lazy;
use regex::Regex;

static BR_TAGS: Lazy<Regex> = Lazy::new(|| Regex::new(r"<br\s*/?>").unwrap());
static NON_ALPHANUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9\s]").unwrap());
static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Canonicalize raw review text into the form the classifier was trained on.
///
/// Lowercases, replaces `<br>` / `<br/>` / `<br />` tags with a space, drops
/// every character outside `[a-z0-9]` and whitespace, then collapses
/// whitespace runs to single spaces and trims. The order matters: tag removal
/// runs on the lowercased text, and the character filter sees the spaces left
/// behind by tag removal.
///
/// Idempotent, and never fails for any input.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let without_breaks = BR_TAGS.replace_all(&lowered, " ");
    let alphanumeric = NON_ALPHANUMERIC.replace_all(&without_breaks, "");
    WHITESPACE_RUNS
        .replace_all(&alphanumeric, " ")
        .trim()
        .to_string()
}
