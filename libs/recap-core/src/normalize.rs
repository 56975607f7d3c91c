//! Answer normalization for typed test mode.

use std::sync::LazyLock;

use regex::Regex;

/// Feedback shown when a typed answer matches.
pub const CORRECT_FEEDBACK: &str = "Correct ✅";

// Whitespace here is the ECMAScript `\s` set: it includes U+FEFF and leaves
// out U+0085, which Unicode White_Space (regex `\s`) does the other way round.
static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"[^\p{L}\p{N}",
        r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}",
        r"\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]",
    ))
    .expect("valid pattern")
});

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}",
        r"\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+",
    ))
    .expect("valid pattern")
});

/// Canonical comparison form of free text.
///
/// Lower-cases, drops every char outside the letter (`\p{L}`), number
/// (`\p{N}`) and whitespace classes, then collapses whitespace runs to a
/// single space and trims the ends.
pub fn normalize(text: &str) -> String {
    let lower = text.to_lowercase();
    let kept = DISALLOWED.replace_all(&lower, "");
    let collapsed = WHITESPACE_RUN.replace_all(&kept, " ");

    collapsed.trim_matches(' ').to_string()
}

/// Same as [`normalize`], with absent text treated as empty.
pub fn normalize_opt(text: Option<&str>) -> String {
    normalize(text.unwrap_or_default())
}

/// Whether a submitted answer matches the expected one after normalization.
pub fn answers_match(submitted: &str, expected: &str) -> bool {
    normalize(submitted) == normalize(expected)
}

/// Feedback text for a graded answer. Discloses `expected` when wrong.
pub fn feedback_for(correct: bool, expected: &str) -> String {
    if correct {
        CORRECT_FEEDBACK.to_string()
    } else {
        format!("Incorrect ❌ (Answer: {})", expected)
    }
}
