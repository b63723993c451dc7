//! Text cleanup applied to reminder descriptions once the date/time is taken out.

use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_PREPOSITION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:on|at|for|by|in)\s+").expect("valid preposition regex"));

static TRAILING_PREPOSITION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s+(?:on|at|for|by|in)$").expect("valid preposition regex"));

static LEAD_PHRASE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:remind me to|reminder to|remember to)\s+").expect("valid phrase regex")
});

static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Shortest description worth keeping, in characters.
pub const MIN_TEXT_CHARS: usize = 2;

/// Removes the first occurrence of `span` from `text`.
pub fn remove_span(text: &str, span: &str) -> String {
    if span.is_empty() {
        return text.to_string();
    }
    text.replacen(span, "", 1)
}

/// Strips one dangling preposition (`on`, `at`, `for`, `by`, `in`) from each edge.
///
/// ```
/// # use nudge_core::cleanup::strip_dangling_prepositions;
/// assert_eq!(strip_dangling_prepositions("meeting on"), "meeting");
/// assert_eq!(strip_dangling_prepositions("at home"), "home");
/// assert_eq!(strip_dangling_prepositions("online"), "online");
/// ```
pub fn strip_dangling_prepositions(text: &str) -> String {
    let text = LEADING_PREPOSITION_RE.replace(text, "");
    TRAILING_PREPOSITION_RE.replace(&text, "").into_owned()
}

/// Drops a leading "remind me to", "reminder to" or "remember to".
pub fn strip_lead_phrase(text: &str) -> String {
    LEAD_PHRASE_RE.replace(text, "").into_owned()
}

/// Collapses whitespace runs into single spaces and trims both ends.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").trim().to_string()
}

/// Whether a cleaned description is too short to stand on its own.
pub fn is_too_short(text: &str) -> bool {
    text.chars().count() < MIN_TEXT_CHARS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_span_only_removes_first_occurrence() {
        assert_eq!(remove_span("today and today", "today"), " and today");
        assert_eq!(remove_span("call mom", "tomorrow"), "call mom");
        assert_eq!(remove_span("call mom", ""), "call mom");
    }

    #[test]
    fn prepositions_are_stripped_once_per_edge() {
        assert_eq!(strip_dangling_prepositions("by submit report by"), "submit report");
        assert_eq!(strip_dangling_prepositions("On the go IN"), "the go");
        assert_eq!(strip_dangling_prepositions("at at noon"), "at noon");
    }

    #[test]
    fn prepositions_must_be_whole_words() {
        assert_eq!(strip_dangling_prepositions("bypass"), "bypass");
        assert_eq!(strip_dangling_prepositions("forge"), "forge");
        assert_eq!(strip_dangling_prepositions("cabin"), "cabin");
    }

    #[test]
    fn lead_phrase_is_case_insensitive() {
        assert_eq!(strip_lead_phrase("Remind me to call mom"), "call mom");
        assert_eq!(strip_lead_phrase("reminder to  water plants"), "water plants");
        assert_eq!(strip_lead_phrase("remember to breathe"), "breathe");
        assert_eq!(strip_lead_phrase("I should remember to"), "I should remember to");
    }

    #[test]
    fn collapse_whitespace_trims_and_joins() {
        assert_eq!(collapse_whitespace("  call \t mom\n now "), "call mom now");
        assert_eq!(collapse_whitespace("   "), "");
    }

    #[test]
    fn too_short_counts_characters() {
        assert!(is_too_short(""));
        assert!(is_too_short("a"));
        assert!(!is_too_short("ok"));
        assert!(!is_too_short("é!"));
    }
}
