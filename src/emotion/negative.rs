//! Negative-phrase detection over raw message text.

use lazy_static::lazy_static;
use regex::Regex;

/// Phrase patterns expressing negated wellbeing or explicit negative affect.
/// Unanchored: bare words also match inside longer words ("sad" in "sadly").
const NEGATIVE_PATTERNS: [&str; 22] = [
    r"not.*good",
    r"not.*well",
    r"not.*feel.*good",
    r"not.*ok",
    r"not.*okay",
    r"not.*happy",
    r"not.*great",
    r"not.*fine",
    r"feeling.*bad",
    r"feel.*bad",
    r"unhappy",
    r"upset",
    r"depressed",
    r"anxious",
    r"stressed",
    r"worried",
    r"sad",
    r"miserable",
    r"terrible",
    r"awful",
    r"horrible",
    r"hate",
];

lazy_static! {
    static ref COMPILED_PATTERNS: Vec<Regex> = NEGATIVE_PATTERNS
        .iter()
        .map(|pattern| Regex::new(pattern).expect("Failed to compile negative phrase pattern"))
        .collect();
}

/// Whether the text contains any negative emotion indicator.
///
/// The input is lower-cased first; the first matching pattern short-circuits.
pub fn contains_negative_phrase(text: &str) -> bool {
    let text = text.to_lowercase();
    COMPILED_PATTERNS.iter().any(|pattern| pattern.is_match(&text))
}
