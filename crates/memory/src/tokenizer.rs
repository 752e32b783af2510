//! Whitespace tokenizer with a fixed stop-word filter.
//!
//! Tokens are lowercased so matching is case-insensitive, while stored text keeps
//! its original casing. Punctuation is not stripped: `"said,"` and `"said"` are
//! different tokens.

/// Words that never take part in matching.
pub const STOP_WORDS: &[&str] = &[
    "a", "i", "it", "am", "at", "on", "in", "to", "too", "very", "of", "from", "here", "even",
    "the", "but", "and", "is", "my", "them", "then", "this", "that", "than", "though", "so",
    "are",
];

/// Whether an already-lowercased token is a stop word.
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

/// Split `text` into lowercase tokens, dropping stop words.
///
/// Runs of whitespace count as a single delimiter. Order and duplicates are kept.
/// Returns an empty vector for blank input or input made only of stop words.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(str::to_lowercase)
        .filter(|token| !is_stop_word(token))
        .collect()
}
