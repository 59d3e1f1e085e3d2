//! Text analysis: ASCII tokenization and Porter stemming.
//!
//! A token is a maximal run of ASCII alphanumeric bytes; every other byte is
//! a separator, including all non-ASCII bytes. Tokens are lowercased
//! (ASCII only) and stemmed before they reach the index. Token positions are
//! 0-based ordinals over the emitted token stream — every emitted token
//! counts, so the phrase matcher can reason about adjacency.

pub mod porter;

/// Split `text` into lowercased, stemmed tokens, in document order.
///
/// The i-th element of the result occupies position i.
pub fn analyze(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut word = String::new();
    for &byte in text.as_bytes() {
        if byte.is_ascii_alphanumeric() {
            word.push(byte.to_ascii_lowercase() as char);
        } else if !word.is_empty() {
            tokens.push(porter::stem(std::mem::take(&mut word)));
        }
    }
    if !word.is_empty() {
        tokens.push(porter::stem(word));
    }
    tokens
}

/// Analyze a single word the way indexed tokens are analyzed: ASCII
/// lowercase, then stem. Query terms go through here so `Cats` finds `cat`.
pub fn analyze_term(word: &str) -> String {
    porter::stem(word.to_ascii_lowercase())
}
