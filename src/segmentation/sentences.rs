use once_cell::sync::Lazy;
use regex::Regex;

// @const: Sentence-terminal punctuation followed by whitespace
static SENTENCE_BOUNDARY_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]\s+").unwrap());

/// Split a paragraph into sentences.
///
/// A boundary is whitespace directly after `.`, `!` or `?`; the punctuation
/// stays on the preceding sentence and the whitespace is dropped. Empty
/// pieces are never returned.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_BOUNDARY_REGEX.find_iter(text) {
        // Punctuation marks are single-byte, so this stays on a char boundary
        sentences.push(&text[start..boundary.start() + 1]);
        start = boundary.end();
    }

    if start < text.len() {
        sentences.push(&text[start..]);
    }

    sentences
}
