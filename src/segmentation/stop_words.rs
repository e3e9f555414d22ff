use std::collections::HashSet;

/// Short words that carry little meaning on their own
pub const DEFAULT_STOP_WORDS: [&str; 12] = [
    "the", "a", "an", "for", "by", "and", "in", "on", "at", "to", "of", "as",
];

/// Case-insensitive set of words that should not end a segment or a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn new<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            words: words.into_iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Empty set, nothing is avoided
    pub fn none() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::new(DEFAULT_STOP_WORDS)
    }
}
