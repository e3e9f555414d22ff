/*!
 * Display line wrapping for subtitle text.
 *
 * A segment short enough for one line is shown as is. Longer segments are
 * wrapped onto exactly two lines near the middle, never leaving a stop word
 * at the end of the first line when it can be helped.
 */

use crate::segmentation::{choose_cut_point, CutStrategy, StopWords};

/// Wraps text segments into one or two display lines
#[derive(Debug, Clone)]
pub struct LineFormatter {
    max_words_per_line: usize,
    stop_words: StopWords,
}

impl LineFormatter {
    pub fn new(max_words_per_line: usize, stop_words: StopWords) -> Self {
        Self {
            max_words_per_line,
            stop_words,
        }
    }

    pub fn max_words_per_line(&self) -> usize {
        self.max_words_per_line
    }

    /// Format a segment into a single subtitle block.
    ///
    /// Returns the segment untouched when it has at most `max_words_per_line`
    /// words, otherwise two single-spaced lines joined by `\n`.
    pub fn format_subtitle(&self, segment: &str) -> String {
        let words: Vec<&str> = segment.split_whitespace().collect();

        if words.len() <= self.max_words_per_line {
            return segment.to_string();
        }

        let split_point = choose_cut_point(&words, &self.stop_words, CutStrategy::DisplayLine);
        format!(
            "{}\n{}",
            words[..split_point].join(" "),
            words[split_point..].join(" ")
        )
    }
}

impl Default for LineFormatter {
    fn default() -> Self {
        Self::new(10, StopWords::default())
    }
}
