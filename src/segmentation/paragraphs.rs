use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use super::length::split_sentence_by_length;
use super::sentences::split_sentences;
use super::stop_words::StopWords;
use super::word_count;
use crate::document::{ClassifiedParagraph, ParagraphKind};

// @const: "PART <roman numeral>: <title>" heading
static PART_HEADING_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^PART\s+[IVXLC]+:\s+").unwrap());

/// One item of the segmented stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A new top-level part starts here
    SectionBreak,
    /// A run of prose bounded by the word limit
    Text(String),
}

/// Check whether a heading opens a new part
pub fn is_part_heading(text: &str) -> bool {
    PART_HEADING_REGEX.is_match(text)
}

/// Walks classified paragraphs and emits text segments and section breaks
#[derive(Debug, Clone)]
pub struct ParagraphProcessor {
    max_words: usize,
    flex_words: usize,
    stop_words: StopWords,
}

impl ParagraphProcessor {
    pub fn new(max_words: usize, flex_words: usize, stop_words: StopWords) -> Self {
        Self {
            max_words,
            flex_words,
            stop_words,
        }
    }

    /// Segment the paragraphs in document order.
    ///
    /// Part headings become `SectionBreak`; other headings produce nothing.
    /// Normal paragraphs are split into sentences and sentences longer than
    /// `max_words` are split further by length.
    pub fn process(&self, paragraphs: &[ClassifiedParagraph]) -> Vec<Segment> {
        let mut segments = Vec::new();

        for paragraph in paragraphs {
            match paragraph.kind {
                ParagraphKind::Heading => {
                    if is_part_heading(&paragraph.text) {
                        segments.push(Segment::SectionBreak);
                    } else {
                        debug!("Dropping non-part heading: {:?}", paragraph.text);
                    }
                }
                ParagraphKind::Normal => self.process_normal(&paragraph.text, &mut segments),
            }
        }

        segments
    }

    fn process_normal(&self, text: &str, segments: &mut Vec<Segment>) {
        for sentence in split_sentences(text) {
            if word_count(sentence) > self.max_words {
                segments.extend(
                    split_sentence_by_length(sentence, self.max_words, self.flex_words, &self.stop_words)
                        .into_iter()
                        .map(Segment::Text),
                );
            } else {
                segments.push(Segment::Text(sentence.to_string()));
            }
        }
    }
}

impl Default for ParagraphProcessor {
    fn default() -> Self {
        Self::new(22, 0, StopWords::default())
    }
}
