/*!
 * Text segmentation for subtitle generation.
 *
 * Turns classified paragraphs into an ordered stream of text segments and
 * section breaks:
 * - `sentences`: punctuation-boundary sentence splitting
 * - `length`: recursive word-count bounded splitting of long sentences
 * - `paragraphs`: walks the paragraph sequence and emits segments
 * - `cut_point`: the shared "where to cut" heuristic
 * - `stop_words`: the low-information words a cut must not strand
 */

pub mod cut_point;
pub mod length;
pub mod paragraphs;
pub mod sentences;
pub mod stop_words;

pub use cut_point::{choose_cut_point, CutStrategy};
pub use length::split_sentence_by_length;
pub use paragraphs::{is_part_heading, ParagraphProcessor, Segment};
pub use sentences::split_sentences;
pub use stop_words::{StopWords, DEFAULT_STOP_WORDS};

/// Count whitespace-delimited words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
