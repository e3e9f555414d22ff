use log::debug;

use super::cut_point::{choose_cut_point, CutStrategy};
use super::stop_words::StopWords;

/// Split an over-long sentence into word-count bounded segments.
///
/// Sentences with at most `max_length + flex_length` words come back unchanged.
/// Longer ones are cut near the middle (never right after a stop word when
/// avoidable) and the second half is split again while it still exceeds
/// `max_length`. The first half of a cut is final. Words are rejoined with
/// single spaces and otherwise untouched.
pub fn split_sentence_by_length(
    sentence: &str,
    max_length: usize,
    flex_length: usize,
    avoid: &StopWords,
) -> Vec<String> {
    let words: Vec<&str> = sentence.split_whitespace().collect();

    if words.len() <= max_length + flex_length || words.len() < 2 {
        return vec![sentence.to_string()];
    }

    let split_index = choose_cut_point(&words, avoid, CutStrategy::BalancedSegment);
    let first_half = words[..split_index].join(" ");
    let second_half = words[split_index..].join(" ");

    debug!(
        "Split {}-word sentence at word {} (limit {}+{})",
        words.len(),
        split_index,
        max_length,
        flex_length
    );

    if words.len() - split_index > max_length {
        let mut parts = vec![first_half];
        parts.extend(split_sentence_by_length(&second_half, max_length, flex_length, avoid));
        parts
    } else {
        vec![first_half, second_half]
    }
}
