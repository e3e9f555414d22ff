/*!
 * Shared cut-point heuristic.
 *
 * Both the sentence length splitter and the display line formatter cut a word
 * list near its middle while keeping a stop word from ending the first half.
 * They differ in bookkeeping, selected by `CutStrategy`.
 */

use log::warn;

use super::stop_words::StopWords;

/// How the cut point is searched for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutStrategy {
    /// Start at `n / 2` and walk backward over trailing stop words. A walk that
    /// reaches index 0 falls back to the raw midpoint.
    BalancedSegment,
    /// Start at `(n + 1) / 2`, step forward once past a trailing stop word and
    /// clamp to `n - 1` so the second line is never empty.
    DisplayLine,
}

/// Choose the index at which `words` is cut into `words[..i]` and `words[i..]`.
///
/// For any list of two or more words the result lies in `1..words.len()`,
/// so both halves are non-empty.
pub fn choose_cut_point(words: &[&str], avoid: &StopWords, strategy: CutStrategy) -> usize {
    let n = words.len();
    if n < 2 {
        return n;
    }

    match strategy {
        CutStrategy::BalancedSegment => {
            let midpoint = n / 2;
            let mut cut = midpoint;
            while cut > 0 && avoid.contains(words[cut - 1]) {
                cut -= 1;
            }
            if cut == 0 || cut == n {
                warn!("No stop-word-free cut in {} words, using midpoint {}", n, midpoint);
                cut = midpoint;
            }
            cut
        }
        CutStrategy::DisplayLine => {
            let mut cut = n.div_ceil(2);
            if avoid.contains(words[cut - 1]) && cut < n {
                cut += 1;
            }
            cut.min(n - 1)
        }
    }
}
