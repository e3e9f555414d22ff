/*!
 * Timecode validation for generated subtitle tracks.
 *
 * A generated track must satisfy:
 * - Indices run 1..N without gaps
 * - Every entry has start <= end
 * - Each entry starts exactly where the previous one ended
 *
 * Section breaks are ignored; they carry no time.
 */

use log::debug;

use crate::subtitle_processor::{SubtitleEntry, SubtitleTrack, Timestamp};

/// Types of timecode issues
#[derive(Debug, Clone, PartialEq)]
pub enum TimecodeIssue {
    /// End time is before start time
    InvalidTimeRange { index: usize, start: Timestamp, end: Timestamp },
    /// Index is not the previous index plus one
    NonContiguousIndex { expected: usize, found: usize },
    /// Overlaps with the previous entry
    OverlapsWithPrevious { index: usize, overlap_ms: u64 },
    /// Starts after the previous entry ended
    GapAfterPrevious { index: usize, gap_ms: u64 },
}

impl std::fmt::Display for TimecodeIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimecodeIssue::InvalidTimeRange { index, start, end } => {
                write!(f, "Entry {}: end {} is before start {}", index, end, start)
            }
            TimecodeIssue::NonContiguousIndex { expected, found } => {
                write!(f, "Expected index {}, found {}", expected, found)
            }
            TimecodeIssue::OverlapsWithPrevious { index, overlap_ms } => {
                write!(f, "Entry {} overlaps the previous entry by {}ms", index, overlap_ms)
            }
            TimecodeIssue::GapAfterPrevious { index, gap_ms } => {
                write!(f, "Entry {} starts {}ms after the previous entry ended", index, gap_ms)
            }
        }
    }
}

/// Result of validating a whole track
#[derive(Debug, Clone)]
pub struct TimecodeValidationResult {
    /// Overall pass/fail status
    pub passed: bool,
    /// Number of entries checked
    pub entry_count: usize,
    /// Issues in track order
    pub issues: Vec<TimecodeIssue>,
}

/// Timecode validator for generated tracks
#[derive(Debug, Default)]
pub struct TimecodeValidator;

impl TimecodeValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate a single subtitle entry
    pub fn validate_entry(&self, entry: &SubtitleEntry) -> Option<TimecodeIssue> {
        if entry.end < entry.start {
            return Some(TimecodeIssue::InvalidTimeRange {
                index: entry.index,
                start: entry.start,
                end: entry.end,
            });
        }
        None
    }

    /// Validate every entry of a track and the links between consecutive ones
    pub fn validate_track(&self, track: &SubtitleTrack) -> TimecodeValidationResult {
        let mut issues = Vec::new();
        let mut previous: Option<&SubtitleEntry> = None;
        let mut entry_count = 0;

        for entry in track.entries() {
            entry_count += 1;

            if entry.index != entry_count {
                issues.push(TimecodeIssue::NonContiguousIndex {
                    expected: entry_count,
                    found: entry.index,
                });
            }

            if let Some(issue) = self.validate_entry(entry) {
                issues.push(issue);
            }

            if let Some(prev) = previous {
                let prev_end = prev.end.as_millis();
                let start = entry.start.as_millis();
                if start < prev_end {
                    issues.push(TimecodeIssue::OverlapsWithPrevious {
                        index: entry.index,
                        overlap_ms: prev_end - start,
                    });
                } else if start > prev_end {
                    issues.push(TimecodeIssue::GapAfterPrevious {
                        index: entry.index,
                        gap_ms: start - prev_end,
                    });
                }
            }

            previous = Some(entry);
        }

        debug!("Timecode validation: {} entries, {} issues", entry_count, issues.len());

        TimecodeValidationResult {
            passed: issues.is_empty(),
            entry_count,
            issues,
        }
    }
}
