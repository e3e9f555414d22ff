/*!
 * Timestamp assignment for segmented text.
 *
 * Subtitles are laid end to end starting at zero. Each one is shown for the
 * short duration when it has fewer words than the threshold, otherwise for
 * the base duration. Section breaks are carried through to the track but do
 * not move the clock or consume an index.
 */

use log::debug;
use std::time::Duration;

use crate::app_config::SubtitleConfig;
use crate::formatting::LineFormatter;
use crate::segmentation::Segment;
use crate::subtitle_processor::{SubtitleEntry, SubtitleTrack, Timestamp, TrackItem};

/// Durations applied per subtitle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationPolicy {
    pub base: Duration,
    pub short: Duration,
    /// Subtitles with fewer words than this get `short`
    pub short_word_threshold: usize,
}

impl DurationPolicy {
    pub fn duration_for(&self, word_count: usize) -> Duration {
        if word_count < self.short_word_threshold {
            self.short
        } else {
            self.base
        }
    }
}

impl Default for DurationPolicy {
    fn default() -> Self {
        Self {
            base: Duration::from_secs(10),
            short: Duration::from_secs(5),
            short_word_threshold: 8,
        }
    }
}

impl From<&SubtitleConfig> for DurationPolicy {
    fn from(config: &SubtitleConfig) -> Self {
        Self {
            base: Duration::from_secs(config.base_duration_secs),
            short: Duration::from_secs(config.short_duration_secs),
            short_word_threshold: config.short_word_threshold,
        }
    }
}

/// Running clock of one conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineState {
    pub current_time: Timestamp,
    pub next_index: usize,
    pub pending_section_break: bool,
}

impl Default for TimelineState {
    fn default() -> Self {
        Self {
            current_time: Timestamp::ZERO,
            next_index: 1,
            pending_section_break: false,
        }
    }
}

/// Assigns indices and timestamps to segments in emission order
#[derive(Debug, Clone)]
pub struct TimelineAssigner {
    formatter: LineFormatter,
    durations: DurationPolicy,
    state: TimelineState,
}

impl TimelineAssigner {
    pub fn new(formatter: LineFormatter, durations: DurationPolicy) -> Self {
        Self::with_state(formatter, durations, TimelineState::default())
    }

    /// Resume from an existing state, e.g. to continue a partial track
    pub fn with_state(formatter: LineFormatter, durations: DurationPolicy, state: TimelineState) -> Self {
        Self {
            formatter,
            durations,
            state,
        }
    }

    pub fn state(&self) -> TimelineState {
        self.state
    }

    /// Process one segment, appending whatever it produces to `items`
    pub fn step(&mut self, segment: &Segment, items: &mut Vec<TrackItem>) {
        let text = match segment {
            Segment::SectionBreak => {
                self.state.pending_section_break = true;
                return;
            }
            Segment::Text(text) => text.trim(),
        };

        if text.is_empty() {
            return;
        }

        let block = self.formatter.format_subtitle(text);

        if self.state.pending_section_break {
            items.push(TrackItem::SectionBreak);
            self.state.pending_section_break = false;
        }

        let block = block.trim();
        if block.is_empty() {
            return;
        }

        let word_count = block.split_whitespace().count();
        let start = self.state.current_time;
        let end = start.advance(self.durations.duration_for(word_count));

        items.push(TrackItem::Entry(SubtitleEntry::new(
            self.state.next_index,
            start,
            end,
            block.to_string(),
        )));

        self.state.current_time = end;
        self.state.next_index += 1;
    }

    /// Process every segment and collect the resulting track items
    pub fn assign(&mut self, segments: &[Segment]) -> Vec<TrackItem> {
        let mut items = Vec::with_capacity(segments.len());
        for segment in segments {
            self.step(segment, &mut items);
        }

        debug!(
            "Assigned {} subtitles, timeline ends at {}",
            self.state.next_index - 1,
            self.state.current_time
        );

        items
    }

    /// Build a complete track from segments, rendering breaks with `section_break_lines`
    pub fn build_track(&mut self, segments: &[Segment], section_break_lines: usize) -> SubtitleTrack {
        let mut track = SubtitleTrack::new(section_break_lines);
        track.items = self.assign(segments);
        track
    }
}

impl Default for TimelineAssigner {
    fn default() -> Self {
        Self::new(LineFormatter::default(), DurationPolicy::default())
    }
}
