/*!
 * End-to-end conversion from classified paragraphs to an SRT payload.
 *
 * paragraphs -> `ParagraphProcessor` -> segments -> `TimelineAssigner`
 * (wrapping each segment with `LineFormatter`) -> `SubtitleTrack` -> SRT text
 */

use log::debug;

use crate::app_config::SubtitleConfig;
use crate::document::ClassifiedParagraph;
use crate::formatting::LineFormatter;
use crate::segmentation::{ParagraphProcessor, Segment, StopWords};
use crate::subtitle_processor::SubtitleTrack;
use crate::timeline::{DurationPolicy, TimelineAssigner};

/// Converts documents into subtitle tracks.
///
/// The generator holds only configuration; every call builds a fresh
/// timeline, so one generator can serve any number of conversions.
#[derive(Debug, Clone)]
pub struct SubtitleGenerator {
    settings: SubtitleConfig,
    stop_words: StopWords,
}

impl SubtitleGenerator {
    pub fn new(settings: SubtitleConfig, stop_words: StopWords) -> Self {
        Self { settings, stop_words }
    }

    pub fn settings(&self) -> &SubtitleConfig {
        &self.settings
    }

    /// Segment the paragraphs without assigning times
    pub fn segment(&self, paragraphs: &[ClassifiedParagraph]) -> Vec<Segment> {
        ParagraphProcessor::new(
            self.settings.max_words,
            self.settings.flex_words,
            self.stop_words.clone(),
        )
        .process(paragraphs)
    }

    /// Build the timed subtitle track for the paragraphs
    pub fn generate(&self, paragraphs: &[ClassifiedParagraph]) -> SubtitleTrack {
        let segments = self.segment(paragraphs);
        let formatter = LineFormatter::new(self.settings.max_words_per_line, self.stop_words.clone());
        debug!(
            "{} paragraphs segmented into {} items, wrapping above {} words per line",
            paragraphs.len(),
            segments.len(),
            formatter.max_words_per_line()
        );

        let mut assigner = TimelineAssigner::new(formatter, DurationPolicy::from(&self.settings));
        assigner.build_track(&segments, self.settings.section_break_lines)
    }

    /// Build the track and render it as SRT text
    pub fn generate_srt_content(&self, paragraphs: &[ClassifiedParagraph]) -> String {
        self.generate(paragraphs).to_srt_string()
    }
}

impl Default for SubtitleGenerator {
    fn default() -> Self {
        Self::new(SubtitleConfig::default(), StopWords::default())
    }
}
