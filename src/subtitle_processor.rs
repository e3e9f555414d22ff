use anyhow::{anyhow, Context, Result};
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

// @module: Subtitle track model and SRT rendering

// @struct: Offset from the start of the track, millisecond precision
//
// Arithmetic saturates at `u64::MAX` milliseconds. Hours are never wrapped,
// so past 99 hours the hours field renders with more than two digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(u64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0);

    pub fn from_millis(ms: u64) -> Self {
        Timestamp(ms)
    }

    pub fn from_secs(secs: u64) -> Self {
        Timestamp(secs.saturating_mul(1_000))
    }

    pub fn as_millis(&self) -> u64 {
        self.0
    }

    /// Move the timestamp forward by `duration`
    pub fn advance(self, duration: Duration) -> Self {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        Timestamp(self.0.saturating_add(millis))
    }

    /// Time elapsed since `earlier`, zero if `earlier` is later
    pub fn duration_since(&self, earlier: Timestamp) -> Duration {
        Duration::from_millis(self.0.saturating_sub(earlier.0))
    }

    /// Parse an SRT timestamp (`HH:MM:SS,mmm`, `.` also accepted before millis)
    pub fn parse(timestamp: &str) -> Result<Self> {
        let parts: Vec<&str> = timestamp.trim().split(&[':', ',', '.'][..]).collect();

        if parts.len() != 4 {
            return Err(anyhow!("Invalid timestamp format: {}", timestamp));
        }

        let hours: u64 = parts[0].parse().context("Failed to parse hours")?;
        let minutes: u64 = parts[1].parse().context("Failed to parse minutes")?;
        let seconds: u64 = parts[2].parse().context("Failed to parse seconds")?;
        let millis: u64 = parts[3].parse().context("Failed to parse milliseconds")?;

        if minutes >= 60 || seconds >= 60 || millis >= 1000 {
            return Err(anyhow!("Invalid time components in timestamp: {}", timestamp));
        }

        let total = hours
            .checked_mul(3_600_000)
            .and_then(|ms| ms.checked_add(minutes * 60_000 + seconds * 1_000 + millis))
            .ok_or_else(|| anyhow!("Timestamp out of range: {}", timestamp))?;

        Ok(Timestamp(total))
    }
}

impl fmt::Display for Timestamp {
    /// Format as `HH:MM:SS,mmm`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ms = self.0;
        let hours = ms / 3_600_000;
        let minutes = (ms % 3_600_000) / 60_000;
        let seconds = (ms % 60_000) / 1_000;
        let millis = ms % 1_000;

        write!(f, "{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
    }
}

// @struct: Single subtitle entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleEntry {
    // @field: 1-based position among entries
    pub index: usize,

    pub start: Timestamp,

    pub end: Timestamp,

    // @field: One line, or two joined by '\n'
    pub text: String,
}

impl SubtitleEntry {
    pub fn new(index: usize, start: Timestamp, end: Timestamp, text: String) -> Self {
        SubtitleEntry {
            index,
            start,
            end,
            text,
        }
    }

    pub fn duration(&self) -> Duration {
        self.end.duration_since(self.start)
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

impl fmt::Display for SubtitleEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.index)?;
        writeln!(f, "{} --> {}", self.start, self.end)?;
        writeln!(f, "{}", self.text)?;
        writeln!(f)
    }
}

/// One item of a rendered track
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackItem {
    /// Visual separator between parts; consumes no index and no time
    SectionBreak,
    Entry(SubtitleEntry),
}

/// Ordered subtitle entries interleaved with section breaks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleTrack {
    /// Entries and breaks in output order
    pub items: Vec<TrackItem>,

    /// Blank lines written for each section break
    pub section_break_lines: usize,
}

impl SubtitleTrack {
    pub fn new(section_break_lines: usize) -> Self {
        SubtitleTrack {
            items: Vec::new(),
            section_break_lines,
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &SubtitleEntry> {
        self.items.iter().filter_map(|item| match item {
            TrackItem::Entry(entry) => Some(entry),
            TrackItem::SectionBreak => None,
        })
    }

    pub fn entry_count(&self) -> usize {
        self.entries().count()
    }

    pub fn section_break_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item, TrackItem::SectionBreak))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Render the track as SRT text
    pub fn to_srt_string(&self) -> String {
        let separator = "\n".repeat(self.section_break_lines);
        let mut output = String::new();

        for item in &self.items {
            match item {
                TrackItem::SectionBreak => output.push_str(&separator),
                TrackItem::Entry(entry) => output.push_str(&entry.to_string()),
            }
        }

        output
    }

    /// Write subtitles to an SRT file
    pub fn write_to_srt<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let mut file = File::create(path)
            .with_context(|| format!("Failed to create subtitle file: {}", path.display()))?;

        file.write_all(self.to_srt_string().as_bytes())
            .with_context(|| format!("Failed to write subtitle file: {}", path.display()))?;

        Ok(())
    }
}

impl fmt::Display for SubtitleTrack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Subtitle Track")?;
        writeln!(f, "Entries: {}", self.entry_count())?;
        writeln!(f, "Section breaks: {}", self.section_break_count())?;
        if let Some(last) = self.entries().last() {
            writeln!(f, "Runtime: {}", last.end)?;
        }
        Ok(())
    }
}
