use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::default::Default;

use crate::errors::ConfigError;
use crate::segmentation::StopWords;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Segmentation, wrapping and timing settings
    #[serde(default)]
    pub subtitle: SubtitleConfig,

    /// Plain-text document reading settings
    #[serde(default)]
    pub document: DocumentConfig,

    /// Words that should not end a segment or a display line
    #[serde(default = "default_stop_words")]
    pub stop_words: Vec<String>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Settings driving segmentation, line wrapping and the timeline
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SubtitleConfig {
    /// Seconds shown for a subtitle with at least `short_word_threshold` words
    #[serde(default = "default_base_duration_secs")]
    pub base_duration_secs: u64,

    /// Seconds shown for a subtitle under `short_word_threshold` words
    #[serde(default = "default_short_duration_secs")]
    pub short_duration_secs: u64,

    /// Word count below which the short duration applies
    #[serde(default = "default_short_word_threshold")]
    pub short_word_threshold: usize,

    /// Sentences longer than this many words get split
    #[serde(default = "default_max_words")]
    pub max_words: usize,

    /// Tolerance above `max_words` before a split is forced
    #[serde(default)]
    pub flex_words: usize,

    /// Words per display line before a subtitle wraps onto two lines
    #[serde(default = "default_max_words_per_line")]
    pub max_words_per_line: usize,

    /// Blank lines rendered where a new part starts
    #[serde(default = "default_section_break_lines")]
    pub section_break_lines: usize,
}

impl Default for SubtitleConfig {
    fn default() -> Self {
        Self {
            base_duration_secs: default_base_duration_secs(),
            short_duration_secs: default_short_duration_secs(),
            short_word_threshold: default_short_word_threshold(),
            max_words: default_max_words(),
            flex_words: 0,
            max_words_per_line: default_max_words_per_line(),
            section_break_lines: default_section_break_lines(),
        }
    }
}

/// Settings for turning a plain-text file into classified paragraphs
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DocumentConfig {
    /// Number of leading paragraphs (title block) to ignore
    #[serde(default = "default_skip_leading_paragraphs")]
    pub skip_leading_paragraphs: usize,

    /// Paragraphs containing this keyword (case-insensitive) are headings
    #[serde(default = "default_heading_keyword")]
    pub heading_keyword: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            skip_leading_paragraphs: default_skip_leading_paragraphs(),
            heading_keyword: default_heading_keyword(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Map to the `log` crate filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_base_duration_secs() -> u64 {
    10
}

fn default_short_duration_secs() -> u64 {
    5
}

fn default_short_word_threshold() -> usize {
    8
}

fn default_max_words() -> usize {
    22
}

fn default_max_words_per_line() -> usize {
    10
}

fn default_section_break_lines() -> usize {
    5
}

fn default_skip_leading_paragraphs() -> usize {
    2
}

fn default_heading_keyword() -> String {
    "PART".to_string()
}

fn default_stop_words() -> Vec<String> {
    crate::segmentation::DEFAULT_STOP_WORDS
        .iter()
        .map(|w| w.to_string())
        .collect()
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        let subtitle = &self.subtitle;

        if subtitle.max_words == 0 {
            return Err(invalid("max_words", "must be at least 1").into());
        }
        if subtitle.max_words_per_line == 0 {
            return Err(invalid("max_words_per_line", "must be at least 1").into());
        }
        if subtitle.base_duration_secs == 0 {
            return Err(invalid("base_duration_secs", "must be greater than zero").into());
        }
        if subtitle.short_duration_secs == 0 {
            return Err(invalid("short_duration_secs", "must be greater than zero").into());
        }
        if subtitle.short_word_threshold == 0 {
            return Err(invalid("short_word_threshold", "must be at least 1").into());
        }
        if self.document.heading_keyword.trim().is_empty() {
            return Err(invalid("heading_keyword", "must not be empty").into());
        }

        Ok(())
    }

    /// Build the stop word set used by the splitters and the line formatter
    pub fn stop_words(&self) -> StopWords {
        StopWords::new(self.stop_words.iter().map(String::as_str))
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field,
        reason: reason.to_string(),
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            subtitle: SubtitleConfig::default(),
            document: DocumentConfig::default(),
            stop_words: default_stop_words(),
            log_level: LogLevel::default(),
        }
    }
}
