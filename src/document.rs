/*!
 * Classified paragraph input.
 *
 * The pipeline consumes an ordered sequence of `(kind, text)` paragraphs.
 * Extraction from word-processor containers happens elsewhere; this module
 * reads the two already-extracted forms the tool accepts:
 * - a JSON array of `{"kind": "heading"|"normal", "text": "..."}` objects
 * - plain text with one paragraph per line
 */

use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::app_config::DocumentConfig;
use crate::errors::DocumentError;

// @enum: Paragraph classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParagraphKind {
    Heading,
    Normal,
}

// @struct: One paragraph of the source document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedParagraph {
    pub kind: ParagraphKind,
    pub text: String,
}

impl ClassifiedParagraph {
    pub fn heading(text: impl Into<String>) -> Self {
        Self {
            kind: ParagraphKind::Heading,
            text: text.into(),
        }
    }

    pub fn normal(text: impl Into<String>) -> Self {
        Self {
            kind: ParagraphKind::Normal,
            text: text.into(),
        }
    }
}

#[derive(Deserialize)]
struct RawParagraph {
    kind: String,
    #[serde(default)]
    text: String,
}

/// Input document format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    PlainText,
}

impl DocumentFormat {
    /// Pick the format from a file extension; anything but `.json` is plain text
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::PlainText,
        }
    }
}

/// Turns document text into classified paragraphs
pub struct DocumentReader {
    config: DocumentConfig,
}

impl DocumentReader {
    pub fn new(config: DocumentConfig) -> Self {
        Self { config }
    }

    /// Parse `content` in the given format
    pub fn read(&self, content: &str, format: DocumentFormat) -> Result<Vec<ClassifiedParagraph>, DocumentError> {
        match format {
            DocumentFormat::Json => Self::read_json(content),
            DocumentFormat::PlainText => Ok(self.read_plain_text(content)),
        }
    }

    /// Parse a JSON array of classified paragraphs
    pub fn read_json(content: &str) -> Result<Vec<ClassifiedParagraph>, DocumentError> {
        let raw: Vec<RawParagraph> =
            serde_json::from_str(content).map_err(|e| DocumentError::InvalidJson(e.to_string()))?;

        if raw.is_empty() {
            return Err(DocumentError::Empty);
        }

        raw.into_iter()
            .enumerate()
            .map(|(position, paragraph)| {
                let kind = match paragraph.kind.to_lowercase().as_str() {
                    "heading" => ParagraphKind::Heading,
                    "normal" => ParagraphKind::Normal,
                    _ => {
                        return Err(DocumentError::UnknownKind {
                            kind: paragraph.kind,
                            position,
                        })
                    }
                };
                Ok(ClassifiedParagraph {
                    kind,
                    text: paragraph.text,
                })
            })
            .collect()
    }

    /// Classify plain text, one paragraph per line.
    ///
    /// The first `skip_leading_paragraphs` lines are the title block and are
    /// ignored. A line whose upper-cased text contains the heading keyword is
    /// a heading; every other line, blank ones included, is normal.
    pub fn read_plain_text(&self, content: &str) -> Vec<ClassifiedParagraph> {
        let keyword = self.config.heading_keyword.to_uppercase();

        let paragraphs: Vec<ClassifiedParagraph> = content
            .lines()
            .skip(self.config.skip_leading_paragraphs)
            .map(|line| {
                if line.to_uppercase().contains(&keyword) {
                    ClassifiedParagraph::heading(line)
                } else {
                    ClassifiedParagraph::normal(line)
                }
            })
            .collect();

        debug!(
            "Read {} paragraphs ({} headings) from plain text",
            paragraphs.len(),
            paragraphs.iter().filter(|p| p.kind == ParagraphKind::Heading).count()
        );

        paragraphs
    }
}

impl Default for DocumentReader {
    fn default() -> Self {
        Self::new(DocumentConfig::default())
    }
}
