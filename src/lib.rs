/*!
 * # docsrt - document to subtitle track conversion
 *
 * A Rust library for turning a structured document (paragraphs, some of them
 * part headings) into a timed SRT subtitle track.
 *
 * ## Features
 *
 * - Sentence splitting on terminal punctuation
 * - Recursive length-balanced splitting of long sentences
 * - Two-line display wrapping that avoids dangling stop words
 * - Word-count driven subtitle durations laid end to end
 * - Section separators for "PART <roman>: <title>" headings
 * - JSON and plain-text paragraph input
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `document`: Classified paragraph input
 * - `segmentation`: Sentence and length splitting:
 *   - `segmentation::sentences`: Sentence boundaries
 *   - `segmentation::length`: Word-count bounded splitting
 *   - `segmentation::paragraphs`: Paragraph walk and section breaks
 *   - `segmentation::cut_point`: Shared cut-point heuristic
 * - `formatting`: Display line wrapping
 * - `timeline`: Index and timestamp assignment
 * - `subtitle_processor`: Subtitle track model and SRT rendering
 * - `pipeline`: End-to-end generator
 * - `validation`: Generated track checks
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod document;
pub mod errors;
pub mod file_utils;
pub mod formatting;
pub mod pipeline;
pub mod segmentation;
pub mod subtitle_processor;
pub mod timeline;
pub mod validation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use document::{ClassifiedParagraph, ParagraphKind};
pub use errors::{AppError, ConfigError, DocumentError};
pub use pipeline::SubtitleGenerator;
pub use segmentation::Segment;
pub use subtitle_processor::{SubtitleEntry, SubtitleTrack, Timestamp, TrackItem};
pub use timeline::{TimelineAssigner, TimelineState};
