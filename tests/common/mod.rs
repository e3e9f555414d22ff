/*!
 * Common test utilities for the docsrt test suite
 */

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use docsrt::{ClassifiedParagraph, SubtitleEntry, SubtitleTrack};

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample JSON document for testing
pub fn create_test_document(dir: &Path, filename: &str) -> Result<PathBuf> {
    let content = r#"[
    {"kind": "heading", "text": "PART I: THE BEGINNING"},
    {"kind": "normal", "text": "It was a quiet morning. The village had not yet woken up, and the only sound was the river running past the old mill at the edge of town."},
    {"kind": "heading", "text": "Chapter One"},
    {"kind": "heading", "text": "PART II: THE JOURNEY"},
    {"kind": "normal", "text": "They left at dawn."}
]"#;
    create_test_file(dir, filename, content)
}

/// A sentence of `count` distinct words `w1 w2 ...`
pub fn numbered_words(count: usize) -> String {
    (1..=count).map(|i| format!("w{}", i)).collect::<Vec<_>>().join(" ")
}

/// All words of the normal paragraphs, in order
pub fn prose_words(paragraphs: &[ClassifiedParagraph]) -> Vec<String> {
    paragraphs
        .iter()
        .filter(|p| p.kind == docsrt::ParagraphKind::Normal)
        .flat_map(|p| p.text.split_whitespace().map(str::to_string).collect::<Vec<_>>())
        .collect()
}

/// All words of the generated subtitles, in order
pub fn track_words(track: &SubtitleTrack) -> Vec<String> {
    track
        .entries()
        .flat_map(|e: &SubtitleEntry| e.text.split_whitespace().map(str::to_string).collect::<Vec<_>>())
        .collect()
}
