/*!
 * Tests for error types and conversions
 */

use docsrt::errors::{AppError, ConfigError, DocumentError};

#[test]
fn test_documentError_unknownKind_shouldDisplayKindAndPosition() {
    let error = DocumentError::UnknownKind {
        kind: "caption".to_string(),
        position: 3,
    };
    let display = format!("{}", error);
    assert!(display.contains("caption"));
    assert!(display.contains("3"));
}

#[test]
fn test_configError_invalidValue_shouldDisplayField() {
    let error = ConfigError::InvalidValue {
        field: "max_words",
        reason: "must be at least 1".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("max_words"));
    assert!(display.contains("must be at least 1"));
}

#[test]
fn test_appError_fromDocumentError_shouldWrapCorrectly() {
    let app_error: AppError = DocumentError::Empty.into();
    let display = format!("{}", app_error);
    assert!(display.contains("Document error"));
    assert!(display.contains("no paragraphs"));
}

#[test]
fn test_appError_fromIoError_shouldWrapAsFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
    let app_error: AppError = io_error.into();
    let display = format!("{}", app_error);
    assert!(display.contains("File error"));
    assert!(display.contains("File not found"));
}

#[test]
fn test_appError_fromAnyhow_shouldWrapAsUnknown() {
    let app_error: AppError = anyhow::anyhow!("something odd").into();
    assert!(matches!(app_error, AppError::Unknown(ref msg) if msg == "something odd"));
}
