/*!
 * Error types for the docsrt application.
 *
 * The segmentation and timing pipeline itself never fails; these types cover
 * the shell around it: reading input documents, validating configuration and
 * writing output files. They use the thiserror crate for ergonomic definitions.
 */

use thiserror::Error;

/// Errors that can occur while reading a classified paragraph document
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The JSON document could not be parsed
    #[error("Invalid JSON document: {0}")]
    InvalidJson(String),

    /// A paragraph declared a kind other than heading/normal
    #[error("Unknown paragraph kind '{kind}' at paragraph {position}")]
    UnknownKind {
        /// Kind string found in the document
        kind: String,
        /// Zero-based paragraph position
        position: usize,
    },

    /// The document contains no paragraphs at all
    #[error("Document contains no paragraphs")]
    Empty,
}

/// Errors raised by configuration validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A configuration field holds a value the pipeline cannot work with
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue {
        /// Name of the offending field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from document reading
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// Error from configuration validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
