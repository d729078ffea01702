//! I/O error types

use thiserror::Error;

/// Errors that can occur during persistence and export
#[derive(Debug, Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to read file: {0}")]
    ReadFailed(String),

    #[error("Failed to write file: {0}")]
    WriteFailed(String),

    #[error("Invalid library format: {0}")]
    InvalidFormat(String),

    #[error("CSV error: {0}")]
    Csv(String),
}

/// Result type for persistence and export operations
pub type IoResult<T> = Result<T, IoError>;
