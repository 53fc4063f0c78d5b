//! Error types for the flashcard session
//!
//! Provides structured error handling with context and proper error chains.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the flashcard application
#[derive(Error, Debug)]
pub enum FlashcardError {
    /// The line source ran dry while a line was still expected
    #[error("Input ended while waiting for a line")]
    EndOfInput,

    /// File system operation errors
    #[error("File system error: {operation} failed on {path}")]
    FileSystem {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A card file did not follow the three-lines-per-card layout
    #[error("Card file error in {path} at line {line}: {message}")]
    CardFile {
        message: String,
        path: PathBuf,
        line: usize,
    },

    /// The quiz count could not be read as an integer
    #[error("Invalid quiz count: {input:?}")]
    InvalidCount { input: String },

    /// Writing to the console failed
    #[error("Console output failed")]
    Output {
        #[source]
        source: std::io::Error,
    },
}

impl FlashcardError {
    /// Create a new file system error
    pub fn file_system<P: Into<PathBuf>>(
        operation: impl Into<String>,
        path: P,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a new card file error; `line` is 1-based
    pub fn card_file<P: Into<PathBuf>>(message: impl Into<String>, path: P, line: usize) -> Self {
        Self::CardFile {
            message: message.into(),
            path: path.into(),
            line,
        }
    }

    pub fn invalid_count(input: impl Into<String>) -> Self {
        Self::InvalidCount {
            input: input.into(),
        }
    }

    pub fn output(source: std::io::Error) -> Self {
        Self::Output { source }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, FlashcardError>;
