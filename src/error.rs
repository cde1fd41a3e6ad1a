//! Error types for code name generation
//!
//! Every failure in the library surfaces as a [`CodeNameError`]. None of them
//! are retryable: the binary reports the diagnostic and exits non-zero.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for code name operations
pub type CodeNameResult<T> = Result<T, CodeNameError>;

/// Code name generation error types
#[derive(Debug, Error)]
pub enum CodeNameError {
    /// A configured directory or word source file does not exist
    #[error("{what} {path:?} does not exist")]
    ResourceNotFound { what: &'static str, path: PathBuf },

    /// A word book with no words was selected from
    #[error("word book '{word_book}' has no words to choose from")]
    EmptyCollection { word_book: String },

    /// A required configuration value was not provided by any layer
    #[error("configuration value '{key}' is missing")]
    ConfigurationMissing { key: &'static str },

    /// The name to shorten is empty but the target length is not
    #[error("cannot grow an empty name to {target} characters")]
    EmptyInput { target: usize },

    /// Reading a word source failed for a reason other than absence
    #[error("failed to read {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CodeNameError {
    /// Classify an I/O failure on `path`, mapping absence to `ResourceNotFound`.
    pub fn from_io(what: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            CodeNameError::ResourceNotFound { what, path }
        } else {
            CodeNameError::Io { path, source }
        }
    }

    /// Get the error category for log fields
    pub fn category(&self) -> &'static str {
        match self {
            CodeNameError::ResourceNotFound { .. } => "resource_not_found",
            CodeNameError::EmptyCollection { .. } => "empty_collection",
            CodeNameError::ConfigurationMissing { .. } => "configuration_missing",
            CodeNameError::EmptyInput { .. } => "empty_input",
            CodeNameError::Io { .. } => "io_error",
        }
    }
}
