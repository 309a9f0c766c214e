//! Error types for the katalog search core
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! The query normalizer and the ensemble ranker themselves never fail:
//! malformed input resolves to well-defined empty/default results. `Error`
//! exists for the boundaries around them — vocabulary configuration loading
//! and the external candidate-store collaborator.

use std::io;
use thiserror::Error;

/// Result type alias for katalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the katalog search core
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (vocabulary file loading)
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// Vocabulary configuration could not be parsed
    #[error("Config error: {0}")]
    ConfigError(String),

    /// A candidate source (external store collaborator) failed
    #[error("Candidate source '{source_name}' failed: {message}")]
    SourceError {
        /// Name of the failing source
        source_name: String,
        /// Underlying failure description
        message: String,
    },
}

impl Error {
    /// Build a `SourceError` from a source name and any displayable cause
    pub fn source_error(source_name: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        Error::SourceError {
            source_name: source_name.into(),
            message: cause.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_io() {
        let err = Error::IoError(io::Error::new(io::ErrorKind::NotFound, "file not found"));
        let msg = err.to_string();
        assert!(msg.contains("I/O error"));
    }

    #[test]
    fn test_error_display_config() {
        let err = Error::ConfigError("missing stopwords table".to_string());
        let msg = err.to_string();
        assert!(msg.contains("Config error"));
        assert!(msg.contains("missing stopwords table"));
    }

    #[test]
    fn test_error_display_source() {
        let err = Error::source_error("fulltext", "connection refused");
        let msg = err.to_string();
        assert!(msg.contains("fulltext"));
        assert!(msg.contains("connection refused"));
    }
}
