//! Error handling types for codesniff
//!
//! Classification itself is total and never fails. These errors cover
//! building signature tables, loading configuration and reading input.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for everything around the classifier
#[derive(Debug, Error)]
pub enum SniffError {
    /// A structural pattern failed to compile
    #[error("Invalid pattern {pattern:?} for language {language}: {source}")]
    InvalidPattern {
        language: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Empty keywords would match at every position
    #[error("Empty keyword in language: {language}")]
    EmptyKeyword { language: String },

    /// Language id is empty or collides with the plain-text sentinel
    #[error("Invalid language id: {language:?}")]
    InvalidLanguageId { language: String },

    /// Two signatures in one table share an id
    #[error("Duplicate language id: {language}")]
    DuplicateLanguage { language: String },

    /// Input rejected by the configured size ceiling
    #[error("Input is {actual} bytes, limit is {limit} bytes")]
    InputTooLarge { limit: usize, actual: usize },

    /// Configuration file could not be read
    #[error("Failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be parsed
    #[error("Invalid configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Result could not be rendered as JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for codesniff operations
pub type SniffResult<T> = Result<T, SniffError>;

/// Helper functions for common error patterns
impl SniffError {
    /// Create an invalid pattern error
    pub fn invalid_pattern(
        language: impl Into<String>,
        pattern: impl Into<String>,
        source: regex::Error,
    ) -> Self {
        SniffError::InvalidPattern {
            language: language.into(),
            pattern: pattern.into(),
            source,
        }
    }

    /// Create a duplicate language error
    pub fn duplicate_language(language: impl Into<String>) -> Self {
        SniffError::DuplicateLanguage {
            language: language.into(),
        }
    }

    /// Create an input-too-large error
    pub fn input_too_large(limit: usize, actual: usize) -> Self {
        SniffError::InputTooLarge { limit, actual }
    }
}
