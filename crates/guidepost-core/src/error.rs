//! Error types for the guide library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all guide operations.
#[derive(Error, Debug)]
pub enum GuideError {
    /// Step not found for the given ID
    #[error("Step with ID '{id}' not found")]
    StepNotFound { id: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Catalog parse errors
    #[error("Catalog error: {message}")]
    Catalog {
        message: String,
        #[source]
        source: serde_json::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl GuideError {
    /// Creates a step-not-found error for an unknown step ID.
    pub fn step_not_found(id: impl Into<String>) -> Self {
        GuideError::StepNotFound { id: id.into() }
    }

    /// Creates an input validation error for a field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        GuideError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a catalog error with parse context.
    pub fn catalog(message: impl Into<String>, source: serde_json::Error) -> Self {
        GuideError::Catalog {
            message: message.into(),
            source,
        }
    }
}

/// Result type alias for guide operations
pub type Result<T> = std::result::Result<T, GuideError>;
