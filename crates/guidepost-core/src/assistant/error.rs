//! Assistant collaborator error types.
//!
//! These errors never cross the gateway boundary: every failure is absorbed
//! into a fixed fallback answer or an empty search result before the host
//! sees it.

use thiserror::Error;

/// Errors that can occur while talking to the text-generation collaborator.
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Collaborator returned an empty response")]
    EmptyResponse,
}

impl AssistantError {
    /// Check if this error is worth retrying at the transport layer.
    pub fn is_retryable(&self) -> bool {
        match self {
            AssistantError::Network(_) => true,
            AssistantError::Api { status, .. } => is_retryable_status(*status),
            AssistantError::Json(_) | AssistantError::EmptyResponse => false,
        }
    }
}

/// Check if an HTTP status code is retryable
pub(crate) fn is_retryable_status(status: u16) -> bool {
    matches!(status, 408 | 429 | 500 | 502 | 503 | 504)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_statuses() {
        assert!(is_retryable_status(429));
        assert!(is_retryable_status(500));
        assert!(is_retryable_status(503));
        assert!(!is_retryable_status(400));
        assert!(!is_retryable_status(401));
        assert!(!is_retryable_status(404));
    }

    #[test]
    fn test_api_error_retryability() {
        let transient = AssistantError::Api {
            status: 503,
            message: "overloaded".to_string(),
        };
        assert!(transient.is_retryable());

        let permanent = AssistantError::Api {
            status: 400,
            message: "bad request".to_string(),
        };
        assert!(!permanent.is_retryable());

        assert!(!AssistantError::EmptyResponse.is_retryable());
    }
}
