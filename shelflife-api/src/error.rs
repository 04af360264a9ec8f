//! Error taxonomy for the backend boundary.
//!
//! Validation problems never reach this module; they are caught by
//! [`PredictionForm::validate`](crate::form::PredictionForm::validate)
//! before a request is built.

use thiserror::Error;

/// Failure of a single HTTP request against the ShelfLife backend
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Connection or protocol failure before a response arrived
    #[error("request failed: {0}")]
    Transport(String),

    /// The request exceeded the configured time ceiling
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// The backend answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body did not match the expected shape
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a reqwest error, attributing timeouts to the configured ceiling
    pub fn from_reqwest(err: reqwest::Error, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            ApiError::Timeout(timeout_secs)
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::Status {
            status: 503,
            body: "service unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503: service unavailable");

        let err = ApiError::Timeout(30);
        assert_eq!(err.to_string(), "request timed out after 30s");
    }
}
