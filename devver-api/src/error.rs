//! API client errors and retry classification.
//!
//! The request layer classifies failures and forwards them; it never recovers
//! on its own. Retry policy lives with callers (see [`crate::retry`]), which
//! use [`ApiError::is_retryable`] to avoid hammering resources they
//! structurally cannot access.

use thiserror::Error;

/// Substrings that mark an authorization or existence failure when the
/// numeric status has been wrapped away by an upstream proxy.
const NON_RETRYABLE_MARKERS: [&str; 3] = ["Unauthorized", "Forbidden", "Not Found"];

/// Devver API client errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The exchange could not complete (offline, DNS, connection reset).
    /// Carries no HTTP status.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-2xx status. The message is the best-effort
    /// response body text.
    #[error("API error ({status}): {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Error message from the API.
        message: String,
    },

    /// A request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    /// A 2xx response whose body does not match the expected shape. A
    /// contract error, not a transient one.
    #[error("invalid API response: {0}")]
    Decode(String),
}

impl ApiError {
    /// The HTTP status code, when the failure carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether a caller's generic retry policy should attempt this again.
    ///
    /// Authorization and existence failures (401, 403, 404) are not
    /// retryable: repeating the call against a resource the caller cannot
    /// access only produces noise. Decode and encode failures are contract
    /// errors and retrying cannot fix them. Everything else (transport
    /// failures, 5xx, other statuses) is fair game for retry.
    ///
    /// Classification is by numeric status; the textual markers are a
    /// fallback for upstreams that wrap the real status inside the message.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Transport(_) => true,
            ApiError::Encode(_) | ApiError::Decode(_) => false,
            ApiError::Status { status, message } => {
                if matches!(*status, 401 | 403 | 404) {
                    return false;
                }
                !NON_RETRYABLE_MARKERS.iter().any(|m| message.contains(m))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_error(status: u16, message: &str) -> ApiError {
        ApiError::Status {
            status,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_auth_and_existence_statuses_not_retryable() {
        for status in [401, 403, 404] {
            assert!(!status_error(status, "").is_retryable(), "status {status}");
        }
    }

    #[test]
    fn test_server_errors_retryable() {
        assert!(status_error(500, "Internal Server Error").is_retryable());
        assert!(status_error(502, "Bad Gateway").is_retryable());
        assert!(status_error(429, "slow down").is_retryable());
    }

    #[test]
    fn test_textual_fallback_not_retryable() {
        // Upstream wrapped the real status into the message text.
        assert!(!status_error(502, "upstream said: Not Found").is_retryable());
        assert!(!status_error(400, "Unauthorized").is_retryable());
        assert!(!status_error(400, "Forbidden: nope").is_retryable());
    }

    #[test]
    fn test_decode_not_retryable() {
        assert!(!ApiError::Decode("missing field `id`".to_string()).is_retryable());
    }

    #[test]
    fn test_status_accessor() {
        assert_eq!(status_error(404, "Not Found").status(), Some(404));
        assert_eq!(ApiError::Decode("bad".to_string()).status(), None);
    }

    #[test]
    fn test_display_carries_status_and_message() {
        let err = status_error(422, "name is required");
        assert_eq!(err.to_string(), "API error (422): name is required");
    }
}
