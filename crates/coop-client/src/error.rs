//! API error normalization
//!
//! Every failure mode of the backend collapses into a single human-readable
//! message: transport failures, structured error bodies, and unparseable
//! bodies alike. Stores surface `ApiError::to_string()` directly.

use serde::Deserialize;
use thiserror::Error;

/// Errors produced by the storefront API client
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or transport failure before an HTTP status was obtained
    #[error("{0}")]
    Transport(String),

    /// Non-2xx HTTP response, message already normalized
    #[error("{message}")]
    Status { status: u16, message: String },

    /// 2xx response whose body did not match the expected shape
    #[error("Unexpected response from server")]
    Decode(#[source] serde_json::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

/// Shape of the backend's structured error bodies
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Normalize a non-2xx response body into a message string
///
/// Bodies are read as text first and parsed opportunistically. An unparseable
/// or empty body yields a synthesized message carrying the HTTP status code
/// instead of a parse fault.
pub fn normalize_error_body(status: u16, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.message;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("Server error ({status})")
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_body_yields_its_message() {
        let msg = normalize_error_body(401, r#"{"message":"Invalid credentials"}"#);
        assert_eq!(msg, "Invalid credentials");
    }

    #[test]
    fn html_body_is_passed_through_as_text() {
        let msg = normalize_error_body(502, "Bad Gateway");
        assert_eq!(msg, "Bad Gateway");
    }

    #[test]
    fn empty_body_synthesizes_status_message() {
        let msg = normalize_error_body(500, "");
        assert_eq!(msg, "Server error (500)");
        let msg = normalize_error_body(503, "   ");
        assert_eq!(msg, "Server error (503)");
    }

    #[test]
    fn status_error_displays_normalized_message() {
        let err = ApiError::Status {
            status: 401,
            message: normalize_error_body(401, r#"{"message":"Invalid credentials"}"#),
        };
        assert_eq!(err.to_string(), "Invalid credentials");
    }
}
