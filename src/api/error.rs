//! Error types for the HTTP binding and error-body message extraction.

use serde_json::Value;
use thiserror::Error;

/// Keys checked, in order, for a human-readable message in an error body.
const MESSAGE_KEYS: [&str; 3] = ["error", "message", "detail"];

/// Errors that can occur while talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response: connection refused, DNS, timeout, TLS...
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Base URL or endpoint path could not be turned into a URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The backend answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// A 2xx response without the body the endpoint promises
    #[error("Empty response body")]
    EmptyBody,

    /// The body did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Error body of a non-2xx reply, if that is what this is.
    pub fn body(&self) -> Option<&str> {
        match self {
            ApiError::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Extract a user-facing message from a JSON error body.
///
/// Returns the first non-blank string among `error`, `message` and `detail`,
/// or `fallback` when the body is missing, malformed or has none of them.
pub fn parse_error_message(body: Option<&str>, fallback: &str) -> String {
    let Some(body) = body else {
        return fallback.to_string();
    };

    let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) else {
        return fallback.to_string();
    };

    MESSAGE_KEYS
        .iter()
        .filter_map(|key| map.get(*key).and_then(Value::as_str))
        .find(|message| !message.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| fallback.to_string())
}
