//! Error types for the Pipedeck client
//!
//! The server rarely fails: unknown pipeline ids are accepted as no-ops, so
//! the usual error is a `400` for a request body that is not valid JSON.

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors returned by [`crate::PipedeckClient`]
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server could not be reached or the connection dropped
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Non-2xx response; `message` is the server's `error` field when present
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// A 2xx response whose body did not match the expected type
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl ClientError {
    /// Build an API error from a status code and the raw response body
    ///
    /// Bodies shaped like `{"error": "..."}` are reduced to the message.
    pub fn from_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| value.get("error")?.as_str().map(str::to_owned))
            .unwrap_or_else(|| body.to_string());

        Self::ApiError { status, message }
    }

    /// The server rejected the request body
    pub fn is_rejected_body(&self) -> bool {
        matches!(self, Self::ApiError { status: 400, .. })
    }

    /// The server failed, e.g. a page template did not render
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }
}
