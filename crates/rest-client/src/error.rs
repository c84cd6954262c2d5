//! REST client error types.

use thiserror::Error;

/// Errors that can occur during REST API calls.
#[derive(Debug, Error)]
pub enum RestError {
    /// Non-2xx response. `message` is the response body, verbatim.
    #[error("HTTP error: {status} - {message}")]
    HttpError {
        /// HTTP status code.
        status: u16,
        /// Response body.
        message: String,
    },

    /// Request timed out.
    #[error("Request timeout")]
    Timeout,

    /// Connection error (network issue).
    #[error("Connection error: {0}")]
    Connection(String),

    /// Failed to parse response body as JSON.
    #[error("JSON parse error: {0}")]
    Parse(String),

    /// Rate limited by the server.
    #[error("Rate limited: {message}")]
    RateLimited {
        /// Response body.
        message: String,
    },

    /// Failed to build the HTTP client or request.
    #[error("Request build error: {0}")]
    RequestBuild(String),
}

impl RestError {
    /// HTTP status of the response that caused this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            RestError::HttpError { status, .. } => Some(*status),
            RestError::RateLimited { .. } => Some(429),
            _ => None,
        }
    }

    /// Check if this is a transport-level failure (no usable response).
    pub fn is_network(&self) -> bool {
        matches!(self, RestError::Timeout | RestError::Connection(_))
    }
}

impl From<reqwest::Error> for RestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RestError::Timeout
        } else if err.is_connect() {
            RestError::Connection(err.to_string())
        } else if err.is_decode() {
            RestError::Parse(err.to_string())
        } else if err.is_builder() {
            RestError::RequestBuild(err.to_string())
        } else if let Some(status) = err.status() {
            RestError::HttpError {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            RestError::Connection(err.to_string())
        }
    }
}
