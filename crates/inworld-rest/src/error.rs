//! Token client error types.

use auth::AuthError;
use common::ConfigError;
use rest_client::RestError;
use thiserror::Error;

/// Errors that can occur while obtaining a session token.
#[derive(Debug, Error)]
pub enum InworldRestError {
    /// Credentials or signing inputs were malformed. Nothing was sent.
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Configuration could not be loaded. Nothing was sent.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Network failure, timeout or non-2xx response (body preserved).
    #[error("REST client error: {0}")]
    Rest(#[from] RestError),

    /// The response did not have the expected shape.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl InworldRestError {
    /// Whether the server refused the credentials or signature (401/403).
    ///
    /// Usually a wrong secret, clock skew, or a host that differs from the
    /// one the server signs over.
    pub fn is_signature_rejected(&self) -> bool {
        matches!(
            self,
            Self::Rest(RestError::HttpError {
                status: 401 | 403,
                ..
            })
        )
    }

    /// Response body returned with a non-2xx status, if any.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::Rest(RestError::HttpError { message, .. })
            | Self::Rest(RestError::RateLimited { message }) => Some(message.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_rejected() {
        let err = InworldRestError::from(RestError::HttpError {
            status: 403,
            message: "invalid signature".into(),
        });
        assert!(err.is_signature_rejected());
        assert_eq!(err.response_body(), Some("invalid signature"));

        let err = InworldRestError::from(RestError::HttpError {
            status: 500,
            message: "oops".into(),
        });
        assert!(!err.is_signature_rejected());
        assert_eq!(err.response_body(), Some("oops"));
    }

    #[test]
    fn test_input_errors_have_no_body() {
        let err = InworldRestError::from(AuthError::EmptyField("secret"));
        assert!(!err.is_signature_rejected());
        assert_eq!(err.response_body(), None);
        assert_eq!(
            err.to_string(),
            "Authentication error: Field `secret` must not be empty"
        );
    }
}
