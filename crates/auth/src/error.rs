use thiserror::Error;

/// Errors that can occur while preparing a signed request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// A required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// A field that takes part in signing was empty.
    #[error("Field `{0}` must not be empty")]
    EmptyField(&'static str),

    /// The timestamp is not 14 digits (`YYYYMMDDHHMMSS`).
    #[error("Invalid timestamp '{0}', expected 14 digits (YYYYMMDDHHMMSS)")]
    InvalidTimestamp(String),
}
