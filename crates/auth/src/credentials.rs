//! Secure API credential management.
//!
//! Uses the `secrecy` crate to prevent accidental logging of the secret
//! and ensures memory is zeroed on drop.

use crate::error::AuthError;
use secrecy::{ExposeSecret, SecretString};

/// API credentials for the Inworld token endpoint.
///
/// The secret is wrapped in `SecretString` which:
/// - Prevents accidental Debug/Display printing
/// - Zeros memory on drop via zeroize
#[derive(Clone)]
pub struct ApiCredentials {
    api_key: String,
    secret: SecretString,
}

impl ApiCredentials {
    /// Load credentials from environment variables.
    ///
    /// Looks for:
    /// - `INWORLD_KEY` - The API key (public, sent as `ApiKey=`)
    /// - `INWORLD_SECRET` - The secret (private, only used to derive signatures)
    ///
    /// # Errors
    /// Returns `AuthError::MissingEnvVar` if either variable is not set,
    /// or `AuthError::EmptyField` if one is set but blank.
    pub fn from_env() -> Result<Self, AuthError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        let api_key = std::env::var("INWORLD_KEY")
            .map_err(|_| AuthError::MissingEnvVar("INWORLD_KEY".into()))?;

        let secret = std::env::var("INWORLD_SECRET")
            .map_err(|_| AuthError::MissingEnvVar("INWORLD_SECRET".into()))?;

        Self::new(api_key, secret)
    }

    /// Create credentials from explicit values.
    ///
    /// # Errors
    /// Returns `AuthError::EmptyField` if the key or secret is empty or
    /// whitespace only. A blank secret would still produce a well-formed
    /// signature that the server rejects much later.
    pub fn new(api_key: String, secret: String) -> Result<Self, AuthError> {
        if api_key.trim().is_empty() {
            return Err(AuthError::EmptyField("api_key"));
        }
        if secret.trim().is_empty() {
            return Err(AuthError::EmptyField("secret"));
        }

        Ok(Self {
            api_key,
            secret: SecretString::from(secret),
        })
    }

    /// Get the API key (public, safe to log).
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Expose the secret for signing.
    ///
    /// **WARNING**: Only use this for cryptographic operations.
    /// Never log or display the return value.
    pub fn expose_secret(&self) -> &str {
        self.secret.expose_secret()
    }
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_key", &self.api_key)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}
