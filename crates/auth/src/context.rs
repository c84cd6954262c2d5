//! Per-request signing inputs: timestamp, host, method path and nonce.

use crate::error::AuthError;
use crate::signer::normalize_host;
use rand::rngs::OsRng;
use rand::RngCore;

/// Length of a `DateTime` value (`YYYYMMDDHHMMSS`).
pub const TIMESTAMP_LEN: usize = 14;

/// Length of a generated nonce in hex characters.
///
/// The server expects this exact width; do not change it.
pub const NONCE_LEN: usize = 11;

/// Random bytes drawn per nonce before hex encoding and slicing.
const NONCE_SOURCE_BYTES: usize = 16;

const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Current UTC time as `YYYYMMDDHHMMSS`.
///
/// The verifier compares against its own UTC clock, so local time must
/// never be used here.
pub fn generate_timestamp() -> String {
    chrono::Utc::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Fresh nonce of [`NONCE_LEN`] lowercase hex characters.
///
/// Draws 16 bytes from the OS RNG, hex-encodes them and keeps characters
/// `1..12` of the encoding.
pub fn generate_nonce() -> String {
    let mut bytes = [0u8; NONCE_SOURCE_BYTES];
    OsRng.fill_bytes(&mut bytes);

    let encoded = hex::encode(bytes);
    encoded[1..1 + NONCE_LEN].to_string()
}

/// The four fields signed for one request, in signing order.
///
/// Built fresh for every request and never reused: replaying a
/// timestamp/nonce pair is rejected by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureContext {
    timestamp: String,
    host: String,
    method_path: String,
    nonce: String,
}

impl SignatureContext {
    /// Build a context with the current UTC time and a random nonce.
    ///
    /// `host` and `method_path` are stored as given; normalization happens
    /// when the header is built.
    ///
    /// # Errors
    /// Returns `AuthError::EmptyField` if `host` or `method_path` is empty.
    pub fn generate(
        host: impl Into<String>,
        method_path: impl Into<String>,
    ) -> Result<Self, AuthError> {
        Self::new(generate_timestamp(), host, method_path, generate_nonce())
    }

    /// Build a context from explicit values.
    ///
    /// # Errors
    /// Returns `AuthError::EmptyField` for any empty field and
    /// `AuthError::InvalidTimestamp` unless `timestamp` is 14 ASCII digits.
    pub fn new(
        timestamp: impl Into<String>,
        host: impl Into<String>,
        method_path: impl Into<String>,
        nonce: impl Into<String>,
    ) -> Result<Self, AuthError> {
        let context = Self {
            timestamp: timestamp.into(),
            host: host.into(),
            method_path: method_path.into(),
            nonce: nonce.into(),
        };
        context.validate()?;
        Ok(context)
    }

    fn validate(&self) -> Result<(), AuthError> {
        if self.timestamp.is_empty() {
            return Err(AuthError::EmptyField("timestamp"));
        }
        if normalize_host(&self.host).is_empty() {
            return Err(AuthError::EmptyField("host"));
        }
        if self.method_path.trim_start_matches('/').is_empty() {
            return Err(AuthError::EmptyField("method_path"));
        }
        if self.nonce.is_empty() {
            return Err(AuthError::EmptyField("nonce"));
        }

        let well_formed = self.timestamp.len() == TIMESTAMP_LEN
            && self.timestamp.bytes().all(|b| b.is_ascii_digit());
        if !well_formed {
            return Err(AuthError::InvalidTimestamp(self.timestamp.clone()));
        }

        Ok(())
    }

    /// `DateTime` value, `YYYYMMDDHHMMSS` in UTC.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Host as supplied (may still carry `:443`).
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Method path as supplied (may still carry a leading `/`).
    pub fn method_path(&self) -> &str {
        &self.method_path
    }

    pub fn nonce(&self) -> &str {
        &self.nonce
    }
}
