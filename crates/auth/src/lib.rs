//! IW1 request signing for the Inworld token API.
//!
//! This crate computes the `Authorization` header that the Inworld
//! authentication service verifies before issuing a session token.
//! Everything here is pure: no I/O, no shared state.
//!
//! # Features
//!
//! - **Secure Credentials**: the API secret is wrapped in `SecretString` to prevent
//!   accidental logging and ensure memory is zeroed on drop.
//! - **Chained HMAC-SHA256**: the IW1 key derivation, where every signed field
//!   re-keys the next HMAC step.
//! - **Fresh Context**: UTC timestamps and random nonces generated per request.
//!
//! # Example
//!
//! ```rust,ignore
//! use auth::{ApiCredentials, RequestSigner, SignatureContext, GENERATE_TOKEN_METHOD_PATH};
//!
//! let credentials = ApiCredentials::from_env()?;
//! let signer = RequestSigner::new(&credentials);
//!
//! let context = SignatureContext::generate("api-engine.inworld.ai:443", GENERATE_TOKEN_METHOD_PATH)?;
//! let header = signer.authorization_header(&context)?;
//! // IW1-HMAC-SHA256 ApiKey=...,DateTime=...,Nonce=...,Signature=...
//! ```

mod context;
mod credentials;
mod error;
mod signer;

pub use context::{generate_nonce, generate_timestamp, SignatureContext, NONCE_LEN, TIMESTAMP_LEN};
pub use credentials::ApiCredentials;
pub use error::AuthError;
pub use signer::{
    build_authorization_header, derive_signature, normalize_host, normalize_method_path,
    RequestSigner, AUTH_SCHEME, GENERATE_TOKEN_METHOD_PATH,
};
