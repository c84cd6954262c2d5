//! Inworld session token client.
//!
//! This crate exchanges IW1-signed API credentials for a short-lived
//! session token:
//!
//! - **Signing**: a fresh timestamp and nonce per call, signed with the `auth` crate
//! - **Token generation**: `POST /auth/v1/tokens/token:generate` scoped to one workspace
//! - **Error handling**: input, transport and unexpected failures kept apart
//!
//! No retries happen here. A rejected request must be re-signed, which
//! `generate_token` does on every call.
//!
//! # Example
//!
//! ```rust,ignore
//! use auth::ApiCredentials;
//! use common::TokenConfig;
//! use inworld_rest::InworldRestClient;
//!
//! let credentials = ApiCredentials::new(key, secret)?;
//! let config = TokenConfig::new("api-engine.inworld.ai", "workspaces/my-workspace");
//! let client = InworldRestClient::new(credentials, config)?;
//!
//! let token = client.generate_token().await?;
//! println!("{} expires at {}", token.token_type, token.expiration_time);
//! ```

mod client;
mod error;
mod responses;

pub use client::{InworldRestClient, GENERATE_TOKEN_PATH};
pub use error::InworldRestError;
pub use responses::{GenerateTokenRequest, TokenResponse};
