//! JSON-over-HTTP transport.
//!
//! This crate provides a thin wrapper around `reqwest` with:
//!
//! - Consistent error handling via `RestError`
//! - JSON request bodies and JSON response deserialization
//! - Header injection for authentication
//! - Non-2xx bodies preserved for diagnosis
//! - A `JsonTransport` seam so callers can run against a stub
//!
//! # Example
//!
//! ```rust,ignore
//! use rest_client::RestClient;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Echo {
//!     ok: bool,
//! }
//!
//! let client = RestClient::with_default_timeout("https://api.example.com")?;
//! let echo: Echo = client
//!     .post_json("/v1/echo", &serde_json::json!({"ping": 1}), &[("Authorization", "...")])
//!     .await?;
//! ```

mod client;
mod error;
mod transport;

pub use client::RestClient;
pub use error::RestError;
pub use transport::JsonTransport;
