//! Shared configuration for the token client.

mod config;

pub use config::{ConfigError, TokenConfig, DEFAULT_HOST, DEFAULT_TIMEOUT};
