//! Token endpoint configuration.
//!
//! Everything the token flow needs besides credentials: which host to call
//! (and sign over), which workspace the token is scoped to, and how long to
//! wait for the response.

use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Host used when `INWORLD_HOST` is not set.
pub const DEFAULT_HOST: &str = "api-engine.inworld.ai";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors loading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// A variable is set but cannot be used.
    #[error("Invalid value for {name}: '{value}'")]
    InvalidValue {
        name: &'static str,
        value: String,
    },
}

/// Where and for whom to request a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenConfig {
    host: String,
    workspace: String,
    timeout: Duration,
}

impl TokenConfig {
    /// Create a config with the default timeout.
    ///
    /// `host` may carry a port (`api.example.com:443`). `workspace` is sent
    /// verbatim as the single entry of `resources`.
    pub fn new(host: impl Into<String>, workspace: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            workspace: workspace.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load config from environment variables.
    ///
    /// Looks for:
    /// - `INWORLD_HOST` - token service host, defaults to [`DEFAULT_HOST`]
    /// - `INWORLD_WORKSPACE` - workspace the token is scoped to (required)
    /// - `INWORLD_TIMEOUT_SECS` - request timeout in seconds, defaults to 30
    ///
    /// A `.env` file in the working directory is loaded first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("INWORLD_HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let workspace = lookup("INWORLD_WORKSPACE")
            .filter(|w| !w.trim().is_empty())
            .ok_or(ConfigError::MissingEnvVar("INWORLD_WORKSPACE"))?;

        let timeout = match lookup("INWORLD_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidValue {
                        name: "INWORLD_TIMEOUT_SECS",
                        value: raw,
                    })
                }
            },
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self::new(host, workspace).with_timeout(timeout))
    }

    /// Host as configured, including any port.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Workspace the issued token is scoped to.
    pub fn workspace(&self) -> &str {
        &self.workspace
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// HTTPS base URL for the token service.
    pub fn base_url(&self) -> String {
        format!("https://{}", self.host)
    }
}

impl fmt::Display for TokenConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (workspace {})", self.host, self.workspace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_new_defaults() {
        let config = TokenConfig::new("api.example.com:443", "workspaces/demo");
        assert_eq!(config.host(), "api.example.com:443");
        assert_eq!(config.workspace(), "workspaces/demo");
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
        assert_eq!(config.base_url(), "https://api.example.com:443");
    }

    #[test]
    fn test_with_timeout() {
        let config = TokenConfig::new("h", "w").with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_lookup_applies_defaults() {
        let config = TokenConfig::from_lookup(lookup_from(&[("INWORLD_WORKSPACE", "ws")])).unwrap();
        assert_eq!(config.host(), DEFAULT_HOST);
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_lookup_reads_all_values() {
        let config = TokenConfig::from_lookup(lookup_from(&[
            ("INWORLD_HOST", "staging.example.com:8443"),
            ("INWORLD_WORKSPACE", "workspaces/demo"),
            ("INWORLD_TIMEOUT_SECS", "7"),
        ]))
        .unwrap();
        assert_eq!(config.host(), "staging.example.com:8443");
        assert_eq!(config.workspace(), "workspaces/demo");
        assert_eq!(config.timeout(), Duration::from_secs(7));
    }

    #[test]
    fn test_lookup_requires_workspace() {
        assert_eq!(
            TokenConfig::from_lookup(lookup_from(&[])),
            Err(ConfigError::MissingEnvVar("INWORLD_WORKSPACE"))
        );
        assert_eq!(
            TokenConfig::from_lookup(lookup_from(&[("INWORLD_WORKSPACE", "  ")])),
            Err(ConfigError::MissingEnvVar("INWORLD_WORKSPACE"))
        );
    }

    #[test]
    fn test_lookup_rejects_bad_timeout() {
        for bad in ["abc", "0", "-3"] {
            assert_eq!(
                TokenConfig::from_lookup(lookup_from(&[
                    ("INWORLD_WORKSPACE", "ws"),
                    ("INWORLD_TIMEOUT_SECS", bad),
                ])),
                Err(ConfigError::InvalidValue {
                    name: "INWORLD_TIMEOUT_SECS",
                    value: bad.to_string(),
                })
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(
            TokenConfig::new("api.example.com", "ws").to_string(),
            "api.example.com (workspace ws)"
        );
    }
}
