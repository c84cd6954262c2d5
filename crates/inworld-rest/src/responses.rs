//! Token API request and response types.

use serde::{Deserialize, Serialize};

/// Body of POST /auth/v1/tokens/token:generate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateTokenRequest {
    /// API key, the same value as `ApiKey=` in the header.
    pub key: String,
    /// Workspaces the token is scoped to.
    pub resources: Vec<String>,
}

/// Response from POST /auth/v1/tokens/token:generate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
    #[serde(rename = "type")]
    pub token_type: String,
    /// Expiry as sent by the server (RFC 3339 timestamp).
    #[serde(rename = "expirationTime")]
    pub expiration_time: String,
    #[serde(rename = "sessionId", default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}
