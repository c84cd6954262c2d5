//! Inworld token API client.

use crate::error::InworldRestError;
use crate::responses::{GenerateTokenRequest, TokenResponse};
use auth::{ApiCredentials, RequestSigner, GENERATE_TOKEN_METHOD_PATH};
use common::TokenConfig;
use rest_client::{JsonTransport, RestClient, RestError};

/// HTTP path of the token endpoint.
pub const GENERATE_TOKEN_PATH: &str = "/auth/v1/tokens/token:generate";

/// Client for the Inworld token API.
///
/// Generic over the transport so the signing and parsing path can run
/// against a stub; production code uses the default `RestClient`.
pub struct InworldRestClient<T = RestClient> {
    transport: T,
    credentials: ApiCredentials,
    config: TokenConfig,
}

impl InworldRestClient<RestClient> {
    /// Create a client that talks to `https://{config.host}`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(credentials: ApiCredentials, config: TokenConfig) -> Result<Self, InworldRestError> {
        let transport = RestClient::new(&config.base_url(), config.timeout())?;
        Ok(Self::with_transport(credentials, config, transport))
    }

    /// Create a client from `INWORLD_*` environment variables (and `.env`).
    pub fn from_env() -> Result<Self, InworldRestError> {
        let credentials = ApiCredentials::from_env()?;
        let config = TokenConfig::from_env()?;
        Self::new(credentials, config)
    }
}

impl<T: JsonTransport> InworldRestClient<T> {
    /// Create a client over an arbitrary transport.
    pub fn with_transport(credentials: ApiCredentials, config: TokenConfig, transport: T) -> Self {
        Self {
            transport,
            credentials,
            config,
        }
    }

    /// Get the API key (for logging/debugging).
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    pub fn config(&self) -> &TokenConfig {
        &self.config
    }

    /// Request a session token for the configured workspace.
    ///
    /// POST /auth/v1/tokens/token:generate
    ///
    /// Each call signs with a new timestamp and nonce. The response is
    /// returned as the server sent it.
    pub async fn generate_token(&self) -> Result<TokenResponse, InworldRestError> {
        let authorization = RequestSigner::new(&self.credentials)
            .sign_request(self.config.host(), GENERATE_TOKEN_METHOD_PATH)?;

        let request = GenerateTokenRequest {
            key: self.credentials.api_key().to_string(),
            resources: vec![self.config.workspace().to_string()],
        };
        let body =
            serde_json::to_value(&request).map_err(|e| InworldRestError::Parse(e.to_string()))?;

        tracing::debug!(
            api_key = %self.credentials.api_key(),
            host = %self.config.host(),
            workspace = %self.config.workspace(),
            "Requesting session token"
        );

        let value = self
            .transport
            .post_json_value(
                GENERATE_TOKEN_PATH,
                body,
                &[("Authorization", authorization.as_str())],
            )
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Token request failed");
                match e {
                    RestError::Parse(message) => InworldRestError::Parse(message),
                    other => InworldRestError::Rest(other),
                }
            })?;

        let response: TokenResponse = serde_json::from_value(value).map_err(|e| {
            tracing::warn!(error = %e, "Unexpected token response");
            InworldRestError::Parse(e.to_string())
        })?;

        tracing::info!(
            token_type = %response.token_type,
            expiration_time = %response.expiration_time,
            session_id = ?response.session_id,
            "Session token issued"
        );

        Ok(response)
    }
}
