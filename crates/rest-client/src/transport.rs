//! Transport seam between request construction and the network.

use crate::client::RestClient;
use crate::error::RestError;
use async_trait::async_trait;
use serde_json::Value;

/// Sends a JSON body and returns the parsed JSON response.
///
/// `RestClient` is the production implementation. Anything that can answer
/// a POST with a JSON value (a stub, a recorder) can stand in for it.
#[async_trait]
pub trait JsonTransport: Send + Sync {
    /// POST `body` to `path` with the given extra headers.
    async fn post_json_value(
        &self,
        path: &str,
        body: Value,
        headers: &[(&str, &str)],
    ) -> Result<Value, RestError>;
}

#[async_trait]
impl JsonTransport for RestClient {
    async fn post_json_value(
        &self,
        path: &str,
        body: Value,
        headers: &[(&str, &str)],
    ) -> Result<Value, RestError> {
        self.post_json(path, &body, headers).await
    }
}
