//! Generic REST client wrapper around reqwest.

use crate::error::RestError;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Default request timeout.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Generic REST client for making JSON HTTP requests.
pub struct RestClient {
    client: Client,
    base_url: String,
}

impl RestClient {
    /// Create a new REST client with the given base URL.
    ///
    /// # Arguments
    /// * `base_url` - Base URL for all requests (e.g., "https://api.inworld.ai")
    /// * `timeout` - Request timeout duration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RestError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RestError::RequestBuild(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a new REST client with default timeout.
    pub fn with_default_timeout(base_url: &str) -> Result<Self, RestError> {
        Self::new(base_url, DEFAULT_TIMEOUT)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a POST request with a JSON body.
    ///
    /// # Arguments
    /// * `path` - Request path (e.g., "/auth/v1/tokens/token:generate")
    /// * `body` - Serialized as the JSON request body
    /// * `headers` - Additional headers, e.g. `Authorization`
    pub async fn post_json<B, T>(
        &self,
        path: &str,
        body: &B,
        headers: &[(&str, &str)],
    ) -> Result<T, RestError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.build_url(path);
        tracing::debug!(url = %url, "POST request");

        let mut request = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(body);

        for (key, value) in headers {
            request = request.header(*key, *value);
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Handle HTTP response and deserialize JSON body.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, RestError> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            parse_body(&body)
        } else {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), body = %body, "Request rejected");

            if status.as_u16() == 429 {
                return Err(RestError::RateLimited { message: body });
            }

            Err(RestError::HttpError {
                status: status.as_u16(),
                message: body,
            })
        }
    }
}

/// Deserialize a 2xx body.
///
/// Success bodies may carry credentials, so only their length is logged.
fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, RestError> {
    serde_json::from_str(body).map_err(|e| {
        tracing::warn!(body_len = body.len(), error = %e, "Failed to parse response");
        RestError::Parse(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    /// Log sink shared between the subscriber and the test.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    #[test]
    fn test_build_url() {
        let client = RestClient::with_default_timeout("https://api.example.com").unwrap();
        assert_eq!(
            client.build_url("/auth/v1/tokens/token:generate"),
            "https://api.example.com/auth/v1/tokens/token:generate"
        );
    }

    #[test]
    fn test_build_url_without_leading_slash() {
        let client = RestClient::with_default_timeout("https://api.example.com").unwrap();
        assert_eq!(
            client.build_url("auth/v1/tokens/token:generate"),
            "https://api.example.com/auth/v1/tokens/token:generate"
        );
    }

    #[test]
    fn test_build_url_strips_trailing_slash() {
        let client = RestClient::with_default_timeout("https://api.example.com/").unwrap();
        assert_eq!(client.base_url(), "https://api.example.com");
        assert_eq!(
            client.build_url("/v1/time"),
            "https://api.example.com/v1/time"
        );
    }

    #[test]
    fn test_parse_body_truncated_is_parse_error() {
        let err = parse_body::<serde_json::Value>(r#"{"token":"tok","type":"Bearer""#).unwrap_err();
        assert!(matches!(err, RestError::Parse(_)), "unexpected error: {err:?}");
    }

    #[test]
    fn test_parse_failure_does_not_log_body() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let body = r#"{"token":"SECRET-BEARER","type":"Bearer""#;
        let result = tracing::subscriber::with_default(subscriber, || {
            parse_body::<serde_json::Value>(body)
        });
        assert!(result.is_err());

        let output = logs.contents();
        assert!(output.contains("Failed to parse response"), "got: {output}");
        assert!(output.contains(&format!("body_len={}", body.len())), "got: {output}");
        assert!(!output.contains("SECRET-BEARER"), "got: {output}");
    }

    #[tokio::test]
    async fn test_connection_error_is_network() {
        // Bind then release an ephemeral port so nothing is listening on it
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let base_url = format!("http://127.0.0.1:{port}");
        let client = RestClient::new(&base_url, Duration::from_secs(2)).unwrap();
        let err = client
            .post_json::<_, serde_json::Value>("/x", &serde_json::json!({}), &[])
            .await
            .unwrap_err();
        assert!(err.is_network(), "unexpected error: {err:?}");
    }
}
