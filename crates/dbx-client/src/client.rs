//! HTTP transport over reqwest.
//!
//! The transport's contract is narrow: send a fully built `RequestSpec`,
//! return a `RawResponse` with the status, headers, and decoded body.
//! Classification and retry decisions happen one layer up. Timeouts are
//! enforced here (via reqwest); cancellations and network failures surface
//! as transport error kinds and are never retried by this crate.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::RequestSpec;
use crate::response::RawResponse;

/// HTTP transport for Dropbox API requests.
#[derive(Debug, Clone)]
pub struct DbxHttpClient {
    inner: reqwest::Client,
    config: ClientConfig,
}

impl DbxHttpClient {
    /// Create a new transport with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self { inner, config })
    }

    /// Create a new transport with default configuration.
    pub fn default_client() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send one request and collect the full response.
    pub async fn send(&self, spec: &RequestSpec) -> Result<RawResponse> {
        let mut req = self.inner.request(spec.method.to_reqwest(), &spec.url);

        if let Some(ref token) = spec.bearer_token {
            req = req.bearer_auth(token);
        }

        for (name, value) in &spec.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        if let Some(ref body) = spec.body {
            req = req.json(body);
        }

        if self.config.enable_tracing {
            debug!(method = ?spec.method, url = %spec.url, "sending request");
        }

        let response = req.send().await?;

        let status = response.status().as_u16();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let text = response.text().await?;

        if self.config.enable_tracing {
            if (200..300).contains(&status) {
                debug!(status, "response received");
            } else {
                info!(status, "non-success response");
            }
        }

        Ok(RawResponse::new(status, headers, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::RequestMethod;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_client_creation() {
        let client = DbxHttpClient::default_client().unwrap();
        assert!(client.config().enable_tracing);
    }

    #[tokio::test]
    async fn test_send_collects_status_headers_and_json() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/2/files/get_metadata"))
            .and(header("Authorization", "Bearer test-token"))
            .and(body_json(serde_json::json!({"path": "/hello.txt"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("X-Dropbox-Request-Id", "abc123")
                    .set_body_json(serde_json::json!({".tag": "file", "name": "hello.txt"})),
            )
            .mount(&mock_server)
            .await;

        let client = DbxHttpClient::default_client().unwrap();
        let spec = RequestSpec::new(
            RequestMethod::Post,
            format!("{}/2/files/get_metadata", mock_server.uri()),
        )
        .bearer_auth("test-token")
        .json_value(serde_json::json!({"path": "/hello.txt"}));

        let raw = client.send(&spec).await.unwrap();
        assert_eq!(raw.status(), 200);
        assert_eq!(raw.header("x-dropbox-request-id"), Some("abc123"));
        assert_eq!(raw.json().unwrap()["name"], "hello.txt");
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        // Port 1 is never listening.
        let client = DbxHttpClient::default_client().unwrap();
        let spec = RequestSpec::new(RequestMethod::Post, "http://127.0.0.1:1/2/check/user");

        let err = client.send(&spec).await.unwrap_err();
        assert!(matches!(
            err.kind,
            ErrorKind::Connection(_) | ErrorKind::Transport(_)
        ));
    }
}
