//! Request executor: one logical endpoint call end-to-end.
//!
//! The executor owns the transport and one credential. It builds a fresh
//! wire request per attempt, sends it, classifies the response, and — on
//! an expired access token with a refresh-capable credential — refreshes
//! once and retries once. Everything else propagates to the caller
//! immediately.

use tracing::{debug, instrument, warn};

use crate::classify::classify;
use crate::client::DbxHttpClient;
use crate::config::ClientConfig;
use crate::credential::Credential;
use crate::endpoint::Endpoint;
use crate::error::{Error, ErrorKind, Result};
use crate::request::RequestSpec;
use crate::result::build_result;
use crate::API_BASE_URL;

/// Executor for Dropbox API endpoint calls, bound to one credential.
///
/// Cloning is cheap when the credential is cheaply cloneable; clones share
/// the transport's connection pool.
#[derive(Debug, Clone)]
pub struct DropboxClient<C> {
    http: DbxHttpClient,
    credential: C,
    base_url: String,
}

impl<C: Credential> DropboxClient<C> {
    /// Create a new client with default transport configuration.
    pub fn new(credential: C) -> Result<Self> {
        Self::with_config(credential, ClientConfig::default())
    }

    /// Create a new client with custom transport configuration.
    pub fn with_config(credential: C, config: ClientConfig) -> Result<Self> {
        let http = DbxHttpClient::new(config)?;
        Ok(Self {
            http,
            credential,
            base_url: API_BASE_URL.to_string(),
        })
    }

    /// Override the API base URL (tests point this at a mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// The API base URL in use.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The bound credential.
    pub fn credential(&self) -> &C {
        &self.credential
    }

    fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Build the wire request for one attempt. Fresh per attempt: the
    /// authorization header depends on the live access token.
    fn build_request<E: Endpoint>(&self, params: &E::Params) -> Result<RequestSpec> {
        RequestSpec::new(E::METHOD, self.endpoint_url(E::PATH))
            .bearer_auth(self.credential.access_token())
            .json(params)
    }

    /// Execute one logical endpoint call.
    ///
    /// On an expired-token response with a refresh-capable credential, the
    /// token is refreshed exactly once and the request is rebuilt and
    /// resent exactly once; a second expired-token response (or any other
    /// error) is final.
    #[instrument(skip_all, fields(endpoint = E::PATH))]
    pub async fn execute<E: Endpoint>(
        &self,
        params: &E::Params,
    ) -> Result<E::Response, E::Error> {
        let mut refreshed = false;

        loop {
            let spec = self.build_request::<E>(params).map_err(Error::widen)?;
            let raw = self.http.send(&spec).await.map_err(Error::widen)?;

            match classify(raw) {
                Ok(payload) => return build_result::<E>(payload),
                Err(err)
                    if err.is_expired_credential()
                        && !refreshed
                        && self.credential.can_refresh() =>
                {
                    debug!("access token expired, refreshing");
                    self.credential.refresh().await.map_err(|e| Error {
                        kind: ErrorKind::Refresh(e.to_string()),
                        source: Some(e),
                    })?;
                    refreshed = true;
                }
                Err(err) => {
                    if err.is_expired_credential() && refreshed {
                        warn!("access token still expired after refresh");
                    }
                    return Err(err.widen());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credential::{RefreshError, StaticToken};
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::{Arc, RwLock};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct Echo;

    #[derive(Debug, PartialEq, thiserror::Error, serde::Deserialize)]
    #[serde(tag = ".tag", rename_all = "snake_case")]
    enum EchoError {
        #[error("rejected")]
        Rejected,
    }

    impl Endpoint for Echo {
        const PATH: &'static str = "test/echo";
        type Params = serde_json::Value;
        type Response = serde_json::Value;
        type Error = EchoError;
    }

    /// Refresh-capable credential whose refresh swaps in a fixed fresh
    /// token and counts invocations.
    #[derive(Clone)]
    struct RefreshingToken {
        token: Arc<RwLock<String>>,
        refreshes: Arc<AtomicU32>,
    }

    impl RefreshingToken {
        fn new(initial: &str) -> Self {
            Self {
                token: Arc::new(RwLock::new(initial.to_string())),
                refreshes: Arc::new(AtomicU32::new(0)),
            }
        }
    }

    impl Credential for RefreshingToken {
        fn access_token(&self) -> String {
            self.token.read().unwrap().clone()
        }

        fn can_refresh(&self) -> bool {
            true
        }

        async fn refresh(&self) -> std::result::Result<(), RefreshError> {
            self.refreshes.fetch_add(1, Ordering::SeqCst);
            *self.token.write().unwrap() = "fresh-token".to_string();
            Ok(())
        }
    }

    fn expired_body() -> serde_json::Value {
        serde_json::json!({
            "error_summary": "expired_access_token/...",
            "error": {".tag": "expired_access_token"}
        })
    }

    #[tokio::test]
    async fn test_execute_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/test/echo"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})),
            )
            .mount(&mock_server)
            .await;

        let client = DropboxClient::new(StaticToken::new("token"))
            .unwrap()
            .with_base_url(mock_server.uri());

        let result = client
            .execute::<Echo>(&serde_json::json!({}))
            .await
            .unwrap();
        assert_eq!(result["ok"], true);
    }

    #[tokio::test]
    async fn test_expired_token_refreshes_once_then_succeeds() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/test/echo"))
            .and(header("Authorization", "Bearer stale-token"))
            .respond_with(ResponseTemplate::new(401).set_body_json(expired_body()))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/test/echo"))
            .and(header("Authorization", "Bearer fresh-token"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let credential = RefreshingToken::new("stale-token");
        let refreshes = credential.refreshes.clone();
        let client = DropboxClient::new(credential)
            .unwrap()
            .with_base_url(mock_server.uri());

        let result = client
            .execute::<Echo>(&serde_json::json!({}))
            .await
            .unwrap();
        assert_eq!(result["ok"], true);
        assert_eq!(refreshes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_second_expired_token_is_final() {
        let mock_server = MockServer::start().await;

        // Both attempts come back 401, regardless of token.
        Mock::given(method("POST"))
            .and(path("/test/echo"))
            .respond_with(ResponseTemplate::new(401).set_body_json(expired_body()))
            .expect(2)
            .mount(&mock_server)
            .await;

        let credential = RefreshingToken::new("stale-token");
        let refreshes = credential.refreshes.clone();
        let client = DropboxClient::new(credential)
            .unwrap()
            .with_base_url(mock_server.uri());

        let err = client
            .execute::<Echo>(&serde_json::json!({}))
            .await
            .unwrap_err();
        assert!(err.is_expired_credential());
        assert_eq!(refreshes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_expired_token_without_refresh_support_is_immediate() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/test/echo"))
            .respond_with(ResponseTemplate::new(401).set_body_json(expired_body()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = DropboxClient::new(StaticToken::new("token"))
            .unwrap()
            .with_base_url(mock_server.uri());

        let err = client
            .execute::<Echo>(&serde_json::json!({}))
            .await
            .unwrap_err();
        assert!(err.is_expired_credential());
    }

    #[tokio::test]
    async fn test_typed_application_error_from_409() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/test/echo"))
            .respond_with(ResponseTemplate::new(409).set_body_json(serde_json::json!({
                "error_summary": "rejected/..",
                "error": {".tag": "rejected"}
            })))
            .mount(&mock_server)
            .await;

        let client = DropboxClient::new(StaticToken::new("token"))
            .unwrap()
            .with_base_url(mock_server.uri());

        let err = client
            .execute::<Echo>(&serde_json::json!({}))
            .await
            .unwrap_err();
        assert_eq!(err.api_error(), Some(&EchoError::Rejected));
    }
}
