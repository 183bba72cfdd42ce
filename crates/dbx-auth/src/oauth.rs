//! OAuth 2.0 flows for Dropbox.
//!
//! Two flows are supported:
//! - **Authorization Code** - `authorization_url` + `exchange_code` for the
//!   initial grant (request `token_access_type=offline` to receive a
//!   refresh token).
//! - **Refresh Token** - `refresh_token` exchanges a long-lived refresh
//!   token for a fresh short-lived access token.

use serde::Deserialize;
use tracing::instrument;

use crate::error::{Error, ErrorKind, Result};

/// Default token endpoint.
pub const TOKEN_URL: &str = "https://api.dropboxapi.com/oauth2/token";

/// User-facing authorization endpoint.
pub const AUTHORIZE_URL: &str = "https://www.dropbox.com/oauth2/authorize";

/// OAuth 2.0 configuration for a Dropbox app.
///
/// The app secret is redacted in Debug output.
#[derive(Clone)]
pub struct OAuthConfig {
    /// App key (client_id).
    pub app_key: String,
    /// App secret (client_secret). Optional: PKCE-based apps have none.
    app_secret: Option<String>,
    /// Redirect URI for the code flow.
    pub redirect_uri: Option<String>,
}

impl std::fmt::Debug for OAuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthConfig")
            .field("app_key", &self.app_key)
            .field("app_secret", &self.app_secret.as_ref().map(|_| "[REDACTED]"))
            .field("redirect_uri", &self.redirect_uri)
            .finish()
    }
}

impl OAuthConfig {
    /// Create a new OAuth config.
    pub fn new(app_key: impl Into<String>) -> Self {
        Self {
            app_key: app_key.into(),
            app_secret: None,
            redirect_uri: None,
        }
    }

    /// Set the app secret.
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.app_secret = Some(secret.into());
        self
    }

    /// Set the redirect URI.
    pub fn with_redirect_uri(mut self, uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(uri.into());
        self
    }

    pub(crate) fn app_secret(&self) -> Option<&str> {
        self.app_secret.as_deref()
    }
}

/// OAuth client for the Dropbox token endpoint.
#[derive(Clone)]
pub struct OAuthClient {
    config: OAuthConfig,
    http_client: reqwest::Client,
}

impl std::fmt::Debug for OAuthClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl OAuthClient {
    /// Create a new OAuth client.
    pub fn new(config: OAuthConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Get the OAuth config.
    pub fn config(&self) -> &OAuthConfig {
        &self.config
    }

    /// Generate the authorization URL to send users to.
    ///
    /// `token_access_type=offline` is always requested so the grant
    /// includes a refresh token.
    pub fn authorization_url(&self, state: Option<&str>) -> String {
        let mut url = format!(
            "{}?response_type=code&token_access_type=offline&client_id={}",
            AUTHORIZE_URL,
            urlencoding::encode(&self.config.app_key),
        );

        if let Some(ref redirect_uri) = self.config.redirect_uri {
            url.push_str(&format!(
                "&redirect_uri={}",
                urlencoding::encode(redirect_uri)
            ));
        }

        if let Some(state) = state {
            url.push_str(&format!("&state={}", urlencoding::encode(state)));
        }

        url
    }

    /// Exchange an authorization code for tokens.
    ///
    /// The code parameter is not logged to prevent credential exposure.
    #[instrument(skip(self, code))]
    pub async fn exchange_code(&self, code: &str, token_url: &str) -> Result<TokenResponse> {
        let mut params = vec![
            ("grant_type", "authorization_code"),
            ("code", code),
            ("client_id", &self.config.app_key),
        ];

        if let Some(secret) = self.config.app_secret() {
            params.push(("client_secret", secret));
        }
        if let Some(ref redirect_uri) = self.config.redirect_uri {
            params.push(("redirect_uri", redirect_uri));
        }

        self.post_token_request(params, token_url).await
    }

    /// Exchange a refresh token for a fresh access token.
    ///
    /// The refresh_token parameter is not logged to prevent credential
    /// exposure.
    #[instrument(skip(self, refresh_token))]
    pub async fn refresh_token(
        &self,
        refresh_token: &str,
        token_url: &str,
    ) -> Result<TokenResponse> {
        let mut params = vec![
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", &self.config.app_key),
        ];

        if let Some(secret) = self.config.app_secret() {
            params.push(("client_secret", secret));
        }

        self.post_token_request(params, token_url).await
    }

    async fn post_token_request(
        &self,
        params: Vec<(&str, &str)>,
        token_url: &str,
    ) -> Result<TokenResponse> {
        let body = serde_urlencoded::to_string(params)?;

        let response = self
            .http_client
            .post(token_url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await?;

        if !response.status().is_success() {
            let error: OAuthErrorResponse = response.json().await?;
            return Err(Error::new(ErrorKind::OAuth {
                error: error.error,
                description: error.error_description.unwrap_or_default(),
            }));
        }

        let token: TokenResponse = response.json().await?;
        Ok(token)
    }
}

/// Token response from the OAuth endpoint.
///
/// Token fields are redacted in Debug output.
#[derive(Clone, Deserialize)]
pub struct TokenResponse {
    /// Short-lived access token.
    pub access_token: String,
    /// Token type (usually "bearer").
    #[serde(default)]
    pub token_type: Option<String>,
    /// Seconds until the access token expires.
    #[serde(default)]
    pub expires_in: Option<u64>,
    /// Refresh token (code flow with `token_access_type=offline` only;
    /// refresh responses do not rotate it).
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Scopes granted.
    #[serde(default)]
    pub scope: Option<String>,
    /// Account the grant belongs to.
    #[serde(default)]
    pub account_id: Option<String>,
    /// Legacy user identifier.
    #[serde(default)]
    pub uid: Option<String>,
}

impl std::fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("scope", &self.scope)
            .field("account_id", &self.account_id)
            .field("uid", &self.uid)
            .finish()
    }
}

/// OAuth error response.
#[derive(Debug, Deserialize)]
struct OAuthErrorResponse {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}
