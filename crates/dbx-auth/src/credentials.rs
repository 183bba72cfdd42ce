//! Dropbox credentials with shared, refreshable access tokens.

use std::sync::{Arc, RwLock};

use tracing::{debug, instrument};

use crate::error::{Error, ErrorKind, Result};
use crate::oauth::{OAuthClient, OAuthConfig, TOKEN_URL};

/// Dropbox credentials: an access token plus the optional material needed
/// to refresh it.
///
/// Clones share the underlying token state, so a refresh performed through
/// one clone is visible to all of them. Tokens are redacted in Debug
/// output.
#[derive(Clone)]
pub struct DropboxCredentials {
    access_token: Arc<RwLock<String>>,
    refresh_token: Option<String>,
    app_key: Option<String>,
    app_secret: Option<String>,
    token_url: String,
    // Serializes concurrent refreshes across clones.
    refresh_gate: Arc<tokio::sync::Mutex<()>>,
}

impl std::fmt::Debug for DropboxCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DropboxCredentials")
            .field("access_token", &"[REDACTED]")
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("app_key", &self.app_key)
            .field("app_secret", &self.app_secret.as_ref().map(|_| "[REDACTED]"))
            .field("token_url", &self.token_url)
            .finish_non_exhaustive()
    }
}

impl DropboxCredentials {
    /// Create credentials from a bare access token. Not refreshable until
    /// a refresh token and app key are attached.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: Arc::new(RwLock::new(access_token.into())),
            refresh_token: None,
            app_key: None,
            app_secret: None,
            token_url: TOKEN_URL.to_string(),
            refresh_gate: Arc::new(tokio::sync::Mutex::new(())),
        }
    }

    /// Attach a refresh token.
    pub fn with_refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
        self.refresh_token = Some(refresh_token.into());
        self
    }

    /// Attach the app key (client_id) used for token refresh.
    pub fn with_app_key(mut self, app_key: impl Into<String>) -> Self {
        self.app_key = Some(app_key.into());
        self
    }

    /// Attach the app secret (client_secret) used for token refresh.
    pub fn with_app_secret(mut self, app_secret: impl Into<String>) -> Self {
        self.app_secret = Some(app_secret.into());
        self
    }

    /// Override the token endpoint (tests point this at a mock server).
    pub fn with_token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self
    }

    /// Load credentials from the environment.
    ///
    /// `DROPBOX_ACCESS_TOKEN` is required; `DROPBOX_REFRESH_TOKEN`,
    /// `DROPBOX_APP_KEY` and `DROPBOX_APP_SECRET` enable refresh when set.
    pub fn from_env() -> Result<Self> {
        let access_token = std::env::var("DROPBOX_ACCESS_TOKEN")
            .map_err(|_| Error::new(ErrorKind::EnvVar("DROPBOX_ACCESS_TOKEN".to_string())))?;

        let mut credentials = Self::new(access_token);
        if let Ok(refresh_token) = std::env::var("DROPBOX_REFRESH_TOKEN") {
            credentials = credentials.with_refresh_token(refresh_token);
        }
        if let Ok(app_key) = std::env::var("DROPBOX_APP_KEY") {
            credentials = credentials.with_app_key(app_key);
        }
        if let Ok(app_secret) = std::env::var("DROPBOX_APP_SECRET") {
            credentials = credentials.with_app_secret(app_secret);
        }
        Ok(credentials)
    }

    fn current_token(&self) -> String {
        self.access_token
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .clone()
    }

    fn store_token(&self, token: String) {
        *self
            .access_token
            .write()
            .unwrap_or_else(|p| p.into_inner()) = token;
    }

    /// Exchange the refresh token for a fresh access token and store it.
    ///
    /// Refreshes are single-flight: concurrent callers queue on an internal
    /// gate, and a caller that finds the token already replaced by the time
    /// it holds the gate skips the network exchange.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<()> {
        let refresh_token = self.refresh_token.as_deref().ok_or_else(|| {
            Error::new(ErrorKind::InvalidInput(
                "no refresh token configured".to_string(),
            ))
        })?;
        let app_key = self.app_key.as_deref().ok_or_else(|| {
            Error::new(ErrorKind::InvalidInput("no app key configured".to_string()))
        })?;

        let stale = self.current_token();
        let _gate = self.refresh_gate.lock().await;

        if self.current_token() != stale {
            debug!("token already refreshed by a concurrent caller");
            return Ok(());
        }

        let mut config = OAuthConfig::new(app_key);
        if let Some(ref secret) = self.app_secret {
            config = config.with_secret(secret);
        }

        let oauth = OAuthClient::new(config);
        let token = oauth.refresh_token(refresh_token, &self.token_url).await?;

        self.store_token(token.access_token);
        debug!("access token refreshed");
        Ok(())
    }
}

impl dbx_client::Credential for DropboxCredentials {
    fn access_token(&self) -> String {
        self.current_token()
    }

    fn can_refresh(&self) -> bool {
        self.refresh_token.is_some() && self.app_key.is_some()
    }

    async fn refresh(&self) -> std::result::Result<(), dbx_client::RefreshError> {
        DropboxCredentials::refresh(self)
            .await
            .map_err(|e| Box::new(e) as dbx_client::RefreshError)
    }
}
