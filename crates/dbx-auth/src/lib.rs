//! # dbx-auth
//!
//! Dropbox authentication: OAuth 2.0 flows and credentials management.
//!
//! `DropboxCredentials` is the credential type the request pipeline binds
//! to. It carries a short-lived access token plus the optional refresh
//! material (refresh token, app key, app secret) needed to replace it when
//! it expires. `OAuthClient` speaks to the token endpoint directly for the
//! initial authorization-code exchange.
//!
//! ## Example
//!
//! ```rust,ignore
//! use dbx_auth::DropboxCredentials;
//!
//! let credentials = DropboxCredentials::new("sl.access-token")
//!     .with_refresh_token("refresh-token")
//!     .with_app_key("app-key")
//!     .with_app_secret("app-secret");
//! ```

mod credentials;
mod error;
mod oauth;

pub use credentials::DropboxCredentials;
pub use error::{Error, ErrorKind, Result};
pub use oauth::{OAuthClient, OAuthConfig, TokenResponse, AUTHORIZE_URL, TOKEN_URL};
