//! The credential collaborator seam.
//!
//! The executor only needs three things from a credential: the current
//! bearer token, whether a fresh one can be obtained, and the refresh
//! operation itself. Concrete OAuth credentials live in `dbx-auth`; a
//! fixed-token implementation is provided here for the common case.

use std::future::Future;

/// Error returned by a credential's refresh operation.
///
/// Refresh failures are propagated as-is: the executor wraps them in
/// `ErrorKind::Refresh` with the original error kept as the source.
pub type RefreshError = Box<dyn std::error::Error + Send + Sync>;

/// A credential bound to an authenticated session.
///
/// The access token may be replaced in place by `refresh`; callers re-read
/// it before every request attempt.
pub trait Credential: Send + Sync {
    /// The current access token.
    fn access_token(&self) -> String;

    /// Whether this credential can obtain a fresh access token.
    fn can_refresh(&self) -> bool;

    /// Obtain a fresh access token, replacing the current one in place.
    ///
    /// Called at most once per logical request, only after the server
    /// reported the current token expired.
    fn refresh(&self) -> impl Future<Output = Result<(), RefreshError>> + Send;
}

/// Credential backed by a fixed access token with no refresh capability.
///
/// The token is redacted in Debug output.
#[derive(Clone)]
pub struct StaticToken {
    token: String,
}

impl std::fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticToken")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl StaticToken {
    /// Create a credential from a long-lived access token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl Credential for StaticToken {
    fn access_token(&self) -> String {
        self.token.clone()
    }

    fn can_refresh(&self) -> bool {
        false
    }

    async fn refresh(&self) -> Result<(), RefreshError> {
        Err("static token credential does not support refresh".into())
    }
}
