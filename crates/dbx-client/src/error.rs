//! Error types for dbx-client.
//!
//! The error type is generic over the endpoint's application-error
//! vocabulary: `Error<AE>` where `AE` is the endpoint contract's closed
//! error union. Pipeline-level failures (transport, expired token, rate
//! limiting, unexpected statuses) use the same set of kinds for every
//! endpoint.

use std::fmt;

/// Result type alias for dbx-client operations.
pub type Result<T, AE = NoError> = std::result::Result<T, Error<AE>>;

/// Placeholder vocabulary for operations that carry no endpoint-specific
/// errors. Uninhabited, so `ErrorKind::Api` can never be constructed for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
pub enum NoError {}

impl fmt::Display for NoError {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl std::error::Error for NoError {}

/// Error type for dbx-client operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error<AE: std::error::Error = NoError> {
    /// The kind of error that occurred.
    pub kind: ErrorKind<AE>,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl<AE: std::error::Error> Error<AE> {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind<AE>) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind<AE>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if this error was caused by an expired access token.
    pub fn is_expired_credential(&self) -> bool {
        matches!(self.kind, ErrorKind::ExpiredCredential { .. })
    }

    /// Returns true if this is a rate limit error (HTTP 429).
    pub fn is_rate_limited(&self) -> bool {
        matches!(self.kind, ErrorKind::TooManyRequests { .. })
    }

    /// Returns the retry-after hint in seconds if this is a rate limit error.
    pub fn retry_after(&self) -> Option<u64> {
        match self.kind {
            ErrorKind::TooManyRequests { retry_after, .. } => Some(retry_after),
            _ => None,
        }
    }

    /// Returns the typed endpoint error if this is an application error.
    pub fn api_error(&self) -> Option<&AE> {
        match &self.kind {
            ErrorKind::Api { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl Error<NoError> {
    /// Widen a pipeline error into an endpoint-typed error.
    ///
    /// Every kind except `Api` is independent of the endpoint vocabulary,
    /// and `Api` is unconstructible for `NoError`.
    pub fn widen<AE: std::error::Error>(self) -> Error<AE> {
        let kind = match self.kind {
            ErrorKind::Transport(m) => ErrorKind::Transport(m),
            ErrorKind::Timeout => ErrorKind::Timeout,
            ErrorKind::Connection(m) => ErrorKind::Connection(m),
            ErrorKind::ExpiredCredential { summary } => ErrorKind::ExpiredCredential { summary },
            ErrorKind::TooManyRequests {
                summary,
                reason,
                retry_after,
            } => ErrorKind::TooManyRequests {
                summary,
                reason,
                retry_after,
            },
            ErrorKind::Api { error, .. } => match error {},
            ErrorKind::UnknownApi { summary, payload } => {
                ErrorKind::UnknownApi { summary, payload }
            }
            ErrorKind::Http { status, body } => ErrorKind::Http { status, body },
            ErrorKind::Refresh(m) => ErrorKind::Refresh(m),
            ErrorKind::Json(m) => ErrorKind::Json(m),
            ErrorKind::Config(m) => ErrorKind::Config(m),
        };
        Error {
            kind,
            source: self.source,
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind<AE: std::error::Error = NoError> {
    /// Network-level failure from the transport. Never retried here.
    #[error("transport error: {0}")]
    Transport(String),

    /// Request timeout.
    #[error("request timeout")]
    Timeout,

    /// Connection error.
    #[error("connection error: {0}")]
    Connection(String),

    /// HTTP 401: the access token is expired or revoked. Triggers one
    /// refresh-and-retry when the bound credential supports refresh.
    #[error("expired access token: {summary}")]
    ExpiredCredential { summary: String },

    /// HTTP 429. Carries the retry-after hint; retry scheduling is the
    /// caller's responsibility.
    #[error("too many requests: {summary} (retry after {retry_after}s)")]
    TooManyRequests {
        summary: String,
        /// Reason discriminant tag, e.g. `too_many_write_operations`.
        reason: String,
        /// Seconds from the `Retry-After` header; 0 when missing.
        retry_after: u64,
    },

    /// Endpoint-specific error decoded from a 200/409 error envelope.
    #[error("API error: {summary}")]
    Api { summary: String, error: AE },

    /// Error envelope whose discriminant is not in the endpoint's
    /// vocabulary. Distinct from `Api` so unrecognized tags never pass as
    /// success or panic.
    #[error("unknown API error: {summary}")]
    UnknownApi {
        summary: String,
        payload: serde_json::Value,
    },

    /// Any other HTTP status. Carries the raw status and body text.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Access-token refresh failed. The auth error is preserved unchanged
    /// as the error source.
    #[error("token refresh failed: {0}")]
    Refresh(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl<AE: std::error::Error> From<reqwest::Error> for Error<AE> {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ErrorKind::Timeout
        } else if err.is_connect() {
            ErrorKind::Connection(err.to_string())
        } else {
            ErrorKind::Transport(err.to_string())
        };

        Error::with_source(kind, err)
    }
}

impl<AE: std::error::Error> From<serde_json::Error> for Error<AE> {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}
