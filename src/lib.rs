//! # dropbox-api
//!
//! A Dropbox API client library for Rust.
//!
//! This crate re-exports the workspace's API surfaces behind feature
//! flags. The default feature set (`full`) enables everything.
//!
//! | Feature  | Crate        | Surface                                   |
//! |----------|--------------|-------------------------------------------|
//! | `client` | `dbx-client` | Request pipeline, transport, error model  |
//! | `auth`   | `dbx-auth`   | OAuth 2.0 flows, refreshable credentials  |
//! | `files`  | `dbx-files`  | Files namespace endpoints and types       |
//!
//! ## Security
//!
//! - Tokens and secrets are redacted in Debug output
//! - Tracing/logging skips credential parameters
//! - Error messages sanitize any credential data
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dropbox_api::auth::DropboxCredentials;
//! use dropbox_api::files::{FilesClient, GetMetadataArg};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = DropboxCredentials::from_env()?;
//!     let client = FilesClient::new(credentials)?;
//!
//!     let metadata = client
//!         .get_metadata(&GetMetadataArg::new("/hello.txt"))
//!         .await?;
//!     println!("{metadata:?}");
//!     Ok(())
//! }
//! ```

#[cfg(feature = "client")]
pub use dbx_client as client;

#[cfg(feature = "auth")]
pub use dbx_auth as auth;

#[cfg(feature = "files")]
pub use dbx_files as files;

// Commonly used types at the crate root.
#[cfg(feature = "client")]
pub use dbx_client::{ClientConfig, Credential, DropboxClient, Error, ErrorKind, StaticToken};

#[cfg(feature = "auth")]
pub use dbx_auth::DropboxCredentials;

#[cfg(feature = "files")]
pub use dbx_files::FilesClient;
