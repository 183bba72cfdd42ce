//! # dbx-client
//!
//! Core request pipeline for the Dropbox API.
//!
//! This crate provides the shared execution path every endpoint goes
//! through: building a wire request, sending it over the transport,
//! classifying the response, recovering once from an expired access token,
//! and decoding the body into a typed result or a typed error.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Endpoint crates (dbx-files, ...)            │
//! │  - Declarative contracts: method, path, payload shapes     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      DropboxClient                          │
//! │  - Binds one credential to the transport                    │
//! │  - classify: status → success path / error kind             │
//! │  - build_result: payload → typed result / typed API error   │
//! │  - one-shot refresh-and-retry on expired tokens             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      DbxHttpClient                           │
//! │  - reqwest transport: send RequestSpec, collect RawResponse │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use dbx_client::{DropboxClient, StaticToken};
//! use dbx_files::{GetMetadata, GetMetadataArg};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DropboxClient::new(StaticToken::new("access-token"))?;
//!
//!     let metadata = client
//!         .execute::<GetMetadata>(&GetMetadataArg::new("/hello.txt"))
//!         .await?;
//!
//!     println!("{metadata:?}");
//!     Ok(())
//! }
//! ```

mod classify;
mod client;
mod config;
mod credential;
mod dropbox_client;
mod endpoint;
mod error;
mod request;
mod response;
mod result;

pub use classify::classify;
pub use client::DbxHttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use credential::{Credential, RefreshError, StaticToken};
pub use dropbox_client::DropboxClient;
pub use endpoint::{describe, Endpoint, EndpointDescriptor};
pub use error::{Error, ErrorKind, NoError, Result};
pub use request::{RequestMethod, RequestSpec};
pub use response::RawResponse;
pub use result::build_result;

/// Base URL for RPC endpoints.
pub const API_BASE_URL: &str = "https://api.dropboxapi.com/2";

/// User-Agent string for the client.
pub const USER_AGENT: &str = concat!("dropbox-api/", env!("CARGO_PKG_VERSION"));
