//! # dbx-files
//!
//! The Dropbox files namespace: metadata types, per-endpoint error
//! vocabularies and typed endpoint contracts, plus `FilesClient`, a typed
//! method surface over the shared request pipeline.
//!
//! ## Example
//!
//! ```rust,ignore
//! use dbx_auth::DropboxCredentials;
//! use dbx_files::{FilesClient, ListFolderArg};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = DropboxCredentials::from_env()?;
//!     let client = FilesClient::new(credentials)?;
//!
//!     let page = client.list_folder(&ListFolderArg::new("")).await?;
//!     for entry in &page.entries {
//!         println!("{}", entry.name());
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod endpoints;
mod errors;
mod metadata;

pub use client::FilesClient;
pub use endpoints::{
    CopyV2, CreateFolderArg, CreateFolderResult, CreateFolderV2, DeleteArg, DeleteResult,
    DeleteV2, GetMetadata, GetMetadataArg, ListFolder, ListFolderArg, ListFolderContinue,
    ListFolderContinueArg, ListFolderResult, MoveV2, RelocationArg, RelocationResult, REGISTRY,
};
pub use errors::{
    CreateFolderError, DeleteError, GetMetadataError, ListFolderContinueError, ListFolderError,
    LookupError, RelocationError, WriteConflictError, WriteError,
};
pub use metadata::{DeletedMetadata, FileMetadata, FolderMetadata, Metadata};
