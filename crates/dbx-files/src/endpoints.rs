//! Endpoint contracts for the files namespace.
//!
//! Each endpoint is a zero-sized marker type binding a wire path to its
//! parameter, response and error shapes. The contracts are consumed by the
//! request pipeline; `REGISTRY` enumerates them for discovery.

use dbx_client::{describe, Endpoint, EndpointDescriptor};
use serde::{Deserialize, Serialize};

use crate::errors::{
    CreateFolderError, DeleteError, GetMetadataError, ListFolderContinueError, ListFolderError,
    RelocationError,
};
use crate::metadata::{FolderMetadata, Metadata};

/// Every files endpoint this crate implements.
pub static REGISTRY: &[EndpointDescriptor] = &[
    describe::<GetMetadata>("get_metadata"),
    describe::<ListFolder>("list_folder"),
    describe::<ListFolderContinue>("list_folder_continue"),
    describe::<CreateFolderV2>("create_folder"),
    describe::<DeleteV2>("delete"),
    describe::<MoveV2>("move"),
    describe::<CopyV2>("copy"),
];

/// Arguments for `files/get_metadata`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetMetadataArg {
    /// Path of the entry, an id, or a revision.
    pub path: String,
    /// Include media info for photos and videos.
    #[serde(default)]
    pub include_media_info: bool,
    /// Include deleted entries.
    #[serde(default)]
    pub include_deleted: bool,
    /// Include a flag for files with explicit shared members.
    #[serde(default)]
    pub include_has_explicit_shared_members: bool,
}

impl GetMetadataArg {
    /// Metadata lookup with default options.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            include_media_info: false,
            include_deleted: false,
            include_has_explicit_shared_members: false,
        }
    }
}

/// `files/get_metadata`: metadata for a file or folder.
#[derive(Debug, Clone, Copy)]
pub struct GetMetadata;

impl Endpoint for GetMetadata {
    const PATH: &'static str = "files/get_metadata";
    type Params = GetMetadataArg;
    type Response = Metadata;
    type Error = GetMetadataError;
}

/// Arguments for `files/list_folder`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListFolderArg {
    /// Path of the folder; empty string for the root.
    pub path: String,
    /// List entries in all subfolders too.
    #[serde(default)]
    pub recursive: bool,
    /// Include deleted entries.
    #[serde(default)]
    pub include_deleted: bool,
    /// Maximum number of entries per page (server treats it as a hint).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl ListFolderArg {
    /// Listing with default options.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            recursive: false,
            include_deleted: false,
            limit: None,
        }
    }

    /// List entries in all subfolders.
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }
}

/// One page of a folder listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListFolderResult {
    /// Entries in this page.
    pub entries: Vec<Metadata>,
    /// Cursor for the next page.
    pub cursor: String,
    /// Whether more pages are available via `files/list_folder/continue`.
    pub has_more: bool,
}

/// `files/list_folder`: first page of a folder's contents.
#[derive(Debug, Clone, Copy)]
pub struct ListFolder;

impl Endpoint for ListFolder {
    const PATH: &'static str = "files/list_folder";
    type Params = ListFolderArg;
    type Response = ListFolderResult;
    type Error = ListFolderError;
}

/// Arguments for `files/list_folder/continue`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListFolderContinueArg {
    /// Cursor from a previous listing page.
    pub cursor: String,
}

impl ListFolderContinueArg {
    pub fn new(cursor: impl Into<String>) -> Self {
        Self {
            cursor: cursor.into(),
        }
    }
}

/// `files/list_folder/continue`: the next page of a folder listing.
#[derive(Debug, Clone, Copy)]
pub struct ListFolderContinue;

impl Endpoint for ListFolderContinue {
    const PATH: &'static str = "files/list_folder/continue";
    type Params = ListFolderContinueArg;
    type Response = ListFolderResult;
    type Error = ListFolderContinueError;
}

/// Arguments for `files/create_folder_v2`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateFolderArg {
    /// Path of the folder to create.
    pub path: String,
    /// Rename on conflict instead of failing.
    #[serde(default)]
    pub autorename: bool,
}

impl CreateFolderArg {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            autorename: false,
        }
    }
}

/// Result of `files/create_folder_v2`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateFolderResult {
    /// Metadata of the created folder.
    pub metadata: FolderMetadata,
}

/// `files/create_folder_v2`: create a folder.
#[derive(Debug, Clone, Copy)]
pub struct CreateFolderV2;

impl Endpoint for CreateFolderV2 {
    const PATH: &'static str = "files/create_folder_v2";
    type Params = CreateFolderArg;
    type Response = CreateFolderResult;
    type Error = CreateFolderError;
}

/// Arguments for `files/delete_v2`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteArg {
    /// Path of the entry to delete.
    pub path: String,
}

impl DeleteArg {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// Result of `files/delete_v2`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeleteResult {
    /// Metadata of the deleted entry.
    pub metadata: Metadata,
}

/// `files/delete_v2`: delete a file or folder.
#[derive(Debug, Clone, Copy)]
pub struct DeleteV2;

impl Endpoint for DeleteV2 {
    const PATH: &'static str = "files/delete_v2";
    type Params = DeleteArg;
    type Response = DeleteResult;
    type Error = DeleteError;
}

/// Arguments for `files/move_v2` and `files/copy_v2`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelocationArg {
    /// Source path.
    pub from_path: String,
    /// Destination path.
    pub to_path: String,
    /// Rename on conflict instead of failing.
    #[serde(default)]
    pub autorename: bool,
}

impl RelocationArg {
    pub fn new(from_path: impl Into<String>, to_path: impl Into<String>) -> Self {
        Self {
            from_path: from_path.into(),
            to_path: to_path.into(),
            autorename: false,
        }
    }
}

/// Result of `files/move_v2` and `files/copy_v2`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RelocationResult {
    /// Metadata of the entry at its new location.
    pub metadata: Metadata,
}

/// `files/move_v2`: move a file or folder.
#[derive(Debug, Clone, Copy)]
pub struct MoveV2;

impl Endpoint for MoveV2 {
    const PATH: &'static str = "files/move_v2";
    type Params = RelocationArg;
    type Response = RelocationResult;
    type Error = RelocationError;
}

/// `files/copy_v2`: copy a file or folder.
#[derive(Debug, Clone, Copy)]
pub struct CopyV2;

impl Endpoint for CopyV2 {
    const PATH: &'static str = "files/copy_v2";
    type Params = RelocationArg;
    type Response = RelocationResult;
    type Error = RelocationError;
}
