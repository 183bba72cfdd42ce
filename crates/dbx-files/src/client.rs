//! Typed client surface for the files namespace.

use dbx_client::{ClientConfig, Credential, DropboxClient, Result};

use crate::endpoints::{
    CopyV2, CreateFolderArg, CreateFolderV2, DeleteArg, DeleteResult, DeleteV2, GetMetadata,
    GetMetadataArg, ListFolder, ListFolderArg, ListFolderContinue, ListFolderContinueArg,
    ListFolderResult, MoveV2, RelocationArg, RelocationResult,
};
use crate::errors::{
    CreateFolderError, DeleteError, GetMetadataError, ListFolderContinueError, ListFolderError,
    RelocationError,
};
use crate::metadata::{FolderMetadata, Metadata};

/// Client for the files namespace, bound to one credential.
#[derive(Debug, Clone)]
pub struct FilesClient<C> {
    client: DropboxClient<C>,
}

impl<C: Credential> FilesClient<C> {
    /// Create a new files client with default transport configuration.
    pub fn new(credential: C) -> Result<Self> {
        Ok(Self {
            client: DropboxClient::new(credential)?,
        })
    }

    /// Create a new files client with custom transport configuration.
    pub fn with_config(credential: C, config: ClientConfig) -> Result<Self> {
        Ok(Self {
            client: DropboxClient::with_config(credential, config)?,
        })
    }

    /// Wrap an existing executor.
    pub fn from_client(client: DropboxClient<C>) -> Self {
        Self { client }
    }

    /// The underlying executor.
    pub fn inner(&self) -> &DropboxClient<C> {
        &self.client
    }

    /// Get metadata for a file or folder.
    pub async fn get_metadata(
        &self,
        arg: &GetMetadataArg,
    ) -> Result<Metadata, GetMetadataError> {
        self.client.execute::<GetMetadata>(arg).await
    }

    /// List the first page of a folder's contents.
    pub async fn list_folder(
        &self,
        arg: &ListFolderArg,
    ) -> Result<ListFolderResult, ListFolderError> {
        self.client.execute::<ListFolder>(arg).await
    }

    /// Fetch the next page of a folder listing.
    pub async fn list_folder_continue(
        &self,
        arg: &ListFolderContinueArg,
    ) -> Result<ListFolderResult, ListFolderContinueError> {
        self.client.execute::<ListFolderContinue>(arg).await
    }

    /// Create a folder.
    pub async fn create_folder(
        &self,
        arg: &CreateFolderArg,
    ) -> Result<FolderMetadata, CreateFolderError> {
        let result = self.client.execute::<CreateFolderV2>(arg).await?;
        Ok(result.metadata)
    }

    /// Delete a file or folder.
    pub async fn delete(&self, arg: &DeleteArg) -> Result<DeleteResult, DeleteError> {
        self.client.execute::<DeleteV2>(arg).await
    }

    /// Move a file or folder.
    pub async fn move_v2(
        &self,
        arg: &RelocationArg,
    ) -> Result<RelocationResult, RelocationError> {
        self.client.execute::<MoveV2>(arg).await
    }

    /// Copy a file or folder.
    pub async fn copy_v2(
        &self,
        arg: &RelocationArg,
    ) -> Result<RelocationResult, RelocationError> {
        self.client.execute::<CopyV2>(arg).await
    }
}
