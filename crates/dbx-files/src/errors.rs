//! Error vocabularies for the files namespace.
//!
//! Each endpoint declares a top-level error union matching the `error`
//! object of its error envelope. Top-level unions are closed: a payload
//! whose discriminant is not listed fails to decode, and the pipeline
//! reports it as an unrecognized API error carrying the raw payload.
//! Nested vocabularies (`LookupError`, `WriteError`) are open unions with
//! a catch-all variant, since Dropbox extends them over time.

use serde::Deserialize;

/// Why a path lookup failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum LookupError {
    /// The path is malformed.
    #[error("malformed path")]
    MalformedPath {
        #[serde(default)]
        malformed_path: Option<String>,
    },
    /// Nothing exists at the given path.
    #[error("not found")]
    NotFound,
    /// The entry is a folder where a file was expected.
    #[error("not a file")]
    NotFile,
    /// The entry is a file where a folder was expected.
    #[error("not a folder")]
    NotFolder,
    /// The content is restricted (e.g. DMCA takedown).
    #[error("restricted content")]
    RestrictedContent,
    /// The operation does not support this content type.
    #[error("unsupported content type")]
    UnsupportedContentType,
    /// The entry is locked.
    #[error("locked")]
    Locked,
    /// A lookup failure this client does not know about.
    #[error("unrecognized lookup error")]
    #[serde(other)]
    Other,
}

/// Why a write to the user's Dropbox failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum WriteError {
    /// The path is malformed.
    #[error("malformed path")]
    MalformedPath {
        #[serde(default)]
        malformed_path: Option<String>,
    },
    /// Something already exists at the target path.
    #[error("conflict: {conflict}")]
    Conflict { conflict: WriteConflictError },
    /// The user lacks write permission at this location.
    #[error("no write permission")]
    NoWritePermission,
    /// The user's Dropbox is out of space.
    #[error("insufficient space")]
    InsufficientSpace,
    /// Dropbox disallows this file name.
    #[error("disallowed name")]
    DisallowedName,
    /// The operation targets a team folder.
    #[error("team folder")]
    TeamFolder,
    /// Too many concurrent write operations on this namespace.
    #[error("too many write operations")]
    TooManyWriteOperations,
    /// A write failure this client does not know about.
    #[error("unrecognized write error")]
    #[serde(other)]
    Other,
}

/// What the write conflicted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum WriteConflictError {
    /// A file at the target path.
    #[error("file")]
    File,
    /// A folder at the target path.
    #[error("folder")]
    Folder,
    /// A file in the target path's ancestry.
    #[error("file ancestor")]
    FileAncestor,
    /// A conflict this client does not know about.
    #[error("unrecognized conflict")]
    #[serde(other)]
    Other,
}

/// Error union for `files/get_metadata`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum GetMetadataError {
    /// The path lookup failed.
    #[error("path: {path}")]
    Path { path: LookupError },
}

/// Error union for `files/list_folder`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum ListFolderError {
    /// The path lookup failed.
    #[error("path: {path}")]
    Path { path: LookupError },
}

/// Error union for `files/list_folder/continue`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum ListFolderContinueError {
    /// The path lookup failed.
    #[error("path: {path}")]
    Path { path: LookupError },
    /// The cursor is invalid; restart the listing from scratch.
    #[error("reset")]
    Reset,
}

/// Error union for `files/create_folder_v2`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum CreateFolderError {
    /// The write failed.
    #[error("path: {path}")]
    Path { path: WriteError },
}

/// Error union for `files/delete_v2`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum DeleteError {
    /// Looking up the entry to delete failed.
    #[error("path lookup: {path_lookup}")]
    PathLookup { path_lookup: LookupError },
    /// Deleting the entry failed.
    #[error("path write: {path_write}")]
    PathWrite { path_write: WriteError },
}

/// Error union for `files/move_v2` and `files/copy_v2`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum RelocationError {
    /// Looking up the source failed.
    #[error("from lookup: {from_lookup}")]
    FromLookup { from_lookup: LookupError },
    /// Writing at the source failed.
    #[error("from write: {from_write}")]
    FromWrite { from_write: WriteError },
    /// Writing at the destination failed.
    #[error("to: {to}")]
    To { to: WriteError },
    /// A folder cannot be moved into itself.
    #[error("cannot move a folder into itself")]
    CantMoveFolderIntoItself,
    /// The operation involves too many files.
    #[error("too many files")]
    TooManyFiles,
    /// Source and destination paths are duplicated or nested.
    #[error("duplicated or nested paths")]
    DuplicatedOrNestedPaths,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_not_found() {
        let json = serde_json::json!({
            ".tag": "path",
            "path": {".tag": "not_found"}
        });

        let err: GetMetadataError = serde_json::from_value(json).unwrap();
        assert_eq!(
            err,
            GetMetadataError::Path {
                path: LookupError::NotFound
            }
        );
        assert_eq!(err.to_string(), "path: not found");
    }

    #[test]
    fn test_decode_malformed_path_with_detail() {
        let json = serde_json::json!({
            ".tag": "path",
            "path": {".tag": "malformed_path", "malformed_path": "no-leading-slash"}
        });

        let err: ListFolderError = serde_json::from_value(json).unwrap();
        assert_eq!(
            err,
            ListFolderError::Path {
                path: LookupError::MalformedPath {
                    malformed_path: Some("no-leading-slash".to_string())
                }
            }
        );
    }

    #[test]
    fn test_unknown_nested_lookup_tag_maps_to_other() {
        let json = serde_json::json!({
            ".tag": "path",
            "path": {".tag": "some_future_failure"}
        });

        let err: GetMetadataError = serde_json::from_value(json).unwrap();
        assert_eq!(
            err,
            GetMetadataError::Path {
                path: LookupError::Other
            }
        );
    }

    #[test]
    fn test_unknown_top_level_tag_fails_to_decode() {
        // Closed top-level unions: unrecognized discriminants must error so
        // the pipeline falls back to the raw payload.
        let json = serde_json::json!({".tag": "some_future_failure"});
        assert!(serde_json::from_value::<GetMetadataError>(json).is_err());
    }

    #[test]
    fn test_decode_write_conflict() {
        let json = serde_json::json!({
            ".tag": "path",
            "path": {".tag": "conflict", "conflict": {".tag": "folder"}}
        });

        let err: CreateFolderError = serde_json::from_value(json).unwrap();
        assert_eq!(
            err,
            CreateFolderError::Path {
                path: WriteError::Conflict {
                    conflict: WriteConflictError::Folder
                }
            }
        );
        assert_eq!(err.to_string(), "path: conflict: folder");
    }

    #[test]
    fn test_decode_delete_error_variants() {
        let lookup = serde_json::json!({
            ".tag": "path_lookup",
            "path_lookup": {".tag": "not_found"}
        });
        let err: DeleteError = serde_json::from_value(lookup).unwrap();
        assert!(matches!(err, DeleteError::PathLookup { .. }));

        let write = serde_json::json!({
            ".tag": "path_write",
            "path_write": {".tag": "too_many_write_operations"}
        });
        let err: DeleteError = serde_json::from_value(write).unwrap();
        assert_eq!(
            err,
            DeleteError::PathWrite {
                path_write: WriteError::TooManyWriteOperations
            }
        );
    }

    #[test]
    fn test_decode_relocation_errors() {
        let json = serde_json::json!({
            ".tag": "from_lookup",
            "from_lookup": {".tag": "not_found"}
        });
        let err: RelocationError = serde_json::from_value(json).unwrap();
        assert_eq!(
            err,
            RelocationError::FromLookup {
                from_lookup: LookupError::NotFound
            }
        );

        let json = serde_json::json!({".tag": "cant_move_folder_into_itself"});
        let err: RelocationError = serde_json::from_value(json).unwrap();
        assert_eq!(err, RelocationError::CantMoveFolderIntoItself);
    }

    #[test]
    fn test_decode_list_folder_continue_reset() {
        let json = serde_json::json!({".tag": "reset"});
        let err: ListFolderContinueError = serde_json::from_value(json).unwrap();
        assert_eq!(err, ListFolderContinueError::Reset);
    }
}
