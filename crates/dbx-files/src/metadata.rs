//! Metadata types for entries in a user's Dropbox.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata for a file, folder or deleted entry.
///
/// The wire representation is an open union tagged with `.tag`; entries
/// with unrecognized tags fail to decode rather than being silently
/// mislabeled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum Metadata {
    /// A file.
    File(FileMetadata),
    /// A folder.
    Folder(FolderMetadata),
    /// A deleted entry (only returned when deleted entries are requested).
    Deleted(DeletedMetadata),
}

impl Metadata {
    /// The entry's name (last path component).
    pub fn name(&self) -> &str {
        match self {
            Metadata::File(f) => &f.name,
            Metadata::Folder(f) => &f.name,
            Metadata::Deleted(d) => &d.name,
        }
    }

    /// The entry's lowercased path, when the entry is mounted.
    pub fn path_lower(&self) -> Option<&str> {
        match self {
            Metadata::File(f) => f.path_lower.as_deref(),
            Metadata::Folder(f) => f.path_lower.as_deref(),
            Metadata::Deleted(d) => d.path_lower.as_deref(),
        }
    }
}

/// Metadata for a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileMetadata {
    /// Name of the file (last path component).
    pub name: String,
    /// Unique identifier, e.g. `id:a4ayc_80_OEAAAAAAAAAXw`.
    pub id: String,
    /// Lowercased full path. Absent for unmounted entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_lower: Option<String>,
    /// Cased path, best-effort. Absent for unmounted entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_display: Option<String>,
    /// Modification time reported by the client that uploaded the file.
    pub client_modified: DateTime<Utc>,
    /// Last time the file was modified on Dropbox.
    pub server_modified: DateTime<Utc>,
    /// Revision identifier.
    pub rev: String,
    /// File size in bytes.
    pub size: u64,
    /// Content hash, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_hash: Option<String>,
}

/// Metadata for a folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderMetadata {
    /// Name of the folder (last path component).
    pub name: String,
    /// Unique identifier.
    pub id: String,
    /// Lowercased full path. Absent for unmounted entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_lower: Option<String>,
    /// Cased path, best-effort. Absent for unmounted entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_display: Option<String>,
}

/// Metadata for a deleted entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletedMetadata {
    /// Name of the deleted entry (last path component).
    pub name: String,
    /// Lowercased full path, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_lower: Option<String>,
    /// Cased path, best-effort.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_display: Option<String>,
}
