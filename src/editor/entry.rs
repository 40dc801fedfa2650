//! Recent entry records
//!
//! The editor persists its recent list as an array of loosely shaped JSON
//! objects. Which kind of entry a record describes is given by the field it
//! carries:
//!
//! - `{"workspace": {"configPath": "..."}}` - multi-root workspace file
//! - `{"folderUri": "..."}` - folder, remote when the scheme is `vscode-remote`
//! - `{"fileUri": "..."}` - single file
//!
//! Any record may also carry a `label` (and `remoteAuthority`, which we don't need).

use serde::Serialize;
use serde_json::Value;

use super::REMOTE_SCHEME;

/// A saved multi-root workspace configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkspaceEntry {
    pub config_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// A local folder opened directly
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderEntry {
    pub folder_uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// A folder on a remote host (SSH, WSL, tunnel, dev container...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoteEntry {
    pub folder_uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// A single file opened directly
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub file_uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Variant tag of an [`EntryLike`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Workspace,
    Folder,
    Remote,
    File,
}

impl EntryKind {
    /// All kinds, in display section order
    pub const ALL: [EntryKind; 4] = [
        EntryKind::Workspace,
        EntryKind::Folder,
        EntryKind::Remote,
        EntryKind::File,
    ];
}

/// One classified recent entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EntryLike {
    Workspace(WorkspaceEntry),
    Folder(FolderEntry),
    Remote(RemoteEntry),
    File(FileEntry),
}

impl EntryLike {
    /// Classify one raw record
    ///
    /// Returns `None` for records that match none of the known shapes,
    /// including non-objects and identifying fields that are not strings.
    pub fn classify(record: &Value) -> Option<Self> {
        let obj = record.as_object()?;
        let label = obj
            .get("label")
            .and_then(|v| v.as_str())
            .map(str::to_string);

        if let Some(config_path) = obj
            .get("workspace")
            .and_then(|w| w.get("configPath"))
            .and_then(|v| v.as_str())
        {
            return Some(Self::Workspace(WorkspaceEntry {
                config_path: config_path.to_string(),
                label,
            }));
        }

        if let Some(folder_uri) = obj.get("folderUri").and_then(|v| v.as_str()) {
            let folder_uri = folder_uri.to_string();
            return Some(if is_remote_uri(&folder_uri) {
                Self::Remote(RemoteEntry { folder_uri, label })
            } else {
                Self::Folder(FolderEntry { folder_uri, label })
            });
        }

        if let Some(file_uri) = obj.get("fileUri").and_then(|v| v.as_str()) {
            return Some(Self::File(FileEntry {
                file_uri: file_uri.to_string(),
                label,
            }));
        }

        None
    }

    /// The identifying URI (also the entry's identity)
    pub fn uri(&self) -> &str {
        match self {
            Self::Workspace(e) => &e.config_path,
            Self::Folder(e) => &e.folder_uri,
            Self::Remote(e) => &e.folder_uri,
            Self::File(e) => &e.file_uri,
        }
    }

    /// The persisted label, if any
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Workspace(e) => e.label.as_deref(),
            Self::Folder(e) => e.label.as_deref(),
            Self::Remote(e) => e.label.as_deref(),
            Self::File(e) => e.label.as_deref(),
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Workspace(_) => EntryKind::Workspace,
            Self::Folder(_) => EntryKind::Folder,
            Self::Remote(_) => EntryKind::Remote,
            Self::File(_) => EntryKind::File,
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }
}

/// Whether a URI uses the remote-development scheme
pub fn is_remote_uri(uri: &str) -> bool {
    uri.split_once("://")
        .is_some_and(|(scheme, _)| scheme.eq_ignore_ascii_case(REMOTE_SCHEME))
}
