//! Recent-entries extraction for VS Code builds

pub mod build;
pub mod entry;
pub mod error;
pub mod store;

/// URI scheme of folders opened through a remote-development connection
pub const REMOTE_SCHEME: &str = "vscode-remote";

pub use build::{Build, BuildTable};
pub use entry::{EntryKind, EntryLike, FileEntry, FolderEntry, RemoteEntry, WorkspaceEntry};
pub use error::StoreError;
pub use store::{RecentEntries, RecentEntryStore, StorageLocation};
