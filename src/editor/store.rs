//! Recent entry store
//!
//! VS Code keeps its "Open Recent" list in the global state database:
//! `<app support>/<build>/User/globalStorage/state.vscdb`, table `ItemTable`,
//! key `history.recentlyOpenedPathsList`. The value is itself a JSON document:
//!
//! ```json
//! {"entries": [{"folderUri": "file:///..."}, {"fileUri": "file:///..."}]}
//! ```
//!
//! Older releases kept the same document in `storage.json` next to the
//! database, under `openedPathsList`. That file is only read when the
//! database is missing.

use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags, OptionalExtension};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use super::build::Build;
use super::entry::EntryLike;
use super::error::{Result, StoreError};
use crate::config;

/// Global state database file name
pub const STATE_DB_FILE: &str = "state.vscdb";

/// Legacy global storage file name
pub const LEGACY_STORAGE_FILE: &str = "storage.json";

/// `ItemTable` key holding the recent list
pub const RECENT_LIST_KEY: &str = "history.recentlyOpenedPathsList";

/// `storage.json` key holding the recent list in older releases
pub const LEGACY_RECENT_LIST_KEY: &str = "openedPathsList";

/// Where a build persists its recent list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageLocation {
    /// SQLite state database
    StateDb(PathBuf),
    /// Legacy JSON storage file
    LegacyJson(PathBuf),
}

impl StorageLocation {
    pub fn path(&self) -> &Path {
        match self {
            Self::StateDb(p) | Self::LegacyJson(p) => p,
        }
    }
}

/// Resolve the storage location of `build` under the application-support root
pub fn resolve_storage_location(root: &Path, build: &Build) -> Result<StorageLocation> {
    let storage_dir = config::global_storage_dir(root, build);

    let db_path = storage_dir.join(STATE_DB_FILE);
    if db_path.is_file() {
        return Ok(StorageLocation::StateDb(db_path));
    }

    let legacy_path = storage_dir.join(LEGACY_STORAGE_FILE);
    if legacy_path.is_file() {
        return Ok(StorageLocation::LegacyJson(legacy_path));
    }

    Err(StoreError::StorageNotFound {
        build: build.name.to_string(),
        path: db_path,
    })
}

/// The embedded recent-list document
#[derive(Debug, Deserialize)]
struct RecentlyOpened {
    entries: Vec<Value>,
}

/// Reads the recent list of one editor build
///
/// The store holds no state besides its configuration; every call re-reads
/// storage.
#[derive(Debug, Clone)]
pub struct RecentEntryStore {
    build: Build,
    root: PathBuf,
}

impl RecentEntryStore {
    /// Create a store for `build` under the application-support root `root`
    pub fn new(build: Build, root: impl Into<PathBuf>) -> Self {
        Self {
            build,
            root: root.into(),
        }
    }

    pub fn from_settings(settings: &config::Settings) -> Self {
        Self::new(settings.build.clone(), settings.data_dir.clone())
    }

    pub fn build(&self) -> &Build {
        &self.build
    }

    /// Resolve where the selected build keeps its recent list
    pub fn resolve_location(&self) -> Result<StorageLocation> {
        resolve_storage_location(&self.root, &self.build)
    }

    /// Load the recent list without blocking the async runtime
    ///
    /// The read runs on tokio's blocking pool; the result preserves the
    /// persisted order.
    pub async fn get_recent_entries(&self) -> Result<RecentEntries> {
        let store = self.clone();
        tokio::task::spawn_blocking(move || store.read_recent_entries()).await?
    }

    /// Blocking variant of [`get_recent_entries`](Self::get_recent_entries)
    pub fn read_recent_entries(&self) -> Result<RecentEntries> {
        let location = self.resolve_location()?;
        let records = match &location {
            StorageLocation::StateDb(path) => read_state_db(path)?,
            StorageLocation::LegacyJson(path) => read_legacy_json(path)?,
        };
        Ok(RecentEntries::new(location, records))
    }
}

/// Read the raw records from a state database
fn read_state_db(db_path: &Path) -> Result<Vec<Value>> {
    // Open database in read-only mode
    let conn = Connection::open_with_flags(
        db_path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|e| StoreError::parse(&format!("Failed to open {}", db_path.display()), e))?;

    // The editor writes TEXT, but some builds have stored BLOBs
    let raw: Option<Vec<u8>> = conn
        .query_row(
            "SELECT value FROM ItemTable WHERE key = ?1",
            [RECENT_LIST_KEY],
            |row| {
                Ok(match row.get_ref(0)? {
                    ValueRef::Text(bytes) | ValueRef::Blob(bytes) => Some(bytes.to_vec()),
                    _ => None,
                })
            },
        )
        .optional()
        .map_err(|e| StoreError::parse(&format!("Failed to query {}", db_path.display()), e))?
        .flatten();

    let Some(raw) = raw else {
        return Err(StoreError::Parse(format!(
            "key {} not found in {}",
            RECENT_LIST_KEY,
            db_path.display()
        )));
    };

    let doc: RecentlyOpened = serde_json::from_slice(&raw)
        .map_err(|e| StoreError::parse(&format!("Invalid {}", RECENT_LIST_KEY), e))?;

    Ok(doc.entries)
}

/// Read the raw records from a legacy storage.json
fn read_legacy_json(path: &Path) -> Result<Vec<Value>> {
    let content = fs::read_to_string(path)
        .map_err(|e| StoreError::parse(&format!("Failed to read {}", path.display()), e))?;

    let mut json: Value = serde_json::from_str(&content)
        .map_err(|e| StoreError::parse(&format!("Failed to parse {}", path.display()), e))?;

    let Some(list) = json.get_mut(LEGACY_RECENT_LIST_KEY).map(Value::take) else {
        return Err(StoreError::Parse(format!(
            "key {} not found in {}",
            LEGACY_RECENT_LIST_KEY,
            path.display()
        )));
    };

    let doc: RecentlyOpened = serde_json::from_value(list)
        .map_err(|e| StoreError::parse(&format!("Invalid {}", LEGACY_RECENT_LIST_KEY), e))?;

    Ok(doc.entries)
}

/// Single-pass sequence of classified entries in persisted order
///
/// Records that match no known shape are skipped; [`skipped`](Self::skipped)
/// counts them as the sequence is consumed.
#[derive(Debug)]
pub struct RecentEntries {
    location: StorageLocation,
    records: std::vec::IntoIter<Value>,
    skipped: usize,
}

impl RecentEntries {
    fn new(location: StorageLocation, records: Vec<Value>) -> Self {
        Self {
            location,
            records: records.into_iter(),
            skipped: 0,
        }
    }

    /// Storage the entries were read from
    pub fn location(&self) -> &StorageLocation {
        &self.location
    }

    /// Number of records skipped so far
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl Iterator for RecentEntries {
    type Item = EntryLike;

    fn next(&mut self) -> Option<EntryLike> {
        for record in self.records.by_ref() {
            match EntryLike::classify(&record) {
                Some(entry) => return Some(entry),
                None => self.skipped += 1,
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.records.len()))
    }
}
