//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::Connection;
use tempfile::TempDir;

pub const RECENT_LIST_KEY: &str = "history.recentlyOpenedPathsList";

/// Builder for a fake application-support directory
pub struct AppSupportBuilder {
    temp_dir: TempDir,
}

impl AppSupportBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Path to pass as `--data-dir`
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    fn global_storage(&self, build_dir: &str) -> PathBuf {
        let dir = self
            .temp_dir
            .path()
            .join(build_dir)
            .join("User")
            .join("globalStorage");
        fs::create_dir_all(&dir).expect("Failed to create globalStorage dir");
        dir
    }

    /// Add a state.vscdb for `build_dir` holding `recent` under the recent-list key
    pub fn with_state_db(self, build_dir: &str, recent: Option<&str>) -> Self {
        let db_path = self.global_storage(build_dir).join("state.vscdb");
        let conn = Connection::open(db_path).expect("Failed to create state.vscdb");
        conn.execute(
            "CREATE TABLE ItemTable (key TEXT UNIQUE ON CONFLICT REPLACE, value BLOB)",
            [],
        )
        .expect("Failed to create ItemTable");
        if let Some(recent) = recent {
            conn.execute(
                "INSERT INTO ItemTable (key, value) VALUES (?1, ?2)",
                [RECENT_LIST_KEY, recent],
            )
            .expect("Failed to insert recent list");
        }
        self
    }

    /// Add a legacy storage.json for `build_dir`
    pub fn with_storage_json(self, build_dir: &str, content: &str) -> Self {
        let path = self.global_storage(build_dir).join("storage.json");
        fs::write(path, content).expect("Failed to write storage.json");
        self
    }

    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for AppSupportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Document with one folder, one file and one labelled remote
pub const SCENARIO: &str = r#"{"entries":[{"folderUri":"file:///Users/a/proj"},{"fileUri":"file:///Users/a/notes.txt"},{"folderUri":"vscode-remote://ssh-remote+host/srv/app","label":"srv"}]}"#;

/// Document with all four kinds, out of section order
pub const MIXED: &str = r#"{"entries":[
    {"fileUri":"file:///Users/a/todo.md"},
    {"folderUri":"file:///Users/a/my%20project"},
    {"workspace":{"id":"1a2b","configPath":"file:///Users/a/team.code-workspace"}},
    {"folderUri":"vscode-remote://wsl+Ubuntu/home/a/api","remoteAuthority":"wsl+Ubuntu"},
    {"label":"orphan"},
    {"folderUri":"file:///Users/a/second"}
]}"#;
