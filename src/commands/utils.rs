//! Shared utilities for commands

use owo_colors::OwoColorize;
use percent_encoding::percent_decode_str;
use serde::Serialize;
use std::path::{Path, PathBuf};
use url::Url;

use code_recent::editor::{EntryKind, EntryLike, RecentEntryStore, StoreError};

/// Section title for an entry kind
pub fn section_title(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Workspace => "Workspaces",
        EntryKind::Folder => "Folders",
        EntryKind::Remote => "Remote Folders",
        EntryKind::File => "Files",
    }
}

/// Parse a `--section` value
pub fn parse_section(s: &str) -> Option<EntryKind> {
    match s.to_lowercase().as_str() {
        "workspace" | "workspaces" => Some(EntryKind::Workspace),
        "folder" | "folders" => Some(EntryKind::Folder),
        "remote" | "remotes" => Some(EntryKind::Remote),
        "file" | "files" => Some(EntryKind::File),
        _ => None,
    }
}

/// A recent entry prepared for display
#[derive(Debug, Clone, Serialize)]
pub struct Row {
    /// 1-based position in the sectioned listing
    pub index: usize,
    pub kind: EntryKind,
    /// Percent-decoded basename of the URI
    pub name: String,
    /// Parent directory (local) or label (remote)
    pub subtitle: String,
    pub uri: String,
    /// Local filesystem path, when the URI is a `file://` URI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Path with the home directory abbreviated to `~`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretty_path: Option<String>,
}

impl Row {
    fn new(entry: &EntryLike, home: Option<&Path>) -> Self {
        let uri = entry.uri().to_string();
        let name = display_name(&uri);

        let (path, pretty_path, subtitle) = if entry.is_remote() {
            let subtitle = entry.label().unwrap_or("/").to_string();
            (None, None, subtitle)
        } else {
            match local_path(&uri) {
                Some(path) => {
                    let pretty = tildify(&path, home);
                    let subtitle = parent_of(&pretty);
                    (Some(path), Some(pretty), subtitle)
                }
                // Non-file schemes (vscode-vfs, untitled...) have no local path
                None => (None, None, uri.clone()),
            }
        };

        Self {
            index: 0,
            kind: entry.kind(),
            name,
            subtitle,
            uri,
            path,
            pretty_path,
        }
    }

    /// Whether every search term matches the name or location
    ///
    /// Terms are matched case-insensitively; no terms matches everything.
    pub fn matches(&self, terms: &[String]) -> bool {
        let name = self.name.to_lowercase();
        let location = self
            .pretty_path
            .as_deref()
            .unwrap_or(&self.uri)
            .to_lowercase();
        let subtitle = self.subtitle.to_lowercase();

        terms.iter().all(|term| {
            let term = term.to_lowercase();
            name.contains(&term) || location.contains(&term) || subtitle.contains(&term)
        })
    }
}

/// Group entries into display sections (Workspaces, Folders, Remote Folders,
/// Files) and number them
///
/// Persisted order is kept inside each section.
pub fn build_rows(entries: impl IntoIterator<Item = EntryLike>, home: Option<&Path>) -> Vec<Row> {
    let entries: Vec<EntryLike> = entries.into_iter().collect();

    let mut rows: Vec<Row> = EntryKind::ALL
        .iter()
        .flat_map(|kind| entries.iter().filter(move |e| e.kind() == *kind))
        .map(|entry| Row::new(entry, home))
        .collect();

    for (i, row) in rows.iter_mut().enumerate() {
        row.index = i + 1;
    }

    rows
}

/// Load the recent list and prepare it for display
pub async fn load_rows(store: &RecentEntryStore, verbose: bool) -> Result<Vec<Row>, StoreError> {
    let mut entries = store.get_recent_entries().await?;
    let classified: Vec<EntryLike> = entries.by_ref().collect();

    if verbose {
        eprintln!(
            "{}",
            format!(
                "Read {} entries from {}",
                classified.len(),
                entries.location().path().display()
            )
            .dimmed()
        );
        if entries.skipped() > 0 {
            eprintln!(
                "{} skipped {} unrecognized record(s)",
                "Warning:".yellow(),
                entries.skipped()
            );
        }
    }

    let home = dirs::home_dir();
    Ok(build_rows(classified, home.as_deref()))
}

/// Pick a row by 1-based index, exact URI, or search query (first match)
///
/// A number that is not a listed index is searched for like any other text.
pub fn select<'a>(rows: &'a [Row], target: &str) -> Option<&'a Row> {
    if let Ok(index) = target.trim().parse::<usize>() {
        if let Some(row) = rows.iter().find(|r| r.index == index) {
            return Some(row);
        }
    }

    if let Some(row) = rows.iter().find(|r| r.uri == target) {
        return Some(row);
    }

    let terms: Vec<String> = target.split_whitespace().map(str::to_string).collect();
    if terms.is_empty() {
        return None;
    }
    rows.iter().find(|r| r.matches(&terms))
}

/// Percent-decoded last path segment of a URI
pub fn display_name(uri: &str) -> String {
    let trimmed = uri.trim_end_matches('/');
    let last = trimmed.rsplit('/').next().unwrap_or(trimmed);
    percent_decode_str(last).decode_utf8_lossy().into_owned()
}

/// Convert a `file://` URI to a local path
pub fn local_path(uri: &str) -> Option<PathBuf> {
    let url = Url::parse(uri).ok()?;
    if url.scheme() != "file" {
        return None;
    }
    url.to_file_path().ok()
}

/// Abbreviate the home directory prefix to `~`
pub fn tildify(path: &Path, home: Option<&Path>) -> String {
    if let Some(home) = home {
        if let Ok(rest) = path.strip_prefix(home) {
            if rest.as_os_str().is_empty() {
                return "~".to_string();
            }
            return Path::new("~").join(rest).to_string_lossy().into_owned();
        }
    }
    path.to_string_lossy().into_owned()
}

/// Parent directory of a display path
fn parent_of(pretty: &str) -> String {
    Path::new(pretty)
        .parent()
        .map(|p| p.to_string_lossy().into_owned())
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| pretty.to_string())
}
