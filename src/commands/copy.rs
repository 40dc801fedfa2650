//! Copy command - Put an entry's name or path on the clipboard

use anyhow::{anyhow, bail, Result};
use arboard::Clipboard;
use owo_colors::OwoColorize;

use super::utils::{self, Row};
use code_recent::editor::RecentEntryStore;

/// What to copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyContent {
    Name,
    Path,
}

/// Text copied for `row`
///
/// Paths are the home-abbreviated display path; entries without a local
/// path fall back to their URI.
pub fn clipboard_text(row: &Row, content: CopyContent) -> String {
    match content {
        CopyContent::Name => row.name.clone(),
        CopyContent::Path => row.pretty_path.clone().unwrap_or_else(|| row.uri.clone()),
    }
}

/// Execute the copy command
pub async fn execute(
    store: &RecentEntryStore,
    target: &str,
    content: CopyContent,
    verbose: bool,
) -> Result<()> {
    let rows = utils::load_rows(store, verbose).await?;
    let Some(row) = utils::select(&rows, target) else {
        bail!("No recent entry matches: {}", target);
    };

    let text = clipboard_text(row, content);
    let mut clipboard =
        Clipboard::new().map_err(|e| anyhow!("Failed to access clipboard: {}", e))?;
    clipboard
        .set_text(text.clone())
        .map_err(|e| anyhow!("Failed to copy to clipboard: {}", e))?;

    println!("{} {}", "Copied".green(), text);
    Ok(())
}
