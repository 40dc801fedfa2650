//! Trash command - Move a recent entry's file or folder to the trash

use anyhow::{anyhow, bail, Result};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::path::Path;

use super::utils::{self, Row};
use code_recent::editor::{EntryKind, RecentEntryStore};

/// Local path that trashing `row` would remove
///
/// Remote entries and URIs without a local path are refused.
pub fn trash_path(row: &Row) -> Result<&Path> {
    match &row.path {
        Some(path) if row.kind != EntryKind::Remote => Ok(path.as_path()),
        _ => bail!("{} is not a local path and cannot be trashed", row.uri),
    }
}

/// Execute the trash command
pub async fn execute(
    store: &RecentEntryStore,
    target: &str,
    yes: bool,
    verbose: bool,
) -> Result<()> {
    let rows = utils::load_rows(store, verbose).await?;
    let Some(row) = utils::select(&rows, target) else {
        bail!("No recent entry matches: {}", target);
    };
    let path = trash_path(row)?;

    if !path.exists() {
        bail!("{} no longer exists", path.display());
    }

    let shown = row.pretty_path.as_deref().unwrap_or(&row.uri);

    // Confirm deletion
    if !yes {
        print!("Move {} to the trash? (y/N) ", shown);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    trash::delete(path)
        .map_err(|e| anyhow!("Failed to trash {}: {}", path.display(), e))?;

    println!("{} {}", "Trashed:".green(), shown);
    Ok(())
}
