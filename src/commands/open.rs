//! Open and reveal commands - Hand a recent entry to the editor or file manager

use anyhow::{bail, Context, Result};
use owo_colors::OwoColorize;
use std::process::Command;

use super::utils::{self, Row};
use code_recent::editor::{Build, EntryKind, RecentEntryStore};

/// Host platform, which decides how things are launched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
    Unix,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(windows) {
            Self::Windows
        } else {
            Self::Unix
        }
    }
}

/// A program invocation, kept separate from spawning so it can be inspected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    fn spawn(&self) -> Result<()> {
        Command::new(&self.program)
            .args(&self.args)
            .spawn()
            .with_context(|| format!("Failed to run {}", self.program))?;
        Ok(())
    }
}

/// How to open `row` in `build`
pub fn open_invocation(build: &Build, row: &Row, platform: Platform) -> Invocation {
    if row.kind == EntryKind::Remote {
        let url = build.remote_open_url(&row.uri);
        return url_invocation(&url, platform);
    }

    match platform {
        Platform::MacOs => Invocation::new("open", &["-b", build.app_id, row.uri.as_str()]),
        _ => {
            let flag = match row.kind {
                EntryKind::Folder => "--folder-uri",
                _ => "--file-uri",
            };
            Invocation::new(build.cli, &[flag, row.uri.as_str()])
        }
    }
}

/// How to reveal `row` in the platform file manager
pub fn reveal_invocation(row: &Row, platform: Platform) -> Result<Invocation> {
    let Some(path) = &row.path else {
        bail!("{} is not a local path and cannot be revealed", row.uri);
    };
    let path_str = path.to_string_lossy().into_owned();

    Ok(match platform {
        Platform::MacOs => Invocation::new("open", &["-R", path_str.as_str()]),
        Platform::Windows => {
            Invocation::new("explorer", &[format!("/select,{}", path_str).as_str()])
        }
        Platform::Unix => {
            // xdg-open has no "select"; open the containing directory
            let dir = path
                .parent()
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_else(|| path_str.clone());
            Invocation::new("xdg-open", &[dir.as_str()])
        }
    })
}

fn url_invocation(url: &str, platform: Platform) -> Invocation {
    match platform {
        Platform::MacOs => Invocation::new("open", &[url]),
        // explorer hands the URL to its protocol handler without a shell
        Platform::Windows => Invocation::new("explorer", &[url]),
        Platform::Unix => Invocation::new("xdg-open", &[url]),
    }
}

async fn find(store: &RecentEntryStore, target: &str, verbose: bool) -> Result<Row> {
    let rows = utils::load_rows(store, verbose).await?;
    match utils::select(&rows, target) {
        Some(row) => Ok(row.clone()),
        None => bail!("No recent entry matches: {}", target),
    }
}

/// Execute the open command
pub async fn execute_open(store: &RecentEntryStore, target: &str, verbose: bool) -> Result<()> {
    let row = find(store, target, verbose).await?;
    let invocation = open_invocation(store.build(), &row, Platform::current());
    invocation.spawn()?;
    println!(
        "{} {} in {}",
        "Opened".green(),
        row.name,
        store.build().name
    );
    Ok(())
}

/// Execute the reveal command
pub async fn execute_reveal(store: &RecentEntryStore, target: &str, verbose: bool) -> Result<()> {
    let row = find(store, target, verbose).await?;
    let invocation = reveal_invocation(&row, Platform::current())?;
    invocation.spawn()?;
    println!(
        "{} {}",
        "Revealed".green(),
        row.pretty_path.as_deref().unwrap_or(&row.uri)
    );
    Ok(())
}
