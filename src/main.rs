//! code-recent: browse the "Open Recent" history of VS Code builds
//!
//! This tool is not affiliated with or endorsed by Microsoft.
//! It only reads data stored locally on your machine.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::PathBuf;

use code_recent::config::Settings;
use code_recent::editor::{BuildTable, RecentEntryStore, StoreError};

mod commands;

#[derive(Parser)]
#[command(name = "code-recent")]
#[command(
    about = "Search and open recent VS Code workspaces, folders and files",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Editor build: "Code", "Code - Insiders" or "VSCodium"
    #[arg(long, short, global = true, env = "CODE_RECENT_BUILD", default_value = "Code")]
    build: String,

    /// Application-support directory to read from (defaults to the platform location)
    #[arg(long, global = true, env = "CODE_RECENT_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Print where entries were read from and what was skipped
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List recent entries grouped into Workspaces, Folders, Remote Folders and Files
    List {
        /// Search terms (all must match name or path)
        query: Vec<String>,

        /// Only show one section: workspaces, folders, remotes or files
        #[arg(long, short)]
        section: Option<String>,

        /// Print JSON instead of tables
        #[arg(long)]
        json: bool,

        /// Limit number of results
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Open an entry in the selected build
    Open {
        /// Index from `list`, exact URI, or search query
        target: String,
    },

    /// Reveal a local entry in the file manager
    Reveal {
        /// Index from `list`, exact URI, or search query
        target: String,
    },

    /// Copy an entry's name (or path) to the clipboard
    Copy {
        /// Index from `list`, exact URI, or search query
        target: String,

        /// Copy the path instead of the name
        #[arg(long, short)]
        path: bool,
    },

    /// Move a local entry's file or folder to the trash
    Trash {
        /// Index from `list`, exact URI, or search query
        target: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    // `Some(json)` when listing, so a failed load still prints an empty listing
    let listing = match &cli.command {
        Commands::List { json, .. } => Some(*json),
        _ => None,
    };

    if let Err(err) = run(cli).await {
        match err.downcast_ref::<StoreError>() {
            Some(store_err) => {
                eprintln!(
                    "{} {}",
                    "Failed to load recent projects:".red(),
                    store_err
                );
                if let Some(json) = listing {
                    println!("{}", commands::list::empty_output(json));
                }
            }
            None => eprintln!("{} {:#}", "Error:".red(), err),
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let table = BuildTable::default();
    let (settings, known) = Settings::resolve(&table, &cli.build, cli.data_dir)?;
    if !known {
        eprintln!(
            "{} unknown build {:?}, using {} (known: {})",
            "Warning:".yellow(),
            cli.build,
            settings.build.name,
            table.names().join(", ")
        );
    }

    let store = RecentEntryStore::from_settings(&settings);
    let verbose = cli.verbose;

    match cli.command {
        Commands::List {
            query,
            section,
            json,
            limit,
        } => {
            let section = match section {
                Some(s) => match commands::utils::parse_section(&s) {
                    Some(kind) => Some(kind),
                    None => bail!(
                        "Invalid section {:?}. Use workspaces, folders, remotes or files",
                        s
                    ),
                },
                None => None,
            };
            let options = commands::list::ListOptions {
                query,
                section,
                json,
                limit,
            };
            let output = commands::list::execute(&store, options, verbose).await?;
            println!("{}", output);
        }

        Commands::Open { target } => {
            commands::open::execute_open(&store, &target, verbose).await?;
        }

        Commands::Reveal { target } => {
            commands::open::execute_reveal(&store, &target, verbose).await?;
        }

        Commands::Copy { target, path } => {
            let content = if path {
                commands::copy::CopyContent::Path
            } else {
                commands::copy::CopyContent::Name
            };
            commands::copy::execute(&store, &target, content, verbose).await?;
        }

        Commands::Trash { target, yes } => {
            commands::trash::execute(&store, &target, yes, verbose).await?;
        }
    }

    Ok(())
}
