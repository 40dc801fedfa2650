//! List command - Show recent workspaces, folders, remotes and files

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use owo_colors::OwoColorize;

use super::utils::{self, Row};
use code_recent::editor::{EntryKind, RecentEntryStore};

/// Options for the list command
#[derive(Debug, Default)]
pub struct ListOptions {
    /// Search terms; all must match
    pub query: Vec<String>,
    /// Only show one section
    pub section: Option<EntryKind>,
    /// Print JSON instead of tables
    pub json: bool,
    /// Limit number of results
    pub limit: Option<usize>,
}

/// Execute the list command and return formatted output
pub async fn execute(
    store: &RecentEntryStore,
    options: ListOptions,
    verbose: bool,
) -> Result<String> {
    let rows = utils::load_rows(store, verbose).await?;
    render(rows, &options)
}

/// Filter rows and render them
pub fn render(mut rows: Vec<Row>, options: &ListOptions) -> Result<String> {
    rows.retain(|r| r.matches(&options.query));
    if let Some(section) = options.section {
        rows.retain(|r| r.kind == section);
    }

    let total_count = rows.len();
    if let Some(n) = options.limit {
        rows.truncate(n);
    }

    if options.json {
        return Ok(serde_json::to_string_pretty(&rows)?);
    }

    let mut output = String::new();

    for kind in EntryKind::ALL {
        let section: Vec<&Row> = rows.iter().filter(|r| r.kind == kind).collect();
        if section.is_empty() {
            continue;
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL_CONDENSED)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![Cell::new("#"), Cell::new("Name"), Cell::new("Location")]);

        for row in section {
            table.add_row(vec![
                Cell::new(row.index),
                Cell::new(&row.name),
                Cell::new(&row.subtitle),
            ]);
        }

        output.push_str(&format!("{}\n{}\n\n", utils::section_title(kind).bold(), table));
    }

    output.push_str(&summary(rows.len(), total_count));
    Ok(output)
}

/// Listing shown when nothing could be loaded
pub fn empty_output(json: bool) -> String {
    if json {
        "[]".to_string()
    } else {
        summary(0, 0)
    }
}

fn summary(shown: usize, total: usize) -> String {
    if shown < total {
        format!("Showing {} of {} recent entries", shown, total)
    } else {
        format!("{} recent entries found", total)
    }
}
