/// CLI binary integration tests using assert_cmd
///
/// These tests run the binary against a fake application-support directory.
mod common;

use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

use common::{AppSupportBuilder, MIXED, SCENARIO};

fn cli(data_dir: &std::path::Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_code-recent"));
    cmd.env_remove("CODE_RECENT_BUILD")
        .arg("--data-dir")
        .arg(data_dir);
    cmd
}

#[test]
fn test_cli_list_sections() {
    let dir = AppSupportBuilder::new()
        .with_state_db("Code", Some(MIXED))
        .build();

    cli(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Workspaces"))
        .stdout(predicate::str::contains("Remote Folders"))
        .stdout(predicate::str::contains("team.code-workspace"))
        .stdout(predicate::str::contains("my project"))
        .stdout(predicate::str::contains("5 recent entries found"));
}

#[test]
fn test_cli_list_json_order() {
    let dir = AppSupportBuilder::new()
        .with_state_db("Code", Some(SCENARIO))
        .build();

    let output = cli(dir.path())
        .args(["list", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let kinds: Vec<&str> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["kind"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, vec!["folder", "remote", "file"]);
    assert_eq!(rows[1]["subtitle"], "srv");
}

#[test]
fn test_cli_list_query() {
    let dir = AppSupportBuilder::new()
        .with_state_db("Code", Some(MIXED))
        .build();

    cli(dir.path())
        .args(["list", "todo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("todo.md"))
        .stdout(predicate::str::contains("second").not())
        .stdout(predicate::str::contains("1 recent entries found"));
}

#[test]
fn test_cli_list_section_filter() {
    let dir = AppSupportBuilder::new()
        .with_state_db("Code", Some(MIXED))
        .build();

    cli(dir.path())
        .args(["list", "--section", "remotes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("api"))
        .stdout(predicate::str::contains("todo.md").not());

    cli(dir.path())
        .args(["list", "--section", "tabs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid section"));
}

#[test]
fn test_cli_selects_build() {
    let dir = AppSupportBuilder::new()
        .with_state_db("Code - Insiders", Some(SCENARIO))
        .build();

    cli(dir.path())
        .args(["--build", "Code - Insiders", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 recent entries found"));

    // Stable build has no storage in this tree
    cli(dir.path())
        .arg("list")
        .assert()
        .failure();
}

#[test]
fn test_cli_missing_storage_reports_once() {
    let dir = AppSupportBuilder::new().build();

    let output = cli(dir.path()).arg("list").output().unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Failed to load recent projects").count(), 1);
    assert!(stderr.contains("Code"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("0 recent entries found"));
}

#[test]
fn test_cli_missing_storage_json_listing_is_empty_array() {
    let dir = AppSupportBuilder::new().build();

    let output = cli(dir.path()).args(["list", "--json"]).output().unwrap();
    assert!(!output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows, serde_json::json!([]));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Failed to load recent projects").count(), 1);
}

#[test]
fn test_cli_corrupt_document() {
    let dir = AppSupportBuilder::new()
        .with_state_db("Code", Some("{\"entries\": ["))
        .build();

    cli(dir.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load recent projects"))
        .stdout(predicate::str::contains("0 recent entries found"));
}

#[test]
fn test_cli_unknown_build_warns_and_falls_back() {
    let dir = AppSupportBuilder::new()
        .with_state_db("Code", Some(SCENARIO))
        .build();

    cli(dir.path())
        .args(["--build", "Code - Nightly", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("unknown build"))
        .stdout(predicate::str::contains("3 recent entries found"));
}

#[test]
fn test_cli_verbose_reports_skipped() {
    let dir = AppSupportBuilder::new()
        .with_state_db("Code", Some(MIXED))
        .build();

    cli(dir.path())
        .args(["--verbose", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("state.vscdb"))
        .stderr(predicate::str::contains("skipped 1 unrecognized record(s)"));
}

#[test]
fn test_cli_reveal_remote_fails() {
    let dir = AppSupportBuilder::new()
        .with_state_db("Code", Some(SCENARIO))
        .build();

    cli(dir.path())
        .args(["reveal", "vscode-remote://ssh-remote+host/srv/app"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be revealed"));
}

#[test]
fn test_cli_trash_remote_fails() {
    let dir = AppSupportBuilder::new()
        .with_state_db("Code", Some(SCENARIO))
        .build();

    cli(dir.path())
        .args(["trash", "--yes", "vscode-remote://ssh-remote+host/srv/app"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be trashed"));
}

#[test]
fn test_cli_open_no_match() {
    let dir = AppSupportBuilder::new()
        .with_state_db("Code", Some(SCENARIO))
        .build();

    cli(dir.path())
        .args(["open", "nothing-like-this"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No recent entry matches"));
}

#[test]
fn test_cli_help_flag() {
    Command::new(env!("CARGO_BIN_EXE_code-recent"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("reveal"));
}
