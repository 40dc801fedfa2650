//! code-recent library
//!
//! Reads the "Open Recent" history that VS Code builds keep in their global
//! state storage and classifies it into workspaces, folders, remote folders
//! and files.
//!
//! This tool is not affiliated with or endorsed by Microsoft.
//! It only reads data stored locally on your machine.

pub mod config;
pub mod editor;
