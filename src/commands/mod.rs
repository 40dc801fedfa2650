//! CLI commands

pub mod copy;
pub mod list;
pub mod open;
pub mod trash;
pub mod utils;
