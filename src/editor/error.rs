//! Errors raised while loading recent entries

use std::path::PathBuf;
use thiserror::Error;

/// Failure to load the recent list
///
/// All variants are terminal for a load; callers surface them as a single
/// "failed to load recent projects" condition.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Neither the state database nor the legacy storage file exists
    #[error("no {build} storage found at {}", path.display())]
    StorageNotFound { build: String, path: PathBuf },

    /// Storage exists but could not be read or decoded
    #[error("failed to parse recent entries: {0}")]
    Parse(String),

    /// The background read task panicked or was cancelled
    #[error("storage read was interrupted: {0}")]
    Interrupted(#[from] tokio::task::JoinError),
}

impl StoreError {
    pub(crate) fn parse(context: &str, err: impl std::fmt::Display) -> Self {
        Self::Parse(format!("{}: {}", context, err))
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
