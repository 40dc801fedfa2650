//! Platform-specific configuration and paths

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::editor::build::{Build, BuildTable};

/// Get the application-support root where editor builds keep their data
/// - macOS: ~/Library/Application Support/
/// - Linux: $XDG_CONFIG_HOME or ~/.config/
/// - Windows: %APPDATA%/
pub fn app_support_dir() -> Result<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join("Library").join("Application Support"))
    }

    #[cfg(target_os = "linux")]
    {
        dirs::config_dir().context("Could not determine config directory")
    }

    #[cfg(target_os = "windows")]
    {
        dirs::config_dir().context("Could not determine AppData directory")
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        dirs::config_dir().context("Could not determine config directory")
    }
}

/// Get the global storage directory of a build under `root`
///
/// e.g. `~/Library/Application Support/Code/User/globalStorage/`
pub fn global_storage_dir(root: &Path, build: &Build) -> PathBuf {
    root.join(build.data_dir).join("User").join("globalStorage")
}

/// Runtime settings selected on the command line or through the environment
#[derive(Debug, Clone)]
pub struct Settings {
    /// Selected editor build
    pub build: Build,

    /// Application-support root (platform default unless overridden)
    pub data_dir: PathBuf,
}

impl Settings {
    /// Resolve settings from a build name and an optional data directory override
    ///
    /// Unknown build names fall back to the stable build; the second value
    /// reports whether that happened.
    pub fn resolve(
        table: &BuildTable,
        build_name: &str,
        data_dir: Option<PathBuf>,
    ) -> Result<(Self, bool)> {
        let (build, known) = match table.get(build_name) {
            Some(build) => (build.clone(), true),
            None => (table.stable().clone(), false),
        };

        let data_dir = match data_dir {
            Some(dir) => dir,
            None => app_support_dir()?,
        };

        Ok((Self { build, data_dir }, known))
    }
}
