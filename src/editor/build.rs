//! Editor builds (release channels)
//!
//! Each build keeps its own data directory and registers its own application
//! identifier and URL scheme, so everything that touches storage or launches
//! the editor is keyed by a [`Build`].

/// A distribution/channel of the editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Build {
    /// Build identifier as users select it, e.g. `Code - Insiders`
    pub name: &'static str,
    /// Directory name under the application-support root
    pub data_dir: &'static str,
    /// macOS bundle identifier
    pub app_id: &'static str,
    /// Command-line launcher
    pub cli: &'static str,
    /// URL scheme the build registers with the OS
    pub url_scheme: &'static str,
}

impl Build {
    /// Rewrite a `vscode-remote://` URI into a URL this build's handler accepts
    ///
    /// `vscode-remote://ssh-remote+host/srv` becomes
    /// `vscode://vscode-remote/ssh-remote+host/srv` for the stable build.
    pub fn remote_open_url(&self, remote_uri: &str) -> String {
        let prefix = format!("{}://", super::REMOTE_SCHEME);
        match remote_uri.strip_prefix(&prefix) {
            Some(rest) => format!("{}://vscode-remote/{}", self.url_scheme, rest),
            None => remote_uri.to_string(),
        }
    }
}

/// Lookup table of the builds the tool knows about
///
/// The first build is the stable one and serves as the fallback.
#[derive(Debug, Clone)]
pub struct BuildTable {
    builds: Vec<Build>,
}

impl BuildTable {
    /// Create a table from an explicit list of builds
    ///
    /// # Panics
    /// Panics if `builds` is empty.
    pub fn new(builds: Vec<Build>) -> Self {
        assert!(!builds.is_empty(), "build table needs at least one build");
        Self { builds }
    }

    /// Find a build by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&Build> {
        self.builds
            .iter()
            .find(|b| b.name.eq_ignore_ascii_case(name.trim()))
    }

    /// The stable build
    pub fn stable(&self) -> &Build {
        &self.builds[0]
    }

    /// Names of all known builds
    pub fn names(&self) -> Vec<&'static str> {
        self.builds.iter().map(|b| b.name).collect()
    }
}

impl Default for BuildTable {
    fn default() -> Self {
        Self::new(vec![
            Build {
                name: "Code",
                data_dir: "Code",
                app_id: "com.microsoft.VSCode",
                cli: "code",
                url_scheme: "vscode",
            },
            Build {
                name: "Code - Insiders",
                data_dir: "Code - Insiders",
                app_id: "com.microsoft.VSCodeInsiders",
                cli: "code-insiders",
                url_scheme: "vscode-insiders",
            },
            Build {
                name: "VSCodium",
                data_dir: "VSCodium",
                app_id: "com.vscodium",
                cli: "codium",
                url_scheme: "vscodium",
            },
        ])
    }
}
