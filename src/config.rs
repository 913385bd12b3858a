//! Layered configuration
//!
//! Resolution order per field: CLI flag, then the section named with
//! `--config-section`, then the `[default]` section, then the built-in
//! default. The file lives at `~/.config/next-review/config.toml` (XDG
//! standard) and is never written by this tool.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Built-in gerrit host
pub const DEFAULT_HOST: &str = "review.openstack.org";

/// Built-in gerrit ssh port
pub const DEFAULT_PORT: u16 = 29418;

/// Built-in gate CI account name
pub const DEFAULT_GATE_SYSTEM: &str = "jenkins";

/// Built-in smoke CI account name
pub const DEFAULT_SMOKE_SYSTEM: &str = "smokestack";

/// Name of the fallback config section
const DEFAULT_SECTION: &str = "default";

/// One section of the config file; every field optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Section {
    /// SSH hostname for gerrit
    pub host: Option<String>,
    /// SSH port for gerrit
    pub port: Option<u16>,
    /// SSH username for gerrit
    pub username: Option<String>,
    /// Watched projects
    pub projects: Option<Vec<String>>,
    /// Gate CI account name
    pub gate_system: Option<String>,
    /// Smoke CI account name
    pub smoke_system: Option<String>,
}

/// The parsed config file: named sections, `[default]` as the fallback layer
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ConfigFile {
    /// Sections keyed by name
    pub sections: HashMap<String, Section>,
}

impl ConfigFile {
    /// Default config file path (`~/.config/next-review/config.toml`)
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("next-review")
            .join("config.toml")
    }

    /// Load the file, treating a missing file as empty
    ///
    /// A file that exists but does not parse is an error; silently ignoring
    /// it would send queries to the wrong server.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let parsed = toml::from_str(&content)?;
        Ok(parsed)
    }

    /// Look up a section by name
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }
}

/// Flag-level overrides collected by the CLI layer
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// `--host`
    pub host: Option<String>,
    /// `--port`
    pub port: Option<u16>,
    /// `--username`
    pub username: Option<String>,
    /// Positional project arguments
    pub projects: Vec<String>,
}

/// Fully resolved settings for one invocation
#[derive(Debug, Clone)]
pub struct Settings {
    /// SSH hostname for gerrit
    pub host: String,
    /// SSH port for gerrit
    pub port: u16,
    /// SSH username for gerrit, if known
    pub username: Option<String>,
    /// Watched projects; empty means "watched or starred"
    pub projects: Vec<String>,
    /// Gate CI account name
    pub gate_system: String,
    /// Smoke CI account name
    pub smoke_system: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self::resolve(&ConfigFile::default(), None, Overrides::default())
    }
}

impl Settings {
    /// Resolve settings from config file layers and CLI overrides
    ///
    /// Flags beat the named section, which beats `[default]`, which beats
    /// the built-ins.
    #[must_use]
    pub fn resolve(file: &ConfigFile, section: Option<&str>, overrides: Overrides) -> Self {
        let named = section.and_then(|name| file.section(name));
        let fallback = file.section(DEFAULT_SECTION);

        let projects = if overrides.projects.is_empty() {
            layered(None, named, fallback, |s| s.projects.clone(), Vec::new())
        } else {
            overrides.projects
        };

        Self {
            host: layered(overrides.host, named, fallback, |s| s.host.clone(), DEFAULT_HOST.to_string()),
            port: layered(overrides.port, named, fallback, |s| s.port, DEFAULT_PORT),
            username: overrides
                .username
                .or_else(|| named.and_then(|s| s.username.clone()))
                .or_else(|| fallback.and_then(|s| s.username.clone())),
            projects,
            gate_system: layered(
                None,
                named,
                fallback,
                |s| s.gate_system.clone(),
                DEFAULT_GATE_SYSTEM.to_string(),
            ),
            smoke_system: layered(
                None,
                named,
                fallback,
                |s| s.smoke_system.clone(),
                DEFAULT_SMOKE_SYSTEM.to_string(),
            ),
        }
    }

    /// The ssh destination, `user@host` when a username is known
    #[must_use]
    pub fn destination(&self) -> String {
        match &self.username {
            Some(user) => format!("{user}@{}", self.host),
            None => self.host.clone(),
        }
    }
}

/// Ordered fallback lookup over the config layers
fn layered<T>(
    flag: Option<T>,
    named: Option<&Section>,
    fallback: Option<&Section>,
    get: impl Fn(&Section) -> Option<T>,
    builtin: T,
) -> T {
    flag.or_else(|| named.and_then(&get))
        .or_else(|| fallback.and_then(&get))
        .unwrap_or(builtin)
}
