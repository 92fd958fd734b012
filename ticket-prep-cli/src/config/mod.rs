//! Configuration loading
//!
//! Settings come from a TOML file. Without `--config`, the file at
//! `<config dir>/ticket-prep/config.toml` is used when it exists; otherwise
//! the built-in defaults apply.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::tickets::TicketProfile;

/// Default name of the results file
pub const DEFAULT_RESULTS_FILE: &str = "qcli_results.json";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub run: RunSettings,
    pub profile: TicketProfile,
}

/// Run behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunSettings {
    /// Write results to `results_file` at the end of a run
    pub persist_results: bool,
    /// Relative paths resolve against the scanned directory
    pub results_file: PathBuf,
    /// Print the full parameter bundle for each ticket
    pub show_params: bool,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            persist_results: true,
            results_file: PathBuf::from(DEFAULT_RESULTS_FILE),
            show_params: false,
        }
    }
}

impl RunSettings {
    /// Results file location for a run scanning `dir`
    pub fn results_path(&self, dir: &Path) -> PathBuf {
        if self.results_file.is_absolute() {
            self.results_file.clone()
        } else {
            dir.join(&self.results_file)
        }
    }
}

impl Config {
    /// Load from `explicit`, or from the default location if present
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => {
                    log::debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Parse a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse TOML")?;
        config.profile.validate().context("Invalid [profile] section")?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

/// `<config dir>/ticket-prep/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("ticket-prep").join("config.toml"))
}
