//! Driver configuration.
//!
//! Settings come from an optional `touyc.toml`; command-line flags are
//! applied on top by the binary.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DriverError, Result};

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "touyc.toml";

/// How the token listing is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One tab-separated row per token.
    #[default]
    Table,
    /// A JSON array of rows.
    Json,
}

/// Driver configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Listing format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Keep lexing past errors instead of halting at the first one.
    #[serde(default)]
    pub keep_going: bool,

    /// Colored log output.
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            keep_going: false,
            color: true,
        }
    }
}

impl Config {
    /// Loads `touyc.toml` from the working directory, or the defaults when
    /// there is none.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DriverError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            DriverError::Config(format!("Failed to parse configuration: {}", e))
        })?;
        Ok(config)
    }

    fn find_config_file() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }
}
