use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// File name looked up in the working directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "semantic-version.toml";

/// Represents the complete configuration for the semantic-version CLI.
///
/// The library itself takes no configuration; these settings only shape how the
/// command-line front end reports results.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub compare: CompareConfig,

    #[serde(default)]
    pub sort: SortConfig,

    #[serde(default)]
    pub log: LogConfig,
}

fn default_color() -> bool {
    true
}

/// Terminal output settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DisplayConfig {
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            color: default_color(),
        }
    }
}

/// Which notion of equality the `compare` command reports.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Equality {
    /// Equal precedence, build metadata ignored
    #[default]
    Precedence,
    /// Identical text
    Identity,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct CompareConfig {
    #[serde(default)]
    pub equality: Equality,
}

/// Settings for the `sort` command.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct SortConfig {
    #[serde(default)]
    pub descending: bool,

    /// Drop versions whose precedence equals an earlier one
    #[serde(default)]
    pub dedupe: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Diagnostic logging, written to stderr.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: default_log_level(),
        }
    }
}

/// Candidate locations, in lookup order, when no explicit path is given.
fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(".").join(CONFIG_FILE_NAME)];
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join(CONFIG_FILE_NAME));
    }
    paths
}

/// Parse configuration from a specific file.
pub fn load_config_from(path: &Path) -> Result<Config> {
    let config_str = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file '{}'", path.display()))?;

    toml::from_str(&config_str)
        .with_context(|| format!("failed to parse config file '{}'", path.display()))
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `semantic-version.toml` in current directory
/// 3. `semantic-version.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed, or an explicit path is missing
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    if let Some(path) = config_path {
        return load_config_from(Path::new(path));
    }

    match default_config_paths().into_iter().find(|path| path.exists()) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            load_config_from(&path)
        }
        None => Ok(Config::default()),
    }
}
