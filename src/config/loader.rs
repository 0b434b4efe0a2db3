//! Configuration loading and discovery for `pxg.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::PxgConfig;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file name searched for during discovery.
pub const CONFIG_FILE: &str = "pxg.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse pxg.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Disable the interactive menu
    pub no_menu: bool,
    /// Override the maximum image width
    pub max_width: Option<usize>,
    /// Override the log level
    pub log_level: Option<String>,
}

/// Locate the config file: the nearest `pxg.toml` at or above the working
/// directory, else the per-user one from [`user_config_path`].
pub fn find_config() -> Option<PathBuf> {
    env::current_dir()
        .ok()
        .and_then(|cwd| find_config_from(&cwd))
        .or_else(|| user_config_path().filter(|p| p.is_file()))
}

/// Nearest `pxg.toml` in `start` or one of its ancestors.
pub fn find_config_from(start: &Path) -> Option<PathBuf> {
    start.ancestors().map(|dir| dir.join(CONFIG_FILE)).find(|p| p.is_file())
}

/// Where the per-user config lives: `$XDG_CONFIG_HOME/pixelgrid/pxg.toml`,
/// falling back to `$HOME/.config`. Not checked for existence.
pub fn user_config_path() -> Option<PathBuf> {
    let base = env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
    Some(base.join("pixelgrid").join(CONFIG_FILE))
}

/// Load configuration from a pxg.toml file.
///
/// If a path is provided, loads from that file. Otherwise, uses `find_config()`
/// to locate the config file. If no config file is found, returns the
/// default configuration.
pub fn load_config(path: Option<&Path>) -> Result<PxgConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => Ok(PxgConfig::default()),
    }
}

/// Load configuration from a specific file path.
fn load_config_file(path: &Path) -> Result<PxgConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: PxgConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    Ok(config)
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values.
pub fn merge_cli_overrides(config: &mut PxgConfig, overrides: &CliOverrides) {
    if overrides.no_menu {
        config.session.show_menu = false;
    }

    if let Some(max_width) = overrides.max_width {
        config.session.max_width = Some(max_width);
    }

    if let Some(ref level) = overrides.log_level {
        config.logging.level = level.clone();
    }
}
