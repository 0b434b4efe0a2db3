//! Configuration schema types for `pxg.toml`
//!
//! Defines the structure and validation rules for pixelgrid configuration.

use serde::{Deserialize, Serialize};

/// Log levels accepted by `[logging] level`.
pub const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Interactive session settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Print the command menu before each prompt
    #[serde(default = "default_true")]
    pub show_menu: bool,
    /// Prompt line printed before reading a command
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Largest image width accepted by `I` (unset: no cap)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<usize>,
}

fn default_true() -> bool {
    true
}

fn default_prompt() -> String {
    "Please enter your command".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { show_menu: true, prompt: default_prompt(), max_width: None }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `PXG_LOG` is unset
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_level() }
    }
}

/// Complete pxg.toml configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PxgConfig {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "session.max_width")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pxg.toml: '{}' {}", self.field, self.message)
    }
}

impl PxgConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.session.max_width == Some(0) {
            errors.push(ConfigValidationError {
                field: "session.max_width".to_string(),
                message: "must be a positive integer".to_string(),
            });
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            errors.push(ConfigValidationError {
                field: "logging.level".to_string(),
                message: format!("must be one of: {}", LOG_LEVELS.join(", ")),
            });
        }

        errors
    }
}
