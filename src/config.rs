//! Configuration for the game driver.

use crate::games::tictactoe::JumpPolicy;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Driver configuration, usually loaded from TOML.
///
/// ```toml
/// jump_policy = "clamp"
/// log_filter = "info,strictly_timetravel=debug"
/// show_move_list = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct TimelineConfig {
    /// What to do with a jump past the end of the history.
    #[serde(default)]
    jump_policy: JumpPolicy,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    #[setters(into)]
    log_filter: String,

    /// Print the jump list after every command.
    #[serde(default = "default_show_move_list")]
    show_move_list: bool,
}

fn default_log_filter() -> String {
    "warn,strictly_timetravel=info".to_string()
}

fn default_show_move_list() -> bool {
    true
}

impl TimelineConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(jump_policy = ?config.jump_policy, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            jump_policy: JumpPolicy::default(),
            log_filter: default_log_filter(),
            show_move_list: default_show_move_list(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = TimelineConfig::from_toml("").unwrap();
        assert_eq!(config, TimelineConfig::default());
        assert_eq!(config.jump_policy(), &JumpPolicy::Reject);
    }

    #[test]
    fn test_parse_clamp_policy() {
        let toml = "jump_policy = \"clamp\"\nshow_move_list = false";
        let config = TimelineConfig::from_toml(toml).unwrap();
        assert_eq!(config.jump_policy(), &JumpPolicy::Clamp);
        assert!(!config.show_move_list());
    }

    #[test]
    fn test_unknown_policy_is_an_error() {
        let err = TimelineConfig::from_toml("jump_policy = \"wrap\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_setters() {
        let config = TimelineConfig::default()
            .with_jump_policy(JumpPolicy::Clamp)
            .with_log_filter("debug");
        assert_eq!(config.log_filter(), "debug");
        assert_eq!(config.jump_policy(), &JumpPolicy::Clamp);
    }
}
