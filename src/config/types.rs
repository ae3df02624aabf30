//! Configuration data types.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::validation;
use crate::domain::FixtureError;

/// Default upper bound on accepted name length, in bytes.
pub const DEFAULT_NAME_MAX_LEN: usize = 4096;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Enable debug logging to file
    pub debug: bool,

    /// Path to log directory
    pub log_path: PathBuf,

    /// Where diagnostics go in text mode
    pub sink: SinkKind,

    /// Longest name the CLI will pass to the service
    pub name_max_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            log_path: default_log_path(),
            sink: SinkKind::default(),
            name_max_len: DEFAULT_NAME_MAX_LEN,
        }
    }
}

impl Config {
    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, FixtureError> {
        Ok(toml::from_str(content)?)
    }

    /// Validate configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), FixtureError> {
        validation::validate(self)
    }
}

/// Diagnostic destination selected in config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// One line per emission on stdout
    #[default]
    Console,
    /// Emissions become tracing events
    Tracing,
    /// Emissions are dropped
    Silent,
}

/// Get default log path (relative to config directory).
/// This returns a placeholder; the actual path is set by ConfigService based on config file location.
pub fn default_log_path() -> PathBuf {
    default_log_path_for_config_dir(None)
}

/// Get log path based on config directory.
pub fn default_log_path_for_config_dir(config_dir: Option<&Path>) -> PathBuf {
    config_dir
        .map(|d| d.to_path_buf())
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config")
                .join("demo-fixture")
        })
        .join("logs")
}
