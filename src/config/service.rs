//! Configuration service for loading and generating config files.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::types::default_log_path_for_config_dir;
use super::Config;

/// Configuration service.
pub struct ConfigService;

impl ConfigService {
    /// Get the default configuration file path: ~/.config/demo-fixture/config.toml
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("demo-fixture")
            .join("config.toml")
    }

    /// Load configuration from file.
    ///
    /// If `path` is `None`, uses the default path. A missing file is created
    /// with default content first. Log path defaults to `<config dir>/logs`.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let path = path.map(PathBuf::from).unwrap_or_else(Self::default_path);
        let config_dir = path.parent();

        if !path.exists() {
            Self::generate_at(&path)?;
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config = Config::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        // An unset log_path still holds the home-based placeholder
        if config.log_path == default_log_path_for_config_dir(None) {
            config.log_path = default_log_path_for_config_dir(config_dir);
        }

        config
            .validate()
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;

        Ok(config)
    }

    /// Generate default configuration file at the default path.
    pub fn generate_default() -> Result<()> {
        Self::generate_at(&Self::default_path())
    }

    /// Generate default configuration file at the specified path.
    pub fn generate_at(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(path, Self::default_config_content())
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    fn default_config_content() -> &'static str {
        r#"# demo-fixture configuration file

# Where diagnostics from the base hook and helper go in text mode:
# "console" (stdout), "tracing" (log file when debug is on), or "silent"
sink = "console"

# Names longer than this many bytes are rejected (default: 4096)
name_max_len = 4096

# Enable debug logging to file (default: false)
debug = false

# Path to log directory (default: same directory as config.toml/logs)
# log_path = "~/.config/demo-fixture/logs"
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SinkKind;

    #[test]
    fn test_default_content_parses_and_validates() {
        let config = Config::from_toml(ConfigService::default_config_content()).unwrap();
        assert_eq!(config.sink, SinkKind::Console);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = ConfigService::load(Some(&path)).unwrap();

        assert!(path.exists());
        assert_eq!(config.log_path, dir.path().join("nested").join("logs"));
    }

    #[test]
    fn test_load_keeps_explicit_log_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "log_path = \"/var/log/demo\"\nsink = \"silent\"\n").unwrap();

        let config = ConfigService::load(Some(&path)).unwrap();

        assert_eq!(config.log_path, PathBuf::from("/var/log/demo"));
        assert_eq!(config.sink, SinkKind::Silent);
    }

    #[test]
    fn test_load_rejects_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "name_max_len = 0\n").unwrap();

        let err = ConfigService::load(Some(&path)).unwrap_err();
        assert!(format!("{:#}", err).contains("name_max_len"));
    }
}
