//! File logging with daily rotation.

use anyhow::Result;
use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};
use time::macros::format_description;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::time::OffsetTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use super::FixtureError;
use crate::config::Config;

/// Prefix shared by every log file this crate writes.
const LOG_PREFIX: &str = "demo-fixture";

/// Log files older than this are removed on init.
const LOG_RETENTION: Duration = Duration::from_secs(2 * 24 * 60 * 60);

/// Initialize the logging system.
pub fn init(config: &Config) -> Result<()> {
    if !config.log_path.exists() {
        fs::create_dir_all(&config.log_path)?;
    }

    cleanup_old_logs(&config.log_path, SystemTime::now() - LOG_RETENTION)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &config.log_path, LOG_PREFIX);

    let time_format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let local_offset = time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC);
    let timer = OffsetTime::new(local_offset, time_format);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()))
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(timer),
        );

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    Ok(())
}

/// Remove demo-fixture log files last modified before `cutoff`.
pub fn cleanup_old_logs(log_path: &Path, cutoff: SystemTime) -> Result<(), FixtureError> {
    if !log_path.exists() {
        return Ok(());
    }

    for entry in fs::read_dir(log_path)? {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let is_ours = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with(LOG_PREFIX));
        if !is_ours {
            continue;
        }

        if let Ok(modified) = entry.metadata().and_then(|m| m.modified()) {
            if modified < cutoff {
                let _ = fs::remove_file(&path);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleanup_missing_dir_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        assert!(cleanup_old_logs(&dir.path().join("absent"), SystemTime::now()).is_ok());
    }

    #[test]
    fn test_cleanup_only_touches_own_files() {
        let dir = tempfile::tempdir().unwrap();
        let ours = dir.path().join("demo-fixture.2026-01-01");
        let foreign = dir.path().join("other.log");
        fs::write(&ours, "old").unwrap();
        fs::write(&foreign, "keep").unwrap();

        // Cutoff in the future makes every file "old"
        let cutoff = SystemTime::now() + Duration::from_secs(60);
        cleanup_old_logs(dir.path(), cutoff).unwrap();

        assert!(!ours.exists());
        assert!(foreign.exists());
    }

    #[test]
    fn test_cleanup_keeps_recent_files() {
        let dir = tempfile::tempdir().unwrap();
        let recent = dir.path().join("demo-fixture.today");
        fs::write(&recent, "new").unwrap();

        cleanup_old_logs(dir.path(), SystemTime::now() - LOG_RETENTION).unwrap();

        assert!(recent.exists());
    }
}
