//! Error types for demo-fixture.

use thiserror::Error;

/// Main error type for demo-fixture.
///
/// Domain operations are total; these cover the configuration and
/// input plumbing around them.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Rejected CLI input
    #[error("Invalid input: {0}")]
    Input(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
