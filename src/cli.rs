//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Minimal service/repository fixture
#[derive(Parser)]
#[command(
    name = "demo-fixture",
    version,
    about = "Minimal service/repository fixture",
    long_about = "Runs a name and count through a logging hook, a count helper, \
                  and a repository lookup, then prints the formatted result."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

/// Output format for processing results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// Diagnostics as lines, then the result (default)
    #[default]
    Text,
    /// Single JSON object with result, last name, and diagnostics
    Json,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Process a name with a count
    Process {
        /// Name to process
        #[arg(long, short = 'n')]
        name: String,

        /// Count to log and append
        #[arg(long, short = 'k', allow_negative_numbers = true)]
        count: i64,

        /// Output format
        #[arg(long, short = 'f', default_value = "text")]
        format: Format,
    },
    /// Process a name with a count of one (alias: process-once)
    #[command(alias = "process-once")]
    Once {
        /// Name to process
        #[arg(long, short = 'n')]
        name: String,

        /// Output format
        #[arg(long, short = 'f', default_value = "text")]
        format: Format,
    },
    /// Generate default configuration file
    Init {
        /// Path where to create the configuration file
        #[arg(long, short = 'p')]
        path: Option<PathBuf>,
    },
    /// Validate configuration file
    Check,
    /// Display version information
    Version,
}
