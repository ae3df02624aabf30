//! demo-fixture: a minimal service/repository fixture
//!
//! A small CLI that runs a name and count through a logging hook, a count
//! helper, and a repository lookup, for exercising code analysis tooling.

mod cli;
mod config;
mod domain;
mod service;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands, Format};
use config::{Config, ConfigService};
use service::Runner;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ConfigService::load(cli.config.as_deref())?;

    if cli.debug || config.debug {
        domain::logger::init(&config)?;
    }

    match cli.command {
        Commands::Process {
            name,
            count,
            format,
        } => run(config, format, &name, Some(count))?,
        Commands::Once { name, format } => run(config, format, &name, None)?,
        Commands::Init { path } => {
            let config_path = if let Some(p) = path {
                ConfigService::generate_at(&p)?;
                p
            } else {
                ConfigService::generate_default()?;
                ConfigService::default_path()
            };
            if !cli.quiet {
                eprintln!("Configuration file created at: {}", config_path.display());
            }
        }
        Commands::Check => {
            config::validate(&config)?;
            if !cli.quiet {
                eprintln!("Configuration is valid.");
            }
        }
        Commands::Version => {
            println!("demo-fixture {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn run(config: Config, format: Format, name: &str, count: Option<i64>) -> Result<()> {
    let output = Runner::new(config, format).run(name, count)?;
    println!("{}", output);
    Ok(())
}
