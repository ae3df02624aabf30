//! Domain layer.
//!
//! This module contains:
//! - The base logging hook and the count helper
//! - The name repository
//! - Diagnostic sinks the above write to
//! - Logger with rotation

mod base;
mod error;
mod helper;
pub mod logger;
mod repository;
pub mod sink;

pub use base::{BaseHook, DefaultBaseHook};
pub use error::FixtureError;
pub use helper::helper;
pub use repository::Repository;
pub use sink::{DiagnosticSink, Emission};
