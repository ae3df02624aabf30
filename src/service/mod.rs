//! Service layer containing orchestration.

mod demo_service;
mod runner;

pub use demo_service::DemoService;
pub use runner::Runner;
