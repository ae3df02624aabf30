//! Runs one CLI request through a freshly built [`DemoService`].

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::cli::Format;
use crate::config::{Config, SinkKind};
use crate::domain::sink::{ConsoleSink, RecordingSink, SilentSink, TeeSink, TracingSink};
use crate::domain::{DiagnosticSink, Emission, FixtureError};
use crate::service::DemoService;

/// JSON report of a single `process` call.
#[derive(Debug, Serialize)]
pub struct ProcessReport {
    pub result: String,
    pub last: Option<String>,
    pub emissions: Vec<Emission>,
}

/// Builds the sink stack for the configured output and runs the service.
pub struct Runner {
    config: Config,
    format: Format,
}

impl Runner {
    pub fn new(config: Config, format: Format) -> Self {
        Self { config, format }
    }

    /// Process `name` with `count` and return the text to print.
    ///
    /// In text mode diagnostics are written by the configured sink while
    /// processing; the returned string is just the result. In JSON mode
    /// diagnostics are captured and returned inside the report.
    pub fn run(&self, name: &str, count: Option<i64>) -> Result<String, FixtureError> {
        self.check_name(name)?;

        let recorder = Arc::new(RecordingSink::new());
        let sink = self.build_sink(recorder.clone());
        let mut service = DemoService::new(sink);

        let result = match count {
            Some(count) => service.process(name, count),
            None => service.process_once(name),
        };
        info!("Processed: result={}", result);

        match self.format {
            Format::Text => Ok(result),
            Format::Json => {
                let report = ProcessReport {
                    result,
                    last: service.repository().last().map(str::to_string),
                    emissions: recorder.emissions(),
                };
                Ok(serde_json::to_string(&report)?)
            }
        }
    }

    fn check_name(&self, name: &str) -> Result<(), FixtureError> {
        if name.len() > self.config.name_max_len {
            return Err(FixtureError::Input(format!(
                "name is {} bytes, limit is {}",
                name.len(),
                self.config.name_max_len
            )));
        }
        Ok(())
    }

    fn build_sink(&self, recorder: Arc<RecordingSink>) -> Arc<dyn DiagnosticSink> {
        debug!("Building sink: format={:?}, sink={:?}", self.format, self.config.sink);

        let configured: Arc<dyn DiagnosticSink> = match (self.format, self.config.sink) {
            // JSON output owns stdout, so console lines are suppressed
            (Format::Json, SinkKind::Console) | (_, SinkKind::Silent) => Arc::new(SilentSink),
            (Format::Text, SinkKind::Console) => Arc::new(ConsoleSink),
            (_, SinkKind::Tracing) => Arc::new(TracingSink),
        };

        let sinks: Vec<Arc<dyn DiagnosticSink>> = vec![recorder, configured];
        Arc::new(TeeSink::new(sinks))
    }
}
