//! Diagnostic sinks.
//!
//! Components never print directly. They hand an [`Emission`] to whatever
//! sink they were built with, so callers decide where diagnostics land and
//! tests can read them back in order.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;
use tracing::info;

/// A single tagged diagnostic value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Emission {
    /// Tag identifying the emitter ("base", "count")
    pub tag: String,
    /// Integer payload
    pub value: i64,
}

impl Emission {
    pub fn new(tag: impl Into<String>, value: i64) -> Self {
        Self {
            tag: tag.into(),
            value,
        }
    }
}

impl fmt::Display for Emission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tag, self.value)
    }
}

/// Destination for diagnostic emissions.
pub trait DiagnosticSink: Send + Sync {
    /// Record or forward one emission.
    fn emit(&self, emission: &Emission);
}

/// Writes each emission as a line on stdout.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn emit(&self, emission: &Emission) {
        let stdout = io::stdout();
        let mut stdout = stdout.lock();
        // Diagnostics are best-effort; a closed pipe must not abort processing
        let _ = writeln!(stdout, "{}", emission);
    }
}

/// Forwards emissions to the tracing subscriber.
#[derive(Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, emission: &Emission) {
        info!(tag = %emission.tag, value = emission.value, "diagnostic");
    }
}

/// Keeps emissions in memory, in call order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    emissions: Mutex<Vec<Emission>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far.
    pub fn emissions(&self) -> Vec<Emission> {
        self.lock().clone()
    }

    /// Drop everything recorded so far.
    #[allow(dead_code)]
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Emission>> {
        // Poisoning only means another emitter panicked mid-call
        self.emissions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DiagnosticSink for RecordingSink {
    fn emit(&self, emission: &Emission) {
        self.lock().push(emission.clone());
    }
}

/// Forwards each emission to every inner sink.
pub struct TeeSink {
    sinks: Vec<Arc<dyn DiagnosticSink>>,
}

impl TeeSink {
    pub fn new(sinks: Vec<Arc<dyn DiagnosticSink>>) -> Self {
        Self { sinks }
    }
}

impl DiagnosticSink for TeeSink {
    fn emit(&self, emission: &Emission) {
        for sink in &self.sinks {
            sink.emit(emission);
        }
    }
}

/// Discards everything.
#[derive(Debug, Default)]
pub struct SilentSink;

impl DiagnosticSink for SilentSink {
    fn emit(&self, _emission: &Emission) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emission_display() {
        assert_eq!(Emission::new("base", 3).to_string(), "base 3");
        assert_eq!(Emission::new("count", -7).to_string(), "count -7");
    }

    #[test]
    fn test_recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        sink.emit(&Emission::new("base", 1));
        sink.emit(&Emission::new("count", 2));

        assert_eq!(
            sink.emissions(),
            vec![Emission::new("base", 1), Emission::new("count", 2)]
        );

        sink.clear();
        assert!(sink.emissions().is_empty());
    }

    #[test]
    fn test_tee_sink_fans_out() {
        let first = Arc::new(RecordingSink::new());
        let second = Arc::new(RecordingSink::new());
        let sinks: Vec<Arc<dyn DiagnosticSink>> =
            vec![first.clone(), second.clone(), Arc::new(SilentSink)];
        let tee = TeeSink::new(sinks);

        tee.emit(&Emission::new("count", 5));

        assert_eq!(first.emissions(), vec![Emission::new("count", 5)]);
        assert_eq!(second.emissions(), vec![Emission::new("count", 5)]);
    }
}
