//! Base logging hook.

use std::sync::Arc;

use super::sink::{DiagnosticSink, Emission};

/// Tag used by the base hook for its emissions.
pub const BASE_TAG: &str = "base";

/// Capability shared by services that want a logging hook.
pub trait BaseHook: Send + Sync {
    /// Identifies the hook implementation.
    fn base_method(&self) -> &str {
        BASE_TAG
    }

    /// Emit a diagnostic tagged with [`BASE_TAG`] carrying `value`.
    fn log(&self, value: i64);
}

/// Default hook writing to an injected sink.
pub struct DefaultBaseHook {
    sink: Arc<dyn DiagnosticSink>,
}

impl DefaultBaseHook {
    pub fn new(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { sink }
    }
}

impl BaseHook for DefaultBaseHook {
    fn log(&self, value: i64) {
        self.sink.emit(&Emission::new(BASE_TAG, value));
    }
}
