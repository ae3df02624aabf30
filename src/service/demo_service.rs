//! Demo service orchestrating the hook, helper, and repository.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{helper, BaseHook, DefaultBaseHook, DiagnosticSink, Repository};

/// Service combining a logging hook with an owned repository.
pub struct DemoService {
    hook: Box<dyn BaseHook>,
    sink: Arc<dyn DiagnosticSink>,
    repository: Repository,
}

impl DemoService {
    /// Create a service whose hook and helper both write to `sink`.
    pub fn new(sink: Arc<dyn DiagnosticSink>) -> Self {
        let hook = Box::new(DefaultBaseHook::new(sink.clone()));
        Self::with_hook(hook, sink)
    }

    /// Create a service with a custom hook.
    pub fn with_hook(hook: Box<dyn BaseHook>, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            hook,
            sink,
            repository: Repository::new(),
        }
    }

    /// Log, emit the count, record the name, and return `"{name}-{count}"`.
    pub fn process(&mut self, name: &str, count: i64) -> String {
        debug!(
            "Processing: name={:?}, count={}, hook={}",
            name,
            count,
            self.hook.base_method()
        );

        self.hook.log(count);
        helper(self.sink.as_ref(), count);
        self.repository.find(name);

        format!("{}-{}", name, count)
    }

    /// Shorthand for `process(name, 1)`.
    pub fn process_once(&mut self, name: &str) -> String {
        self.process(name, 1)
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }
}
