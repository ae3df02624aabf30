//! Count helper.

use super::sink::{DiagnosticSink, Emission};

/// Tag used by [`helper`].
pub const COUNT_TAG: &str = "count";

/// Emit the count as a diagnostic.
pub fn helper(sink: &dyn DiagnosticSink, count: i64) {
    sink.emit(&Emission::new(COUNT_TAG, count));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sink::RecordingSink;

    #[test]
    fn test_helper_emits_count() {
        let sink = RecordingSink::new();
        helper(&sink, 42);
        assert_eq!(sink.emissions(), vec![Emission::new("count", 42)]);
    }
}
