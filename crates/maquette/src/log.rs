//! The import log collaborator.

use serde_yaml::Value;

/// Receives malformed-node reports during parsing. Fire-and-forget: a
/// report must never block or fail the import.
pub trait ImportLog {
    /// Report a malformed spec node. The subtree is dropped and parsing of
    /// siblings continues.
    fn report_error(&self, context: &str, node: &Value);
}

/// The stock log, emitting through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceLog;

impl ImportLog for TraceLog {
    fn report_error(&self, context: &str, node: &Value) {
        tracing::error!(context, node = ?node, "malformed spec node skipped");
    }
}
