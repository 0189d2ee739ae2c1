//! Diagnostic sinks
//!
//! A chain reports the message of a failing rule through a [`DiagnosticSink`].
//! The default [`TracingSink`] forwards to `tracing`; [`MemorySink`] keeps the
//! entries for inspection and [`NoopSink`] drops them.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// `tracing` target used by [`TracingSink`].
pub const TARGET: &str = "chain_validator";

// ============================================================================
// SEVERITY
// ============================================================================

/// Severity attached to an emitted diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A rule failed or faulted (default).
    #[default]
    Error,
    /// Worth surfacing, does not indicate a broken subject.
    Warning,
    /// Informational.
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

// ============================================================================
// SINK TRAIT
// ============================================================================

/// Destination for chain diagnostics.
///
/// Implementations must be shareable because a finished chain can be
/// evaluated from several threads at once.
pub trait DiagnosticSink: Send + Sync {
    /// Records one diagnostic.
    fn emit(&self, severity: Severity, message: &str);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for std::sync::Arc<S> {
    fn emit(&self, severity: Severity, message: &str) {
        (**self).emit(severity, message);
    }
}

// ============================================================================
// TRACING SINK
// ============================================================================

/// Forwards diagnostics to `tracing` events under [`TARGET`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Error => tracing::error!(target: TARGET, "{message}"),
            Severity::Warning => tracing::warn!(target: TARGET, "{message}"),
            Severity::Info => tracing::info!(target: TARGET, "{message}"),
        }
    }
}

// ============================================================================
// MEMORY SINK
// ============================================================================

/// Keeps every diagnostic in memory, in emission order.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<(Severity, String)>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded entries.
    pub fn entries(&self) -> Vec<(Severity, String)> {
        self.entries.lock().clone()
    }

    /// Recorded messages without severities.
    pub fn messages(&self) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .map(|(_, message)| message.clone())
            .collect()
    }

    /// Returns `true` if an entry with exactly this message and severity exists.
    pub fn contains(&self, message: &str, severity: Severity) -> bool {
        self.entries
            .lock()
            .iter()
            .any(|(s, m)| *s == severity && m == message)
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Forgets all recorded entries.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&self, severity: Severity, message: &str) {
        self.entries.lock().push((severity, message.to_owned()));
    }
}

// ============================================================================
// NOOP SINK
// ============================================================================

/// Discards every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn emit(&self, _severity: Severity, _message: &str) {}
}
