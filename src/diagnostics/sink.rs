//! diagnostics::sink — destinations for special-function diagnostics.
//!
//! Purpose
//! -------
//! Define the call-style reporting interface kernels use when they detect a
//! recoverable failure, plus the sinks shipped with the crate.
//!
//! Key behaviors
//! -------------
//! - [`DiagnosticSink::report`] receives the reporting function name, the
//!   [`SfErrorKind`], and an optional detail string. Reporting never alters
//!   the caller's control flow.
//! - [`TracingSink`] turns each report into a structured `tracing` event.
//! - [`RecordingSink`] stores reports in memory so callers (and tests) can
//!   inspect or replay them.
//! - [`NullSink`] drops everything.
//!
//! Invariants & assumptions
//! ------------------------
//! - Sinks are shared across threads, so the trait requires `Send + Sync`.
//! - `report` must not block for long or panic.
use std::sync::{Mutex, MutexGuard};

use crate::diagnostics::errors::{SfError, SfErrorKind};

/// Receiver for diagnostics emitted by special-function kernels.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, source: &'static str, kind: SfErrorKind, detail: Option<&str>);
}

/// Sink emitting a `tracing` warning per diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, source: &'static str, kind: SfErrorKind, detail: Option<&str>) {
        tracing::warn!(
            target: "rust_special::sf_error",
            source,
            kind = kind.label(),
            detail = detail.unwrap_or(""),
            "special function error: {kind}"
        );
    }
}

/// Sink discarding every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&self, _source: &'static str, _kind: SfErrorKind, _detail: Option<&str>) {}
}

/// RecordingSink — in-memory buffer of reported diagnostics.
///
/// Notes
/// -----
/// - A poisoned lock is recovered rather than propagated; the stored records
///   are plain data and stay valid.
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: Mutex<Vec<SfError>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        RecordingSink::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<SfError>> {
        self.records.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Snapshot of every record so far, oldest first.
    pub fn records(&self) -> Vec<SfError> {
        self.lock().clone()
    }

    /// Drain the stored records, oldest first.
    pub fn take(&self) -> Vec<SfError> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Number of stored records of the given kind.
    pub fn count(&self, kind: SfErrorKind) -> usize {
        self.lock().iter().filter(|rec| rec.kind == kind).count()
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, source: &'static str, kind: SfErrorKind, detail: Option<&str>) {
        self.lock().push(SfError::new(source, kind, detail));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Recording, counting, and draining in `RecordingSink`.
    // - Concurrent reporting into a shared `RecordingSink`.
    // - That `NullSink` and `TracingSink` accept reports without a subscriber.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `RecordingSink` keeps reports in order and `take` drains
    // them.
    //
    // Given
    // -----
    // - One overflow and one memory report.
    //
    // Expect
    // ------
    // - `records()` returns both in order with their details; after `take()`
    //   the sink is empty.
    fn recording_sink_records_then_drains() {
        // Arrange
        let sink = RecordingSink::new();

        // Act
        sink.report("stirling2", SfErrorKind::Overflow, Some("step 3"));
        sink.report("stirling2", SfErrorKind::Memory, None);
        let snapshot = sink.records();
        let drained = sink.take();

        // Assert
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].kind, SfErrorKind::Overflow);
        assert_eq!(snapshot[0].detail.as_deref(), Some("step 3"));
        assert_eq!(snapshot[1].kind, SfErrorKind::Memory);
        assert_eq!(drained, snapshot);
        assert!(sink.is_empty());
    }

    #[test]
    // Purpose
    // -------
    // Ensure a shared `RecordingSink` collects reports from several threads.
    //
    // Given
    // -----
    // - Four threads each reporting 25 slow-convergence diagnostics.
    //
    // Expect
    // ------
    // - 100 records, all of kind `Slow`.
    fn recording_sink_is_thread_safe() {
        // Arrange
        let sink = Arc::new(RecordingSink::new());

        // Act
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let sink = Arc::clone(&sink);
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        sink.report("lambertw", SfErrorKind::Slow, None);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("reporter thread should not panic");
        }

        // Assert
        assert_eq!(sink.len(), 100);
        assert_eq!(sink.count(SfErrorKind::Slow), 100);
        assert_eq!(sink.count(SfErrorKind::Overflow), 0);
    }

    #[test]
    // Purpose
    // -------
    // Smoke-test the stateless sinks.
    //
    // Given
    // -----
    // - No tracing subscriber installed.
    //
    // Expect
    // ------
    // - Reporting returns normally.
    fn stateless_sinks_accept_reports() {
        NullSink.report("stirling2", SfErrorKind::Overflow, None);
        TracingSink.report("stirling2", SfErrorKind::Overflow, Some("detail"));
    }
}
