//! Stirling2 — routes each S(n, k) request to the exact or asymptotic path.
//!
//! Purpose
//! -------
//! Provide the public entry points for Stirling numbers of the second kind.
//! A request is normalized, sent to the exact recurrence when `n` is at or
//! below the configured threshold and to Temme's expansion otherwise, and any
//! diagnostics raised along the way are filtered through the
//! [`SfErrorPolicy`](crate::diagnostics::SfErrorPolicy) before they reach the
//! sink.
//!
//! Key behaviors
//! -------------
//! - NaN inputs give NaN without a diagnostic; inputs are floored.
//! - `n = +∞` with finite `k ≥ 2` gives `+∞` and one `Overflow` diagnostic.
//! - Diagnostics are collected per call, then replayed: `Ignore` drops them,
//!   `Warn` forwards them, `Raise` forwards them from [`Stirling2::evaluate`]
//!   and turns into `Err` from [`Stirling2::evaluate_checked`].
//! - [`stirling2`] evaluates with default options and the tracing sink.
//!
//! Invariants & assumptions
//! ------------------------
//! - Evaluation holds no state between calls; repeated calls with equal
//!   inputs return bit-identical values.
//! - `Stirling2` is `Send + Sync` and can be shared behind `Arc`.
use std::sync::Arc;

use crate::{
    diagnostics::{
        DiagnosticSink, RecordingSink, SfError, SfErrorAction, SfErrorKind, TracingSink,
    },
    stirling::{
        errors::StirlingResult,
        exact,
        options::Stirling2Options,
        temme,
        validation::{normalize, Normalized},
    },
};

const SOURCE: &str = "stirling2";

/// Evaluator selected for a given `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stirling2Path {
    /// Rolling-array recurrence.
    Exact,
    /// Temme's second-order expansion.
    Asymptotic,
}

/// Stirling2 — configured evaluator for S(n, k).
///
/// Fields
/// ------
/// - `options`: [`Stirling2Options`]
///   Threshold, Lambert W tolerance, and diagnostic policy.
/// - `sink`: `Arc<dyn DiagnosticSink>`
///   Destination for diagnostics the policy lets through.
#[derive(Clone)]
pub struct Stirling2 {
    options: Stirling2Options,
    sink: Arc<dyn DiagnosticSink>,
}

impl std::fmt::Debug for Stirling2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stirling2").field("options", &self.options).finish_non_exhaustive()
    }
}

impl Default for Stirling2 {
    fn default() -> Self {
        Stirling2::new(Stirling2Options::default(), Arc::new(TracingSink))
    }
}

impl Stirling2 {
    pub fn new(options: Stirling2Options, sink: Arc<dyn DiagnosticSink>) -> Self {
        Stirling2 { options, sink }
    }

    pub fn options(&self) -> &Stirling2Options {
        &self.options
    }

    /// Evaluator used for `n` (after flooring).
    ///
    /// NaN routes to [`Stirling2Path::Asymptotic`], though evaluation returns
    /// NaN before either path runs.
    pub fn path(&self, n: f64) -> Stirling2Path {
        route(&self.options, n.floor())
    }

    /// S(n, k) with diagnostics filtered by the policy.
    ///
    /// # Returns
    /// - The value, `+∞` on overflow, or NaN on NaN input, allocation failure,
    ///   or Lambert W non-convergence. Never fails.
    ///
    /// # Examples
    /// ```rust
    /// # use rust_special::stirling::Stirling2;
    /// let s = Stirling2::default();
    /// assert_eq!(s.evaluate(10.0, 3.0), 9330.0);
    /// ```
    pub fn evaluate(&self, n: f64, k: f64) -> f64 {
        evaluate_with(&self.options, self.sink.as_ref(), n, k)
    }

    /// S(n, k), failing on the first diagnostic whose action is `Raise`.
    ///
    /// # Errors
    /// - `StirlingError::Raised` carrying the raised diagnostic. `Warn`
    ///   diagnostics before it have already been forwarded to the sink.
    pub fn evaluate_checked(&self, n: f64, k: f64) -> StirlingResult<f64> {
        let (value, records) = resolve(&self.options, n, k);
        for record in records {
            match self.options.policy().action(record.kind) {
                SfErrorAction::Ignore => {}
                SfErrorAction::Warn => forward(self.sink.as_ref(), &record),
                SfErrorAction::Raise => return Err(record.into()),
            }
        }
        Ok(value)
    }
}

/// S(n, k) with default options, reporting diagnostics through `tracing`.
///
/// # Examples
/// ```rust
/// assert_eq!(rust_special::stirling2(5.0, 2.0), 15.0);
/// assert_eq!(rust_special::stirling2(3.0, 5.0), 0.0);
/// assert_eq!(rust_special::stirling2(1000.0, 1000.0), 1.0);
/// ```
pub fn stirling2(n: f64, k: f64) -> f64 {
    evaluate_with(&Stirling2Options::default(), &TracingSink, n, k)
}

fn evaluate_with(options: &Stirling2Options, sink: &dyn DiagnosticSink, n: f64, k: f64) -> f64 {
    let (value, records) = resolve(options, n, k);
    for record in &records {
        if options.policy().action(record.kind) != SfErrorAction::Ignore {
            forward(sink, record);
        }
    }
    value
}

fn route(options: &Stirling2Options, n: f64) -> Stirling2Path {
    if n <= options.exact_threshold() { Stirling2Path::Exact } else { Stirling2Path::Asymptotic }
}

/// Run one evaluation, collecting its diagnostics instead of forwarding them.
fn resolve(options: &Stirling2Options, n: f64, k: f64) -> (f64, Vec<SfError>) {
    let recorder = RecordingSink::new();
    let value = match normalize(n, k) {
        Normalized::NotANumber => f64::NAN,
        Normalized::Unbounded => {
            recorder.report(SOURCE, SfErrorKind::Overflow, Some("n is +inf"));
            f64::INFINITY
        }
        Normalized::Request { n, k } => {
            let path = route(options, n);
            tracing::trace!(target: "rust_special::stirling2", n, k, ?path, "evaluating S(n, k)");
            match path {
                Stirling2Path::Exact => exact::evaluate(n, k, &recorder),
                Stirling2Path::Asymptotic => temme::evaluate(n, k, options.lambertw_tol(), &recorder),
            }
        }
    };
    (value, recorder.take())
}

fn forward(sink: &dyn DiagnosticSink, record: &SfError) {
    sink.report(record.source, record.kind, record.detail.as_deref());
}
