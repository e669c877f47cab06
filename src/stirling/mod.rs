//! stirling — Stirling numbers of the second kind, S(n, k).
//!
//! Purpose
//! -------
//! Evaluate S(n, k), the number of ways to partition `n` labeled items into
//! `k` non-empty unlabeled blocks, as an `f64` over the whole practical range
//! of `n`, including values whose exact integer would not fit in a double.
//!
//! Key behaviors
//! -------------
//! - [`exact`] runs the recurrence S(n, k) = k·S(n−1, k) + S(n−1, k−1) with a
//!   rolling buffer of `min(k, n−k+1)` cells ([`workspace`]).
//! - [`temme`] evaluates Temme's second-order saddle-point expansion, built on
//!   the real Lambert W and log-binomial from [`crate::special`], with power
//!   series in place of Lambert W next to the diagonal.
//! - [`Stirling2`] (in [`dispatch`]) normalizes inputs, routes `n ≤ 50` (by
//!   default) to the exact path and larger `n` to the expansion, and applies
//!   the diagnostic policy from [`Stirling2Options`].
//! - [`validation`] holds the boundary conventions of both evaluators.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are real numbers standing in for non-negative integers; nothing
//!   is rejected. Out-of-domain requests give 0, degenerate ones give 1.
//! - Each call owns its working memory; no state survives between calls.
//! - Unchecked evaluation always returns an `f64` and emits at most one
//!   diagnostic: `+∞` with `Overflow`, NaN with `Memory`, `Slow`, or `Loss`.
//!   Results are never negative.
//!
//! Conventions
//! -----------
//! - Diagnostics carry the source name `"stirling2"` (or `"lambertw"` when
//!   the Lambert W solve fails inside the expansion).
//! - The kernels never log; the dispatcher emits `trace!` events naming the
//!   selected path, and the default sink turns diagnostics into `warn!`
//!   events.
//!
//! Testing notes
//! -------------
//! - Unit tests in each submodule cover its own rules; the integration test
//!   under `tests/` checks the combinatorial identities end to end.

pub mod dispatch;
pub mod errors;
pub mod exact;
pub mod options;
pub mod temme;
pub mod validation;
pub mod workspace;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::dispatch::{stirling2, Stirling2, Stirling2Path};
pub use self::errors::{StirlingError, StirlingResult};
pub use self::options::{Stirling2Options, DEFAULT_EXACT_THRESHOLD};

pub mod prelude {
    pub use super::{
        stirling2, Stirling2, Stirling2Options, Stirling2Path, StirlingError, StirlingResult,
    };
    pub use crate::diagnostics::{
        DiagnosticSink, RecordingSink, SfErrorAction, SfErrorKind, SfErrorPolicy, TracingSink,
    };
}
