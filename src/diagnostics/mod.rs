//! diagnostics — structured error reporting for special-function kernels.
//!
//! Purpose
//! -------
//! Give numeric kernels a side channel for recoverable failures. Kernels keep
//! their "always return an `f64`" contract and describe what went wrong
//! through a [`DiagnosticSink`]; callers decide what happens next through an
//! [`SfErrorPolicy`].
//!
//! Key behaviors
//! -------------
//! - [`SfErrorKind`] and [`SfError`] name and record failures.
//! - [`DiagnosticSink`] is the reporting interface; [`TracingSink`],
//!   [`RecordingSink`], and [`NullSink`] are the provided implementations.
//! - [`SfErrorPolicy`] maps each kind to an [`SfErrorAction`]
//!   (ignore / warn / raise).
//!
//! Invariants & assumptions
//! ------------------------
//! - A kernel reports at most once per evaluation and then returns
//!   immediately; the sink never influences the returned value.
//! - All sinks are `Send + Sync`.
//!
//! Downstream usage
//! ----------------
//! - Kernels take `&dyn DiagnosticSink`; the Stirling dispatcher buffers
//!   reports in a [`RecordingSink`] and replays them through the policy.
//!
//! Testing notes
//! -------------
//! - Each submodule carries its own unit tests; end-to-end routing through a
//!   policy is exercised in `stirling::dispatch`.

pub mod errors;
pub mod policy;
pub mod sink;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{SfError, SfErrorKind};
pub use self::policy::{SfErrorAction, SfErrorPolicy};
pub use self::sink::{DiagnosticSink, NullSink, RecordingSink, TracingSink};
