//! special — scalar special functions consumed by the Stirling kernels.
//!
//! Purpose
//! -------
//! Provide the numeric services the asymptotic Stirling approximation builds
//! on: the real principal branch of Lambert W and binomial coefficients for
//! real arguments.
//!
//! Key behaviors
//! -------------
//! - [`lambertw0`] solves `w·eʷ = z` for `w ≥ −1` with Halley's iteration and
//!   reports non-convergence through a [`DiagnosticSink`](crate::diagnostics::DiagnosticSink).
//! - [`binom`] and [`ln_binom`] evaluate `C(n, k)` and its logarithm, using
//!   `statrs` factorial tables for integral arguments and `ln Γ` otherwise.
//!
//! Invariants & assumptions
//! ------------------------
//! - All functions are pure apart from diagnostic emission.
//! - Out-of-domain inputs return NaN (or the documented zero convention);
//!   they never panic.
//!
//! Testing notes
//! -------------
//! - Unit tests check special values, defining identities, and agreement
//!   between alternative evaluation paths.
//! - Property tests check the Lambert W identity over the negative interval
//!   the Stirling expansion uses.

pub mod binom;
pub mod lambertw;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::binom::{binom, ln_binom};
pub use self::lambertw::{lambertw0, DEFAULT_LAMBERTW_TOL, LAMBERTW_MAX_ITER};
