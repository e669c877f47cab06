//! numerical_stability — guarded scalar transforms shared by the kernels.
//!
//! Purpose
//! -------
//! Centralize transforms whose naïve form overflows or cancels, so the
//! special-function kernels can assume well-conditioned `f64` arithmetic.
//!
//! Conventions
//! -----------
//! - Pure functions only: no logging, no I/O, no global state.
//! - Domain checks are the caller's job; out-of-domain inputs produce the
//!   IEEE result (NaN or ±∞) rather than an error.

pub mod transformations;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::transformations::{
    log_exprel, log_pow, safe_log_expm1, EXPREL_SERIES_CUTOFF, LOG_EXPM1_CUTOFF,
};
