//! stirling::errors — configuration and checked-evaluation errors.
//!
//! Purpose
//! -------
//! Give the Stirling evaluator a typed error surface for the two places where
//! it can fail loudly: building [`Stirling2Options`](crate::stirling::Stirling2Options)
//! from caller input, and checked evaluation under a policy that raises on a
//! diagnostic.
//!
//! Key behaviors
//! -------------
//! - [`StirlingError`] covers invalid thresholds, invalid Lambert W
//!   tolerances, and raised diagnostics (wrapping [`SfError`]).
//! - `From<SfError>` lets checked code propagate raised diagnostics with `?`.
//! - With `python-bindings`, every variant maps to `ValueError` carrying the
//!   `Display` message.
//!
//! Invariants & assumptions
//! ------------------------
//! - Unchecked evaluation never produces a [`StirlingError`]; its contract is
//!   "return an `f64`, optionally emit one diagnostic".
//! - Messages are phrased in terms of the violated constraint.
//!
//! Testing notes
//! -------------
//! - Unit tests check that `Display` messages embed their payloads and that
//!   the `SfError` conversion preserves the wrapped record.

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, PyErr};

use crate::diagnostics::SfError;

/// Result alias for Stirling configuration and checked evaluation.
pub type StirlingResult<T> = Result<T, StirlingError>;

/// StirlingError — failures surfaced by the Stirling evaluator.
///
/// Variants
/// --------
/// - `InvalidThreshold { value, reason }`
///   The exact-path threshold is NaN, infinite, or negative.
/// - `InvalidTolerance { value, reason }`
///   The Lambert W tolerance is not a finite number in `(0, 1)`.
/// - `Raised(SfError)`
///   A diagnostic whose policy action is `Raise` was emitted during checked
///   evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum StirlingError {
    // ---- Options ----
    InvalidThreshold { value: f64, reason: &'static str },
    InvalidTolerance { value: f64, reason: &'static str },

    // ---- Evaluation ----
    Raised(SfError),
}

impl std::error::Error for StirlingError {}

impl std::fmt::Display for StirlingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StirlingError::InvalidThreshold { value, reason } => {
                write!(f, "Invalid exact-path threshold {value}: {reason}")
            }
            StirlingError::InvalidTolerance { value, reason } => {
                write!(f, "Invalid Lambert W tolerance {value}: {reason}")
            }
            StirlingError::Raised(err) => write!(f, "Raised special function error: {err}"),
        }
    }
}

impl From<SfError> for StirlingError {
    fn from(err: SfError) -> Self {
        StirlingError::Raised(err)
    }
}

#[cfg(feature = "python-bindings")]
impl From<StirlingError> for PyErr {
    fn from(err: StirlingError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
