//! rust_special — Stirling numbers of the second kind with optional Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the Stirling evaluator to Python via the `_rust_special` extension module.
//!
//! Key behaviors
//! -------------
//! - Re-export the core modules: [`stirling`] (exact recurrence, asymptotic
//!   expansion, dispatcher), [`special`] (Lambert W, binomials),
//!   [`diagnostics`] (error kinds, sinks, policy), and
//!   [`numerical_stability`].
//! - Expose [`stirling2`] at the root as the everyday entry point.
//! - With `python-bindings`, define a `stirling2(n, k, threshold=None,
//!   on_error=None)` function and the `#[pymodule]` initializer.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in the inner modules; this file performs only
//!   FFI glue, option parsing, and error mapping.
//! - Python calls go through checked evaluation, so a diagnostic whose action
//!   is `raise` becomes a `ValueError`; other diagnostics are logged through
//!   `tracing`.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code calls [`stirling2`] or builds a [`stirling::Stirling2`]
//!   with custom [`stirling::Stirling2Options`] and a
//!   [`diagnostics::DiagnosticSink`] of its choice.
//! - The Python packaging layer imports `_rust_special` and calls
//!   `stirling2` with floats.
//!
//! Testing notes
//! -------------
//! - Numerical behavior is covered by unit tests in the inner modules and by
//!   the integration test under `tests/`.

pub mod diagnostics;
pub mod numerical_stability;
pub mod special;
pub mod stirling;

pub use crate::stirling::stirling2;

#[cfg(feature = "python-bindings")]
use std::sync::Arc;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*};

#[cfg(feature = "python-bindings")]
use crate::{
    diagnostics::{SfErrorAction, SfErrorPolicy, TracingSink},
    stirling::{Stirling2, Stirling2Options},
};

/// stirling2(n, k, threshold=None, on_error=None)
///
/// Stirling number of the second kind S(n, k) as a float.
///
/// Parameters
/// ----------
/// n, k : float
///     Counts; fractional parts are discarded.
/// threshold : float, optional
///     Largest `n` evaluated by the exact recurrence (default 50).
/// on_error : {"ignore", "warn", "raise"}, optional
///     Action applied to every diagnostic kind (default "warn").
///
/// Raises
/// ------
/// ValueError
///     For an invalid threshold or action, or when `on_error="raise"` and the
///     evaluation overflows or fails.
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "stirling2")]
#[pyo3(signature = (n, k, threshold = None, on_error = None))]
fn py_stirling2(n: f64, k: f64, threshold: Option<f64>, on_error: Option<String>) -> PyResult<f64> {
    let policy = match on_error {
        Some(action) => {
            let action: SfErrorAction = action.parse().map_err(PyValueError::new_err)?;
            SfErrorPolicy::uniform(action)
        }
        None => SfErrorPolicy::default(),
    };
    let options = Stirling2Options::new(threshold, None, policy)?;
    let evaluator = Stirling2::new(options, Arc::new(TracingSink));
    Ok(evaluator.evaluate_checked(n, k)?)
}

#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_special(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_stirling2, m)?)?;
    Ok(())
}
