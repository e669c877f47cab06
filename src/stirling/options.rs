//! Stirling2Options — configuration for the Stirling dispatcher.
//!
//! Purpose
//! -------
//! Hold the knobs of [`Stirling2`](crate::stirling::Stirling2): where the
//! exact recurrence hands over to the asymptotic expansion, how tightly the
//! Lambert W solve converges, and what happens to diagnostics.
//!
//! Key behaviors
//! -------------
//! - [`Stirling2Options::new`] validates caller-supplied values and falls back
//!   to [`DEFAULT_EXACT_THRESHOLD`] and [`DEFAULT_LAMBERTW_TOL`] for `None`.
//! - `Default` yields the documented baseline: threshold 50, tolerance 1e-8,
//!   warn on every diagnostic.
//!
//! Invariants & assumptions
//! ------------------------
//! - `exact_threshold` is finite and `≥ 0`.
//! - `lambertw_tol` is finite with `0 < tol < 1`.
//! - Raising the threshold far above 50 is allowed; the exact path then
//!   reports overflow where the asymptotic path would have stayed finite.
use crate::{
    diagnostics::SfErrorPolicy,
    special::DEFAULT_LAMBERTW_TOL,
    stirling::errors::{StirlingError, StirlingResult},
};

/// Largest `n` routed to the exact recurrence by default.
pub const DEFAULT_EXACT_THRESHOLD: f64 = 50.0;

/// Validated evaluation options.
///
/// Fields are private so every instance has passed [`Stirling2Options::new`]
/// (or is the default); read them through the getters.
///
/// Fields
/// ------
/// - `exact_threshold`: `f64`
///   Inputs with `n ≤ exact_threshold` use the exact recurrence.
/// - `lambertw_tol`: `f64`
///   Relative convergence tolerance for the Lambert W solve.
/// - `policy`: [`SfErrorPolicy`]
///   Per-kind handling of diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stirling2Options {
    exact_threshold: f64,
    lambertw_tol: f64,
    policy: SfErrorPolicy,
}

impl Stirling2Options {
    /// Build validated options.
    ///
    /// Parameters
    /// ----------
    /// - `exact_threshold`: `Option<f64>`
    ///   Crossover in `n`; `None` selects [`DEFAULT_EXACT_THRESHOLD`].
    /// - `lambertw_tol`: `Option<f64>`
    ///   Lambert W tolerance; `None` selects [`DEFAULT_LAMBERTW_TOL`].
    /// - `policy`: [`SfErrorPolicy`]
    ///
    /// Errors
    /// ------
    /// - `StirlingError::InvalidThreshold` for a NaN, infinite, or negative
    ///   threshold.
    /// - `StirlingError::InvalidTolerance` for a tolerance that is not finite
    ///   or not in `(0, 1)`.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use rust_special::stirling::Stirling2Options;
    /// # use rust_special::diagnostics::SfErrorPolicy;
    /// let opts = Stirling2Options::new(Some(40.0), None, SfErrorPolicy::default()).unwrap();
    /// assert_eq!(opts.exact_threshold(), 40.0);
    /// assert!(Stirling2Options::new(Some(f64::NAN), None, SfErrorPolicy::default()).is_err());
    /// ```
    pub fn new(
        exact_threshold: Option<f64>, lambertw_tol: Option<f64>, policy: SfErrorPolicy,
    ) -> StirlingResult<Self> {
        let exact_threshold = exact_threshold.unwrap_or(DEFAULT_EXACT_THRESHOLD);
        if !exact_threshold.is_finite() {
            return Err(StirlingError::InvalidThreshold {
                value: exact_threshold,
                reason: "threshold must be finite",
            });
        }
        if exact_threshold < 0.0 {
            return Err(StirlingError::InvalidThreshold {
                value: exact_threshold,
                reason: "threshold must be non-negative",
            });
        }

        let lambertw_tol = lambertw_tol.unwrap_or(DEFAULT_LAMBERTW_TOL);
        if !lambertw_tol.is_finite() {
            return Err(StirlingError::InvalidTolerance {
                value: lambertw_tol,
                reason: "tolerance must be finite",
            });
        }
        if lambertw_tol <= 0.0 || lambertw_tol >= 1.0 {
            return Err(StirlingError::InvalidTolerance {
                value: lambertw_tol,
                reason: "tolerance must lie in (0, 1)",
            });
        }

        Ok(Stirling2Options { exact_threshold, lambertw_tol, policy })
    }

    /// Largest `n` evaluated by the exact recurrence.
    pub fn exact_threshold(&self) -> f64 {
        self.exact_threshold
    }

    /// Relative tolerance of the Lambert W solve.
    pub fn lambertw_tol(&self) -> f64 {
        self.lambertw_tol
    }

    /// Diagnostic handling per kind.
    pub fn policy(&self) -> &SfErrorPolicy {
        &self.policy
    }
}

impl Default for Stirling2Options {
    fn default() -> Self {
        Stirling2Options {
            exact_threshold: DEFAULT_EXACT_THRESHOLD,
            lambertw_tol: DEFAULT_LAMBERTW_TOL,
            policy: SfErrorPolicy::default(),
        }
    }
}
