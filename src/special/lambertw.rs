//! Principal branch of the Lambert W function on the real line.
//!
//! `W₀(z)` is the real solution `w ≥ −1` of `w·eʷ = z`, defined for
//! `z ≥ −1/e`. The solver picks a starting point by region and refines it with
//! Halley's iteration:
//!
//! - near the branch point `z = −1/e`: the series in `p = √(2(e·z + 1))`,
//! - on `[−1/e + 0.3, 1.5)`: a (2, 2) Padé approximant around 0,
//! - on `[1.5, ∞)`: the asymptotic form `ln z − ln ln z`.
//!
//! Iteration stops once the relative step is at most the tolerance, or once
//! the residual `w·eʷ − z` is at rounding level (near the branch point the
//! step cannot shrink below the conditioning of `z`). If neither happens
//! within [`LAMBERTW_MAX_ITER`] steps the solver reports [`SfErrorKind::Slow`]
//! and returns NaN.
use std::f64::consts::E;

use crate::diagnostics::{DiagnosticSink, SfErrorKind};

/// Tolerance used by callers that do not supply one.
pub const DEFAULT_LAMBERTW_TOL: f64 = 1e-8;

/// Halley iteration budget.
pub const LAMBERTW_MAX_ITER: usize = 100;

/// −1/e, the branch point.
const BRANCH_POINT: f64 = -1.0 / E;

/// Arguments this far below −1/e are treated as rounding noise and snapped to
/// the branch point.
const BRANCH_POINT_SLACK: f64 = 4.0 * f64::EPSILON;

/// Residual, relative to `|z|`, treated as an exact solve.
const RESIDUAL_FLOOR: f64 = 2.0 * f64::EPSILON;

const SOURCE: &str = "lambertw";

/// Real principal-branch Lambert W.
///
/// # Parameters
/// - `z`: argument; must satisfy `z ≥ −1/e`.
/// - `tol`: relative convergence tolerance for Halley's iteration.
/// - `sink`: receives a `Domain` diagnostic for `z < −1/e` and a `Slow`
///   diagnostic on non-convergence.
///
/// # Returns
/// - `W₀(z)`, with `W₀(0) = 0`, `W₀(−1/e) = −1`, `W₀(+∞) = +∞`.
/// - NaN for NaN input, for `z < −1/e`, or when the iteration fails to
///   converge.
pub fn lambertw0(z: f64, tol: f64, sink: &dyn DiagnosticSink) -> f64 {
    lambertw0_with_budget(z, tol, LAMBERTW_MAX_ITER, sink)
}

fn lambertw0_with_budget(z: f64, tol: f64, max_iter: usize, sink: &dyn DiagnosticSink) -> f64 {
    if z.is_nan() {
        return f64::NAN;
    }
    if z == f64::INFINITY {
        return f64::INFINITY;
    }
    if z == 0.0 {
        return 0.0;
    }
    let offset = z - BRANCH_POINT;
    if offset < -BRANCH_POINT_SLACK {
        sink.report(SOURCE, SfErrorKind::Domain, Some("argument below -1/e on branch 0"));
        return f64::NAN;
    }
    if offset <= 0.0 {
        return -1.0;
    }

    let mut w = initial_guess(z);
    for _ in 0..max_iter {
        let ew = w.exp();
        let wew = w * ew;
        let wewz = wew - z;
        if wewz.abs() <= RESIDUAL_FLOOR * z.abs() {
            return w;
        }
        let next = w - wewz / (wew + ew - (w + 2.0) * wewz / (2.0 * w + 2.0));
        if (next - w).abs() <= tol * next.abs() {
            return next;
        }
        w = next;
    }

    sink.report(SOURCE, SfErrorKind::Slow, None);
    f64::NAN
}

fn initial_guess(z: f64) -> f64 {
    if z - BRANCH_POINT < 0.3 {
        branch_point_series(z)
    } else if z < 1.5 {
        pade0(z)
    } else {
        let lz = z.ln();
        lz - lz.ln()
    }
}

/// Series around the branch point, truncated after the cubic term.
fn branch_point_series(z: f64) -> f64 {
    let p = (2.0 * (E * z + 1.0)).max(0.0).sqrt();
    -1.0 + p * (1.0 + p * (-1.0 / 3.0 + p * (11.0 / 72.0)))
}

fn pade0(z: f64) -> f64 {
    z * (3.0 + z * (6.0 + z)) / (3.0 + z * (9.0 + 5.0 * z))
}
