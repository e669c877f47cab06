//! Temme's asymptotic expansion of S(n, k).
//!
//! Purpose
//! -------
//! Approximate S(n, k) for large `n` in closed form, without the `O(n·k)`
//! work of the recurrence and without overflowing on the way to a
//! representable answer.
//!
//! Key behaviors
//! -------------
//! - With `t0 = (n−k)/k`, the saddle point is `x0 = t0 + g` where
//!   `g = W₀(−d) + 1`, `d = (1+t0)·e^{−(1+t0)}`. The expansion is written in
//!   terms of `g` and `W = g − 1` so that neither `x0 − t0` nor the `F1`
//!   numerator is formed by subtracting large, nearly equal terms.
//! - Near the diagonal (`t0 < NEAR_DIAGONAL_CUTOFF`) `−d` lies within
//!   rounding distance of −1/e and Lambert W cannot resolve `g`. There `g`,
//!   the amplitude `F` and the correction `F1` come from their power series in
//!   `t0`.
//! - The exponent is `A = k·[−t0·ln(1 + g/t0) + g + ln((1 − e^{−x0})/x0)]`,
//!   which equals `−n ln x0 + k ln(e^{x0} − 1) − k t0 + (n−k) ln t0` but
//!   stays `O(n−k)` in size instead of `O(n)`.
//! - `e^A`, `k^{n−k}`, `C(n, k)` and `F − F1/k` are combined as one sum of
//!   logarithms and exponentiated once.
//!
//! Failure handling
//! ----------------
//! - Lambert W non-convergence surfaces as NaN; the solver has already
//!   reported it.
//! - A leading term `C(n,k)·k^{n−k}·e^A·F` beyond the `f64` range is `+∞`
//!   with one [`SfErrorKind::Overflow`] report, whatever the correction.
//! - A non-positive or non-finite correction factor is one
//!   [`SfErrorKind::Loss`] report and NaN. The result is never negative.
//!
//! Notes
//! -----
//! - Inputs are used as given (no flooring); non-integer `k` goes through the
//!   gamma-based binomial.
//! - Relative error is about `1e-5` just above `n = 50` and shrinks as `n`
//!   grows. It is never reported.
use crate::{
    diagnostics::{DiagnosticSink, SfErrorKind},
    numerical_stability::{log_exprel, log_pow},
    special::{lambertw0, ln_binom},
    stirling::validation::asymptotic_boundary,
};

const SOURCE: &str = "stirling2";

/// `t0` below which the saddle point comes from series instead of Lambert W.
pub const NEAR_DIAGONAL_CUTOFF: f64 = 1e-2;

/// `ln(f64::MAX)`.
const LN_F64_MAX: f64 = 709.782_712_893_384;

/// `g / t0` as a series in `t0`, where `g = W₀(−d) + 1`.
const GAP_SERIES: [f64; 12] = [
    1.0,
    -2.0 / 3.0,
    4.0 / 9.0,
    -44.0 / 135.0,
    104.0 / 405.0,
    -40.0 / 189.0,
    7648.0 / 42525.0,
    -2848.0 / 18225.0,
    31712.0 / 229_635.0,
    -23_429_344.0 / 189_448_875.0,
    89_072_576.0 / 795_685_275.0,
    -1_441_952_704.0 / 14_105_329_875.0,
];

/// Amplitude `F` as a series in `t0`.
const AMPLITUDE_SERIES: [f64; 8] = [
    1.0,
    -1.0 / 6.0,
    11.0 / 72.0,
    -91.0 / 720.0,
    5663.0 / 51840.0,
    -212_077.0 / 2_177_280.0,
    257_077.0 / 2_903_040.0,
    -63_982_043.0 / 783_820_800.0,
];

/// `F1 / t0` as a series in `t0`.
const CORRECTION_SERIES: [f64; 6] = [
    1.0 / 12.0,
    -487.0 / 3240.0,
    7931.0 / 38880.0,
    -411_833.0 / 1_632_960.0,
    6_452_293.0 / 21_772_800.0,
    -396_611_267.0 / 1_175_731_200.0,
];

fn horner(coeffs: &[f64], t: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * t + c)
}

/// Saddle-point quantities in cancellation-free form.
#[derive(Debug, Clone, Copy)]
struct SaddlePoint {
    /// `(n − k)/k`.
    t0: f64,
    /// `x0 − t0 = W + 1`.
    gap: f64,
    /// `W₀(−d)`.
    w: f64,
}

impl SaddlePoint {
    /// `None` when the Lambert W solve failed (already reported).
    fn locate(n: f64, k: f64, tol: f64, sink: &dyn DiagnosticSink) -> Option<Self> {
        let t0 = (n - k) / k;
        if t0 < NEAR_DIAGONAL_CUTOFF {
            let gap = t0 * horner(&GAP_SERIES, t0);
            return Some(SaddlePoint { t0, gap, w: gap - 1.0 });
        }
        let inv_mu = n / k;
        let d = (-inv_mu).exp() * inv_mu;
        let w = lambertw0(-d, tol, sink);
        if w.is_nan() {
            return None;
        }
        Some(SaddlePoint { t0, gap: w + 1.0, w })
    }

    fn near_diagonal(&self) -> bool {
        self.t0 < NEAR_DIAGONAL_CUTOFF
    }

    /// Leading amplitude `F`.
    fn amplitude(&self) -> f64 {
        let SaddlePoint { t0, gap, .. } = *self;
        if self.near_diagonal() {
            return horner(&AMPLITUDE_SERIES, t0);
        }
        (t0 / ((1.0 + t0) * gap)).sqrt()
    }

    /// Second-order coefficient `F1`, given the amplitude `f`.
    ///
    /// The numerator in `(t0, g, W)` is
    /// `W·(t0³(2W − 3) + t0·g²(2t0 + 2g + 3)) − 2g³`; expanding it back in
    /// `x0` reintroduces `t0⁵`-sized terms that cancel.
    fn correction(&self, f: f64) -> f64 {
        let SaddlePoint { t0, gap, w } = *self;
        if self.near_diagonal() {
            return t0 * horner(&CORRECTION_SERIES, t0);
        }
        let g2 = gap * gap;
        let num = w * (t0 * t0 * t0 * (2.0 * w - 3.0) + t0 * g2 * (2.0 * t0 + 2.0 * gap + 3.0))
            - 2.0 * g2 * gap;
        let denom = 24.0 * f * (1.0 + t0) * (1.0 + t0) * g2 * g2;
        num / denom
    }

    /// Exponent `A` of the leading term.
    fn exponent(&self, k: f64) -> f64 {
        let SaddlePoint { t0, gap, .. } = *self;
        let x0 = t0 + gap;
        k * (-t0 * (gap / t0).ln_1p() + gap + log_exprel(-x0))
    }
}

/// Second-order asymptotic S(n, k).
///
/// # Parameters
/// - `n`, `k`: real-valued; intended for `n` well above the exact range.
/// - `tol`: relative tolerance for the Lambert W solve.
/// - `sink`: receives Lambert W diagnostics, overflow, and loss of accuracy.
///
/// # Returns
/// - `1` on `n = k ≥ 0` or (`n > 0`, `k = 1`); `0` for `k ≤ 0`, `k > n`, or
///   `n < 0`.
/// - Otherwise the expansion value (never negative), `+∞` past the `f64`
///   range, NaN if an input is NaN or the evaluation failed with a
///   diagnostic.
///
/// # Examples
/// ```rust
/// # use rust_special::diagnostics::NullSink;
/// # use rust_special::special::DEFAULT_LAMBERTW_TOL;
/// # use rust_special::stirling::temme;
/// let s = temme::evaluate(60.0, 2.0, DEFAULT_LAMBERTW_TOL, &NullSink);
/// let exact = 2f64.powi(59) - 1.0;
/// assert!(((s - exact) / exact).abs() < 1e-6);
/// ```
pub fn evaluate(n: f64, k: f64, tol: f64, sink: &dyn DiagnosticSink) -> f64 {
    if n.is_nan() || k.is_nan() {
        return f64::NAN;
    }
    if let Some(value) = asymptotic_boundary(n, k) {
        return value;
    }

    let Some(saddle) = SaddlePoint::locate(n, k, tol, sink) else {
        return f64::NAN;
    };
    let f = saddle.amplitude();
    let log_lead = saddle.exponent(k) + log_pow(k, n - k) + ln_binom(n, k) + f.ln();

    if log_lead.is_nan() {
        sink.report(SOURCE, SfErrorKind::Loss, Some("leading term is not a number"));
        return f64::NAN;
    }
    if log_lead > LN_F64_MAX {
        let detail = format!("asymptotic value exceeds f64 range (ln S ≈ {log_lead:.1})");
        sink.report(SOURCE, SfErrorKind::Overflow, Some(&detail));
        return f64::INFINITY;
    }

    let ratio = 1.0 - saddle.correction(f) / (k * f);
    if !(ratio.is_finite() && ratio > 0.0) {
        let detail = format!("second-order correction factor {ratio} is not positive");
        sink.report(SOURCE, SfErrorKind::Loss, Some(&detail));
        return f64::NAN;
    }

    let value = (log_lead + ratio.ln()).exp();
    if value == f64::INFINITY {
        sink.report(SOURCE, SfErrorKind::Overflow, Some("asymptotic value exceeds f64 range"));
    }
    value
}
