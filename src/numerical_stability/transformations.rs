//! Numerical stability utilities.
//!
//! Provides safe implementations of scalar transforms that lose precision or
//! overflow in naïve form. Each function switches strategy at an explicit
//! cutoff to keep `f64` arithmetic in a well-conditioned regime.
//!
//! # Provided items
//! - [`LOG_EXPM1_CUTOFF`]: switch point (20.0) between the small- and
//!   large-argument forms of `ln(eˣ − 1)`.
//! - [`safe_log_expm1(x)`]: `ln(eˣ − 1)` for `x > 0` without overflow for
//!   large `x` and without cancellation for small `x`.
//! - [`log_pow(base, exponent)`]: `exponent · ln(base)` with the `0⁰ = 1`
//!   convention.
//! - [`log_exprel(x)`]: `ln((eˣ − 1)/x)` for any real `x`, switching to a
//!   series below [`EXPREL_SERIES_CUTOFF`].

/// Cutoff above which `ln(eˣ − 1)` is evaluated as `x + ln(1 − e⁻ˣ)`.
pub const LOG_EXPM1_CUTOFF: f64 = 20.0;

/// Stable `ln(eˣ − 1)` on `(0, ∞)`.
///
/// - For `x > LOG_EXPM1_CUTOFF`, `eˣ` may overflow while `e⁻ˣ` is tiny, so
///   the value is `x + ln1p(−e⁻ˣ)`. The correction term is kept: callers
///   multiply the result by large counts and cannot afford to drop it.
/// - Otherwise it uses `ln(expm1(x))`, which stays accurate as `x → 0⁺`.
///
/// # Parameters
/// - `x`: finite and `> 0`. `x = 0` gives `-inf`; negative `x` gives NaN.
///
/// # Returns
/// - `ln(eˣ − 1)` as `f64`.
pub fn safe_log_expm1(x: f64) -> f64 {
    if x > LOG_EXPM1_CUTOFF { x + (-(-x).exp()).ln_1p() } else { x.exp_m1().ln() }
}

/// `exponent · ln(base)`, the logarithm of `base^exponent`.
///
/// Returns `0.0` when `exponent == 0.0`, matching `powf`'s `0⁰ = 1`, so a
/// zero base with a zero exponent does not produce `0 · (−∞) = NaN`.
pub fn log_pow(base: f64, exponent: f64) -> f64 {
    if exponent == 0.0 { 0.0 } else { exponent * base.ln() }
}

/// `|x|` below which [`log_exprel`] uses its series.
pub const EXPREL_SERIES_CUTOFF: f64 = 2e-2;

/// Stable `ln((eˣ − 1)/x)`, with the limit `0` at `x = 0`.
///
/// - For `|x| < EXPREL_SERIES_CUTOFF` the value is `x/2 + ln(sinh(y)/y)` with
///   `y = x/2`, the second term summed as `y²/6 − y⁴/180 + y⁶/2835 −
///   y⁸/37800`. The direct forms cancel there.
/// - For `x > LOG_EXPM1_CUTOFF` it is `safe_log_expm1(x) − ln x`, finite for
///   any `x`.
/// - Otherwise it is `ln(expm1(x)/x)`; for `x → −∞` this tends to `−ln|x|`.
///
/// Callers multiply the result by large counts, so the absolute error must
/// stay at rounding level relative to `|x|`.
pub fn log_exprel(x: f64) -> f64 {
    if x.abs() < EXPREL_SERIES_CUTOFF {
        let y = 0.5 * x;
        let y2 = y * y;
        let log_sinhc = y2 * (1.0 / 6.0 + y2 * (-1.0 / 180.0 + y2 * (1.0 / 2835.0 - y2 / 37800.0)));
        return y + log_sinhc;
    }
    if x > LOG_EXPM1_CUTOFF { safe_log_expm1(x) - x.ln() } else { (x.exp_m1() / x).ln() }
}
