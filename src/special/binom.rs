//! Binomial coefficients for real arguments.
//!
//! Integral arguments go through `statrs`' factorial tables, except that a
//! short side `min(k, n−k) ≤ SHORT_SIDE_MAX` is multiplied (or, for the
//! logarithm, summed) term by term; `statrs` forms `ln n!` differences, which
//! cancel badly for huge `n`.
//! Everything else uses `ln Γ`. Both functions follow the usual conventions for integral
//! arguments outside `0 ≤ k ≤ n` (the coefficient is zero).
use statrs::function::{
    factorial::{binomial, ln_binomial},
    gamma::{gamma, ln_gamma},
};

/// Largest `f64` that converts to `u64` without loss of integrality.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Longest short side evaluated term by term.
const SHORT_SIDE_MAX: u64 = 32;

fn as_count(x: f64) -> Option<u64> {
    if x >= 0.0 && x <= MAX_EXACT_INTEGER && x.fract() == 0.0 { Some(x as u64) } else { None }
}

/// Pairs `(n − s + i, i)`, `i = 1..=s`, of `C(n, k)` when the short side `s`
/// is at most [`SHORT_SIDE_MAX`]. Requires `k ≤ n`.
fn short_side_terms(n: u64, k: u64) -> Option<impl Iterator<Item = (f64, f64)>> {
    let short = k.min(n - k);
    if short > SHORT_SIDE_MAX {
        return None;
    }
    let base = (n - short) as f64;
    Some((1..=short).map(move |i| (base + i as f64, i as f64)))
}

/// Natural logarithm of the binomial coefficient `C(n, k)`.
///
/// # Returns
/// - `ln C(n, k)` for `n ≥ 0` and `0 ≤ k ≤ n` (real or integral).
/// - `-inf` for integral `k < 0` or `k > n` (the coefficient is 0).
/// - NaN for NaN input or non-integral arguments outside `0 ≤ k ≤ n`.
pub fn ln_binom(n: f64, k: f64) -> f64 {
    if n.is_nan() || k.is_nan() {
        return f64::NAN;
    }
    if let (Some(n_int), Some(k_int)) = (as_count(n), as_count(k)) {
        if k_int > n_int {
            return f64::NEG_INFINITY;
        }
        if let Some(terms) = short_side_terms(n_int, k_int) {
            return terms.map(|(num, den)| (num / den).ln()).sum();
        }
        return ln_binomial(n_int, k_int);
    }
    if n >= 0.0 && k >= 0.0 && k <= n {
        return ln_gamma(n + 1.0) - ln_gamma(k + 1.0) - ln_gamma(n - k + 1.0);
    }
    if k.fract() == 0.0 && (k < 0.0 || k > n) && n.fract() == 0.0 {
        return f64::NEG_INFINITY;
    }
    f64::NAN
}

/// Binomial coefficient `C(n, k)` for real arguments.
///
/// # Returns
/// - `C(n, k)` for non-negative integral `n`, `k` (0 when `k > n`).
/// - `Γ(n+1) / (Γ(k+1)·Γ(n−k+1))` for real arguments, with the ratio taken
///   in log space when `0 ≤ k ≤ n` to avoid spurious overflow.
/// - 0 for integral `k < 0`; NaN for NaN input.
pub fn binom(n: f64, k: f64) -> f64 {
    if n.is_nan() || k.is_nan() {
        return f64::NAN;
    }
    if let (Some(n_int), Some(k_int)) = (as_count(n), as_count(k)) {
        if k_int > n_int {
            return 0.0;
        }
        // Each partial product is C(n − s + i, i), exact while it fits in 53 bits.
        if let Some(terms) = short_side_terms(n_int, k_int) {
            return terms.fold(1.0, |acc, (num, den)| acc * num / den);
        }
        return binomial(n_int, k_int);
    }
    if k < 0.0 && k.fract() == 0.0 {
        return 0.0;
    }
    if n >= 0.0 && k >= 0.0 && k <= n {
        return ln_binom(n, k).exp();
    }
    gamma(n + 1.0) / (gamma(k + 1.0) * gamma(n - k + 1.0))
}
