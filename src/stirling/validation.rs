//! stirling::validation — domain conventions for S(n, k).
//!
//! Purpose
//! -------
//! Keep the boundary policies of the two evaluators, and the input
//! normalization applied by the dispatcher, in one place so the kernels can
//! assume they only see the interior of the domain.
//!
//! Key behaviors
//! -------------
//! - [`exact_boundary`]: `(0,0)` and `(1,1)` give 1; `k ≤ 0`, `k > n`, or
//!   `n < 0` give 0.
//! - [`asymptotic_boundary`]: `n = k ≥ 0` or (`n > 0`, `k = 1`) give 1; then
//!   `k ≤ 0`, `k > n`, or `n < 0` give 0.
//! - [`normalize`]: NaN passes through as a NaN result, inputs are floored,
//!   and `n = +∞` with finite `k ≥ 2` is flagged as overflow.
//!
//! Invariants & assumptions
//! ------------------------
//! - The boundary functions are checked in the order listed; the identity
//!   cases take precedence over the zero cases.
//! - None of these functions report diagnostics; the caller decides.
//!
//! Testing notes
//! -------------
//! - Unit tests walk each rule and the precedence between them.

/// Outcome of input normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Normalized {
    /// A NaN input; the result is NaN.
    NotANumber,
    /// `n = +∞` with a finite `k ≥ 2`; the result is `+∞`.
    Unbounded,
    /// Floored inputs ready for routing.
    Request { n: f64, k: f64 },
}

/// Floor `(n, k)` and classify the non-finite cases.
pub fn normalize(n: f64, k: f64) -> Normalized {
    if n.is_nan() || k.is_nan() {
        return Normalized::NotANumber;
    }
    let n = n.floor();
    let k = k.floor();
    if n == f64::INFINITY && k.is_finite() && k >= 2.0 {
        return Normalized::Unbounded;
    }
    Normalized::Request { n, k }
}

/// Boundary policy of the exact recurrence; `None` means "compute".
pub fn exact_boundary(n: f64, k: f64) -> Option<f64> {
    if (n == 0.0 && k == 0.0) || (n == 1.0 && k == 1.0) {
        return Some(1.0);
    }
    if k <= 0.0 || k > n || n < 0.0 {
        return Some(0.0);
    }
    None
}

/// Boundary policy of the asymptotic expansion; `None` means "compute".
pub fn asymptotic_boundary(n: f64, k: f64) -> Option<f64> {
    if (n == k && n >= 0.0) || (n > 0.0 && k == 1.0) {
        return Some(1.0);
    }
    if k <= 0.0 || k > n || n < 0.0 {
        return Some(0.0);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Each identity and zero rule of both boundary policies.
    // - Flooring, NaN handling, and the unbounded case of `normalize`.
    //
    // They intentionally DO NOT cover:
    // - Interior values; those belong to the evaluator modules.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify the identity and zero rules of the exact policy.
    //
    // Given
    // -----
    // - (0,0), (1,1), (5,0), (3,4), (−1,−1), and the interior point (5,2).
    //
    // Expect
    // ------
    // - 1, 1, 0, 0, 0, and `None` respectively.
    fn exact_boundary_applies_rules_in_order() {
        assert_eq!(exact_boundary(0.0, 0.0), Some(1.0));
        assert_eq!(exact_boundary(1.0, 1.0), Some(1.0));
        assert_eq!(exact_boundary(5.0, 0.0), Some(0.0));
        assert_eq!(exact_boundary(3.0, 4.0), Some(0.0));
        assert_eq!(exact_boundary(-1.0, -1.0), Some(0.0));
        assert_eq!(exact_boundary(5.0, 2.0), None);
    }

    #[test]
    // Purpose
    // -------
    // Verify that the exact policy leaves n = k > 1 and k = 1 to the
    // recurrence, unlike the asymptotic policy.
    //
    // Given
    // -----
    // - (7,7) and (9,1).
    //
    // Expect
    // ------
    // - `None` from the exact policy, `Some(1.0)` from the asymptotic one.
    fn policies_differ_on_diagonal_and_first_column() {
        assert_eq!(exact_boundary(7.0, 7.0), None);
        assert_eq!(exact_boundary(9.0, 1.0), None);
        assert_eq!(asymptotic_boundary(7.0, 7.0), Some(1.0));
        assert_eq!(asymptotic_boundary(9.0, 1.0), Some(1.0));
    }

    #[test]
    // Purpose
    // -------
    // Verify the zero rules of the asymptotic policy and that identities win.
    //
    // Given
    // -----
    // - (0,0), (60,0), (60,61), (−2,−2), (−2,1), and the interior (60,20).
    //
    // Expect
    // ------
    // - 1, 0, 0, 0, 0, and `None`.
    fn asymptotic_boundary_applies_rules_in_order() {
        assert_eq!(asymptotic_boundary(0.0, 0.0), Some(1.0));
        assert_eq!(asymptotic_boundary(60.0, 0.0), Some(0.0));
        assert_eq!(asymptotic_boundary(60.0, 61.0), Some(0.0));
        assert_eq!(asymptotic_boundary(-2.0, -2.0), Some(0.0));
        assert_eq!(asymptotic_boundary(-2.0, 1.0), Some(0.0));
        assert_eq!(asymptotic_boundary(60.0, 20.0), None);
    }

    #[test]
    // Purpose
    // -------
    // Check flooring and the non-finite classifications of `normalize`.
    //
    // Given
    // -----
    // - (5.9, 2.2), (−0.5, 0.5), (NaN, 1), (1, NaN), (+∞, 3), (+∞, 1.5),
    //   (+∞, +∞).
    //
    // Expect
    // ------
    // - Floored requests, NaN classifications, `Unbounded` only for the
    //   finite k ≥ 2 case.
    fn normalize_floors_and_classifies() {
        assert_eq!(normalize(5.9, 2.2), Normalized::Request { n: 5.0, k: 2.0 });
        assert_eq!(normalize(-0.5, 0.5), Normalized::Request { n: -1.0, k: 0.0 });
        assert_eq!(normalize(f64::NAN, 1.0), Normalized::NotANumber);
        assert_eq!(normalize(1.0, f64::NAN), Normalized::NotANumber);
        assert_eq!(normalize(f64::INFINITY, 3.0), Normalized::Unbounded);
        assert_eq!(
            normalize(f64::INFINITY, 1.5),
            Normalized::Request { n: f64::INFINITY, k: 1.0 }
        );
        assert_eq!(
            normalize(f64::INFINITY, f64::INFINITY),
            Normalized::Request { n: f64::INFINITY, k: f64::INFINITY }
        );
    }
}
