//! Exact S(n, k) by rolling-array dynamic programming.
//!
//! Purpose
//! -------
//! Evaluate S(n, k) = k·S(n−1, k) + S(n−1, k−1) in `f64` with memory
//! proportional to `min(k, n−k+1)` instead of the full `n × k` table.
//!
//! Key behaviors
//! -------------
//! - Inputs are floored; NaN returns NaN without a diagnostic.
//! - [`exact_boundary`] settles `(0,0)`, `(1,1)`, and the zero region.
//! - When `k ≤ n−k+1` the buffer holds `k` cells and is swept `n−k` times
//!   along `n`; otherwise it holds `n−k+1` cells and is swept `k−1` times
//!   along `k`. Both orders are kept so the buffer is always the smaller
//!   dimension.
//! - A one-cell buffer (`k = 1` or `k = n`) is already the answer.
//!
//! Failure handling
//! ----------------
//! - Allocation refused → one [`SfErrorKind::Memory`] report, NaN.
//! - Intermediate overflow → one [`SfErrorKind::Overflow`] report naming the
//!   step and position, `+∞` immediately.
//!
//! Notes
//! -----
//! - Results are exact as long as every intermediate fits in the 53-bit
//!   mantissa, and correctly rounded sums beyond that; for `n ≤ 50` the
//!   relative error stays at a few ulps.
use crate::{
    diagnostics::{DiagnosticSink, SfErrorKind},
    stirling::{
        validation::exact_boundary,
        workspace::{SweepOverflow, WorkingBuffer},
    },
};

const SOURCE: &str = "stirling2";

/// Exact S(n, k) for integer-valued `n`, `k`.
///
/// # Parameters
/// - `n`, `k`: counts; fractional parts are discarded.
/// - `sink`: receives at most one diagnostic.
///
/// # Returns
/// - S(n, k), `0` or `1` on the boundary, `+∞` on overflow, NaN on NaN
///   input or allocation failure.
///
/// # Examples
/// ```rust
/// # use rust_special::diagnostics::NullSink;
/// # use rust_special::stirling::exact;
/// assert_eq!(exact::evaluate(10.0, 3.0, &NullSink), 9330.0);
/// ```
pub fn evaluate(n: f64, k: f64, sink: &dyn DiagnosticSink) -> f64 {
    if n.is_nan() || k.is_nan() {
        return f64::NAN;
    }
    let (n, k) = (n.floor(), k.floor());
    if let Some(value) = exact_boundary(n, k) {
        return value;
    }

    // Float-to-int casts saturate, so an absurd size surfaces as a refused
    // reservation below.
    let span = n - k + 1.0;
    let row_major = k <= span;
    let len = (if row_major { k } else { span }) as usize;

    let mut buffer = match WorkingBuffer::try_ones(len) {
        Ok(buffer) => buffer,
        Err(err) => {
            let detail = format!("working buffer of {len} cells: {err}");
            sink.report(SOURCE, SfErrorKind::Memory, Some(&detail));
            return f64::NAN;
        }
    };
    if buffer.len() == 1 {
        return 1.0;
    }

    let swept = if row_major {
        buffer.sweep_rows((n - k) as usize)
    } else {
        buffer.sweep_columns((k - 1.0) as usize)
    };
    if let Err(SweepOverflow { step, position }) = swept {
        let detail = format!("intermediate overflow at step {step}, position {position}");
        sink.report(SOURCE, SfErrorKind::Overflow, Some(&detail));
        return f64::INFINITY;
    }

    buffer.last().unwrap_or(f64::NAN)
}
