//! diagnostics::errors — special-function error kinds and diagnostic records.
//!
//! Purpose
//! -------
//! Name the failure conditions a special-function kernel can detect and
//! package each occurrence as a small, cloneable record that sinks, policies,
//! and checked entry points can pass around.
//!
//! Key behaviors
//! -------------
//! - [`SfErrorKind`] enumerates the classic special-function error taxonomy
//!   (singularity, overflow, slow convergence, memory, ...).
//! - [`SfError`] records one occurrence: the reporting function, the kind,
//!   and an optional free-form detail string.
//! - Both types implement `Display`; [`SfError`] also implements
//!   [`std::error::Error`] so it can travel through `?`.
//!
//! Invariants & assumptions
//! ------------------------
//! - `source` is always a static function name such as `"stirling2"` or
//!   `"lambertw"`; it is never built from user input.
//! - A kernel emits at most one [`SfError`] per top-level evaluation.
//!
//! Testing notes
//! -------------
//! - Unit tests check the `Display` messages, the detail suffix, and that
//!   every kind round-trips through [`SfErrorKind::ALL`].

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, PyErr};

/// Failure classes reported by special-function kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SfErrorKind {
    /// The function has a pole or singularity at the argument.
    Singular,
    /// The result underflowed to zero.
    Underflow,
    /// The result (or an intermediate) overflowed to infinity.
    Overflow,
    /// An iterative method failed to converge within its budget.
    Slow,
    /// Precision was lost in the computation.
    Loss,
    /// No result could be obtained.
    NoResult,
    /// The argument lies outside the function's domain.
    Domain,
    /// An argument was invalid for reasons other than domain.
    Arg,
    /// Any other failure.
    Other,
    /// Scratch memory could not be allocated.
    Memory,
}

impl SfErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [SfErrorKind; 10] = [
        SfErrorKind::Singular,
        SfErrorKind::Underflow,
        SfErrorKind::Overflow,
        SfErrorKind::Slow,
        SfErrorKind::Loss,
        SfErrorKind::NoResult,
        SfErrorKind::Domain,
        SfErrorKind::Arg,
        SfErrorKind::Other,
        SfErrorKind::Memory,
    ];

    /// Position of the kind inside [`SfErrorKind::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short machine-friendly label, used as a structured log field.
    pub const fn label(self) -> &'static str {
        match self {
            SfErrorKind::Singular => "singular",
            SfErrorKind::Underflow => "underflow",
            SfErrorKind::Overflow => "overflow",
            SfErrorKind::Slow => "slow",
            SfErrorKind::Loss => "loss",
            SfErrorKind::NoResult => "no_result",
            SfErrorKind::Domain => "domain",
            SfErrorKind::Arg => "arg",
            SfErrorKind::Other => "other",
            SfErrorKind::Memory => "memory",
        }
    }
}

impl std::fmt::Display for SfErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            SfErrorKind::Singular => "singularity",
            SfErrorKind::Underflow => "underflow",
            SfErrorKind::Overflow => "overflow",
            SfErrorKind::Slow => "too many iterations",
            SfErrorKind::Loss => "loss of precision",
            SfErrorKind::NoResult => "no result obtained",
            SfErrorKind::Domain => "domain error",
            SfErrorKind::Arg => "invalid input argument",
            SfErrorKind::Other => "other error",
            SfErrorKind::Memory => "memory allocation failed",
        };
        f.write_str(msg)
    }
}

/// SfError — one diagnostic emitted by a special-function kernel.
///
/// Fields
/// ------
/// - `source`: `&'static str`
///   Name of the reporting function (e.g. `"stirling2"`).
/// - `kind`: [`SfErrorKind`]
///   Failure class.
/// - `detail`: `Option<String>`
///   Optional context such as the DP step that overflowed.
#[derive(Debug, Clone, PartialEq)]
pub struct SfError {
    pub source: &'static str,
    pub kind: SfErrorKind,
    pub detail: Option<String>,
}

impl SfError {
    pub fn new(source: &'static str, kind: SfErrorKind, detail: Option<&str>) -> Self {
        SfError { source, kind, detail: detail.map(str::to_owned) }
    }
}

impl std::error::Error for SfError {}

impl std::fmt::Display for SfError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "{}: {} ({detail})", self.source, self.kind),
            None => write!(f, "{}: {}", self.source, self.kind),
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<SfError> for PyErr {
    fn from(err: SfError) -> PyErr {
        PyValueError::new_err(format!("SpecialFunctionError: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `Display` output for `SfErrorKind` and `SfError`, with and without
    //   detail strings.
    // - Consistency between `SfErrorKind::ALL` and `SfErrorKind::index`.
    //
    // They intentionally DO NOT cover:
    // - The PyO3 conversion, which needs a Python interpreter.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that an `SfError` without detail renders as "source: kind".
    //
    // Given
    // -----
    // - An overflow reported by "stirling2" with no detail.
    //
    // Expect
    // ------
    // - The message is exactly "stirling2: overflow".
    fn sferror_without_detail_formats_source_and_kind() {
        // Arrange
        let err = SfError::new("stirling2", SfErrorKind::Overflow, None);

        // Act
        let msg = err.to_string();

        // Assert
        assert_eq!(msg, "stirling2: overflow");
    }

    #[test]
    // Purpose
    // -------
    // Ensure the detail string is appended to the message when present.
    //
    // Given
    // -----
    // - A memory failure with detail "buffer of 12 cells".
    //
    // Expect
    // ------
    // - The message contains both the kind text and the detail.
    fn sferror_with_detail_includes_detail_in_display() {
        // Arrange
        let err = SfError::new("stirling2", SfErrorKind::Memory, Some("buffer of 12 cells"));

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("memory allocation failed"), "Got: {msg}");
        assert!(msg.contains("buffer of 12 cells"), "Got: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Check that `ALL` lists each kind at the position given by `index`.
    //
    // Given
    // -----
    // - The `SfErrorKind::ALL` table.
    //
    // Expect
    // ------
    // - `ALL[kind.index()] == kind` for every kind, and labels are unique.
    fn sferrorkind_all_matches_index() {
        for (pos, kind) in SfErrorKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), pos);
            assert_eq!(SfErrorKind::ALL[kind.index()], *kind);
        }
        let mut labels: Vec<&str> = SfErrorKind::ALL.iter().map(|k| k.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), SfErrorKind::ALL.len());
    }
}
