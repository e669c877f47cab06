//! Rolling DP buffer for the exact Stirling recurrence.
//!
//! Purpose
//! -------
//! Own the single row (or diagonal) of the S(n, k) table that the exact
//! evaluator keeps in memory, and apply the two in-place sweeps that advance
//! it.
//!
//! Key behaviors
//! -------------
//! - [`WorkingBuffer::try_ones`] allocates through fallible reservation, so
//!   an impossible size comes back as an error instead of aborting.
//! - [`WorkingBuffer::sweep_rows`] advances along `n` with `k` fixed:
//!   `cell[j] = (j+1)·cell[j] + cell[j−1]`.
//! - [`WorkingBuffer::sweep_columns`] is the dual sweep along `k`:
//!   `cell[j] = (i+1)·cell[j−1] + cell[j]` at outer step `i`.
//! - Both sweeps stop at the first infinite cell and say where it happened.
//!
//! Invariants & assumptions
//! ------------------------
//! - The buffer starts as all ones: every row begins with S(r, 1) = 1 and
//!   every diagonal with S(r, r) = 1.
//! - Cell 0 is never written; it is the fixed boundary term.
//! - The buffer is owned by a single evaluation and never shared.
use std::collections::TryReserveError;

use ndarray::Array1;

/// Location of the first intermediate value that overflowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepOverflow {
    /// Outer step, starting at 1.
    pub step: usize,
    /// Buffer position written when the overflow happened.
    pub position: usize,
}

/// Owned rolling row of the S(n, k) table.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkingBuffer {
    cells: Array1<f64>,
}

impl WorkingBuffer {
    /// Allocate `len` cells set to 1.0.
    ///
    /// Errors
    /// ------
    /// - `TryReserveError` when the allocator refuses the request or `len`
    ///   cells exceed the address space.
    pub fn try_ones(len: usize) -> Result<Self, TryReserveError> {
        let mut cells = Vec::new();
        cells.try_reserve_exact(len)?;
        cells.resize(len, 1.0);
        Ok(WorkingBuffer { cells: Array1::from_vec(cells) })
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Final cell, which holds the result once all sweeps are done.
    pub fn last(&self) -> Option<f64> {
        self.cells.len().checked_sub(1).map(|idx| self.cells[idx])
    }

    /// Run `steps` row sweeps (`n` advancing, `k = len` fixed).
    pub fn sweep_rows(&mut self, steps: usize) -> Result<(), SweepOverflow> {
        let len = self.cells.len();
        for step in 1..=steps {
            for j in 1..len {
                let next = (j + 1) as f64 * self.cells[j] + self.cells[j - 1];
                self.cells[j] = next;
                if next.is_infinite() {
                    return Err(SweepOverflow { step, position: j });
                }
            }
        }
        Ok(())
    }

    /// Run `steps` dual sweeps; outer step `i` multiplies by `i + 1`.
    pub fn sweep_columns(&mut self, steps: usize) -> Result<(), SweepOverflow> {
        let len = self.cells.len();
        for step in 1..=steps {
            let factor = (step + 1) as f64;
            for j in 1..len {
                let next = factor * self.cells[j - 1] + self.cells[j];
                self.cells[j] = next;
                if next.is_infinite() {
                    return Err(SweepOverflow { step, position: j });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Allocation (including a refused, impossible size).
    // - One hand-checked step of each sweep.
    // - Overflow location reporting.
    //
    // They intentionally DO NOT cover:
    // - Mapping (n, k) to buffer length and step counts; that lives in
    //   `stirling::exact`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that a new buffer is all ones with the requested length.
    //
    // Given
    // -----
    // - len = 4.
    //
    // Expect
    // ------
    // - Four cells, last cell 1.0.
    fn try_ones_fills_with_ones() {
        let buffer = WorkingBuffer::try_ones(4).expect("small buffer should allocate");
        assert_eq!(buffer.len(), 4);
        assert!(!buffer.is_empty());
        assert_eq!(buffer.last(), Some(1.0));
    }

    #[test]
    // Purpose
    // -------
    // Ensure an impossible size is refused instead of aborting.
    //
    // Given
    // -----
    // - len = usize::MAX.
    //
    // Expect
    // ------
    // - `Err(TryReserveError)`.
    fn try_ones_refuses_impossible_size() {
        assert!(WorkingBuffer::try_ones(usize::MAX).is_err());
    }

    #[test]
    // Purpose
    // -------
    // Check row sweeps against the table column S(r, 3).
    //
    // Given
    // -----
    // - A 3-cell buffer (k = 3) advanced by 2 rows: S(5, 3).
    //
    // Expect
    // ------
    // - Last cell 25 = S(5, 3); cell 1 holds S(4, 2) = 7.
    fn sweep_rows_reproduces_table_values() {
        // Arrange
        let mut buffer = WorkingBuffer::try_ones(3).expect("allocate");

        // Act
        buffer.sweep_rows(2).expect("no overflow for tiny inputs");

        // Assert
        assert_eq!(buffer.cells[1], 7.0);
        assert_eq!(buffer.last(), Some(25.0));
    }

    #[test]
    // Purpose
    // -------
    // Check the dual sweep against S(5, 4) = 10.
    //
    // Given
    // -----
    // - n − k + 1 = 2 cells advanced by k − 1 = 3 steps.
    //
    // Expect
    // ------
    // - Last cell 10.
    fn sweep_columns_reproduces_table_values() {
        let mut buffer = WorkingBuffer::try_ones(2).expect("allocate");
        buffer.sweep_columns(3).expect("no overflow for tiny inputs");
        assert_eq!(buffer.last(), Some(10.0));
    }

    #[test]
    // Purpose
    // -------
    // Ensure overflow stops the sweep and reports its location.
    //
    // Given
    // -----
    // - 2-cell buffers seeded with f64::MAX in the cell each sweep doubles
    //   (cell 1 for rows, cell 0 for columns).
    //
    // Expect
    // ------
    // - `SweepOverflow { step: 1, position: 1 }` from both sweeps.
    fn sweeps_report_first_overflow() {
        let mut rows = WorkingBuffer::try_ones(2).expect("allocate");
        rows.cells[1] = f64::MAX;
        assert_eq!(rows.sweep_rows(5), Err(SweepOverflow { step: 1, position: 1 }));

        let mut columns = WorkingBuffer::try_ones(2).expect("allocate");
        columns.cells[0] = f64::MAX;
        assert_eq!(columns.sweep_columns(5), Err(SweepOverflow { step: 1, position: 1 }));
    }
}
