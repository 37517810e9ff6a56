use bitvec::prelude::*;
use std::fmt;

/// Write-once record of which grid cells already belong to a block
///
/// Row-major bit grid scoped to a single merge run. Cells are only ever
/// claimed, never released.
#[derive(Clone, Debug)]
pub struct ClaimGrid {
    bits: BitVec,
    rows: usize,
    cols: usize,
}

impl ClaimGrid {
    /// Create a grid with no cells claimed
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            bits: bitvec![0; rows * cols],
            rows,
            cols,
        }
    }

    const fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    /// Test whether a cell is claimed
    ///
    /// Cells outside the grid count as unclaimed
    pub fn is_claimed(&self, row: usize, col: usize) -> bool {
        self.index(row, col)
            .is_some_and(|i| self.bits.get(i).as_deref() == Some(&true))
    }

    /// Test whether any cell of the `size`x`size` square at `(row, col)` is claimed
    pub fn any_claimed(&self, row: usize, col: usize, size: usize) -> bool {
        (row..row + size).any(|r| {
            self.index(r, col).is_some_and(|start| {
                let end = (start + size).min(start - col + self.cols);
                self.bits.get(start..end).is_some_and(|span| span.any())
            })
        })
    }

    /// Claim a single cell; out-of-grid cells are ignored
    pub fn claim(&mut self, row: usize, col: usize) {
        if let Some(i) = self.index(row, col) {
            self.bits.set(i, true);
        }
    }

    /// Claim every cell of the `size`x`size` square at `(row, col)`
    pub fn claim_square(&mut self, row: usize, col: usize, size: usize) {
        for r in row..row + size {
            if let Some(start) = self.index(r, col) {
                let end = (start + size).min(start - col + self.cols);
                if let Some(span) = self.bits.get_mut(start..end) {
                    span.fill(true);
                }
            }
        }
    }

    /// Count claimed cells
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }
}

impl fmt::Display for ClaimGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ClaimGrid({}x{}, {} claimed)",
            self.rows,
            self.cols,
            self.count()
        )
    }
}
