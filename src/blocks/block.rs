//! Placed block geometry in grid-cell coordinates

use crate::blocks::kind::BlockKind;

/// A square run of grid cells merged into one placed block
///
/// `size` is the geometry in cells per side. `kind` is the label that ends up
/// in the plan: it equals the tier whose scan produced the block, except for
/// fallback blocks (always `size == 1`) and blocks relabeled by preferences.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    /// Size class written to the plan
    pub kind: BlockKind,
    /// Top row of the footprint
    pub row: usize,
    /// Left column of the footprint
    pub col: usize,
    /// Cells per side
    pub size: usize,
    /// Mean RGB of the covered cells
    pub color: [f64; 3],
}

impl Block {
    /// One past the bottom row of the footprint
    pub const fn end_row(&self) -> usize {
        self.row + self.size
    }

    /// One past the right column of the footprint
    pub const fn end_col(&self) -> usize {
        self.col + self.size
    }

    /// All `(row, col)` cells of the footprint in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (self.row..self.end_row()).flat_map(move |row| (self.col..self.end_col()).map(move |col| (row, col)))
    }
}
