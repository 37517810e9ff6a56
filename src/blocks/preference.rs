//! Edge/interior relabeling of merged blocks
//!
//! Geometry never changes here: only `Block::kind` may be rewritten, so the
//! projected footprint stays the one the merger produced.

use crate::blocks::block::Block;
use crate::blocks::kind::{AllowedTypes, BlockKind};
use ndarray::Array2;

/// Where a block sits relative to the grid border and the silhouette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Touches the grid border or covers a cell outside the shape
    Edge,
    /// Entirely surrounded by grid and fully inside the shape
    Interior,
}

/// Classify a block against the occupancy grid
///
/// A block is on the edge when its footprint starts on the first row or
/// column, reaches the last row or column, or includes any cell that is not
/// inside the shape.
///
/// The far-column test deliberately compares against the column count, not
/// the row count, so interior blocks of wide grids stay interior.
pub fn classify(block: &Block, inside: &Array2<bool>) -> Placement {
    let (num_rows, num_cols) = inside.dim();

    let on_border = block.row == 0
        || block.col == 0
        || block.end_row() >= num_rows
        || block.end_col() >= num_cols;

    let straddles = block
        .cells()
        .any(|(row, col)| !inside.get((row, col)).copied().unwrap_or(false));

    if on_border || straddles {
        Placement::Edge
    } else {
        Placement::Interior
    }
}

/// Relabel blocks with the preferred tier for their placement
///
/// A preference is applied only if it is set and the tier is allowed;
/// otherwise the block keeps its type. Returns a new list in the same order.
pub fn apply_preferences(
    blocks: &[Block],
    inside: &Array2<bool>,
    edge_preference: Option<BlockKind>,
    interior_preference: Option<BlockKind>,
    allowed: &AllowedTypes,
) -> Vec<Block> {
    let edge = edge_preference.filter(|&kind| allowed.contains(kind));
    let interior = interior_preference.filter(|&kind| allowed.contains(kind));

    blocks
        .iter()
        .map(|block| {
            let preferred = match classify(block, inside) {
                Placement::Edge => edge,
                Placement::Interior => interior,
            };
            Block {
                kind: preferred.unwrap_or(block.kind),
                ..*block
            }
        })
        .collect()
}
