//! Greedy largest-first merging of grid cells into blocks
//!
//! Tiers are scanned from the largest allowed cell size down to the smallest.
//! Within a tier every top-left position is visited in row-major order and the
//! first window that is fully inside, unclaimed and uniform enough wins. A
//! final sweep turns every occupied cell nobody claimed into a one-cell block
//! of the smallest allowed tier.
//!
//! The scan order decides which tiling comes out, so it must stay sequential.

use crate::blocks::block::Block;
use crate::blocks::claims::ClaimGrid;
use crate::blocks::kind::{AllowedTypes, BlockKind};
use crate::io::error::{Result, invalid_parameter};
use crate::shape::sampler::Grid;
use log::debug;
use ndarray::s;

/// Blocks produced by one merge run
#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    /// Blocks in emission order
    pub blocks: Vec<Block>,
    /// Whether the final sweep had to cover leftover cells with the fallback tier
    pub fallback_used: bool,
}

impl MergeOutcome {
    const fn empty() -> Self {
        Self {
            blocks: Vec::new(),
            fallback_used: false,
        }
    }
}

/// Merge occupied cells into blocks of the allowed tiers
///
/// `threshold` bounds, per channel, how far any cell's color may sit from the
/// window mean for the window to become one block. An empty `allowed` set
/// yields no blocks.
///
/// # Errors
///
/// Returns `InvalidParameter` if `threshold` is negative or not finite
pub fn generate_blocks(grid: &Grid, allowed: &AllowedTypes, threshold: f64) -> Result<MergeOutcome> {
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(invalid_parameter(
            "threshold",
            &threshold,
            &"must be a finite, non-negative color distance",
        ));
    }

    let Some(fallback) = allowed.fallback() else {
        debug!("no block types allowed, skipping merge");
        return Ok(MergeOutcome::empty());
    };

    let mut claims = ClaimGrid::new(grid.num_rows, grid.num_cols);
    let mut blocks = Vec::new();

    for kind in allowed.descending() {
        let before = blocks.len();
        merge_tier(grid, kind, threshold, &mut claims, &mut blocks);
        debug!("{kind}: {} blocks", blocks.len() - before);
    }

    let before = blocks.len();
    for ((row, col), &inside) in grid.inside.indexed_iter() {
        if inside && !claims.is_claimed(row, col) {
            claims.claim(row, col);
            blocks.push(Block {
                kind: fallback,
                row,
                col,
                size: 1,
                color: grid.cell_color(row, col).unwrap_or_default(),
            });
        }
    }
    let fallback_used = blocks.len() > before;

    debug!(
        "total cells: {}, blocks generated: {}",
        grid.total_cells(),
        blocks.len()
    );

    Ok(MergeOutcome {
        blocks,
        fallback_used,
    })
}

fn merge_tier(
    grid: &Grid,
    kind: BlockKind,
    threshold: f64,
    claims: &mut ClaimGrid,
    blocks: &mut Vec<Block>,
) {
    let size = kind.cell_size();
    if size > grid.num_rows || size > grid.num_cols {
        return;
    }

    for row in 0..=grid.num_rows - size {
        for col in 0..=grid.num_cols - size {
            if !grid
                .inside
                .slice(s![row..row + size, col..col + size])
                .iter()
                .all(|&inside| inside)
            {
                continue;
            }
            if claims.any_claimed(row, col, size) {
                continue;
            }

            let colors = grid.color.slice(s![row..row + size, col..col + size]);
            let mean = mean_color(colors.iter());
            let deviation = colors
                .iter()
                .flat_map(|cell| cell.iter().zip(mean.iter()).map(|(c, m)| (c - m).abs()))
                .fold(0.0_f64, f64::max);

            if deviation <= threshold {
                claims.claim_square(row, col, size);
                blocks.push(Block {
                    kind,
                    row,
                    col,
                    size,
                    color: mean,
                });
            }
        }
    }
}

/// Per-channel arithmetic mean of a set of colors
pub fn mean_color<'a>(colors: impl Iterator<Item = &'a [f64; 3]>) -> [f64; 3] {
    let mut sum = [0.0; 3];
    let mut count = 0_usize;
    for color in colors {
        for (acc, channel) in sum.iter_mut().zip(color.iter()) {
            *acc += channel;
        }
        count += 1;
    }
    if count == 0 {
        return sum;
    }
    sum.map(|channel| channel / count as f64)
}
