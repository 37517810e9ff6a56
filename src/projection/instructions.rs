//! World-space placement instructions from grid-space blocks

use crate::blocks::block::Block;
use crate::blocks::kind::BlockKind;
use serde::{Deserialize, Serialize};

/// One block placement in meters
///
/// `x` and `z` are the block center on the image plane, `y` is the constant
/// elevation of the whole plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// Size class of the block to place
    pub block_type: BlockKind,
    /// Horizontal center
    pub x: f64,
    /// Elevation
    pub y: f64,
    /// Depth center (image rows)
    pub z: f64,
    /// Footprint width
    pub width: f64,
    /// Footprint height, or the tier thickness in 3D mode
    pub height: f64,
}

/// Round to two decimal places, halfway cases to even
///
/// Centers of odd-sized footprints land exactly on a third decimal of 5
/// (0.125, 0.625, ...), so the tie rule is visible in every plan.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Project a single block into world coordinates
pub fn project_block(block: &Block, small_px: u32, scale: f64, constant_y: f64, use_3d: bool) -> Instruction {
    let px = f64::from(small_px);
    let x0 = block.col as f64 * px;
    let y0 = block.row as f64 * px;
    let footprint = block.size as f64 * px;

    let extent = round2(footprint * scale);
    Instruction {
        block_type: block.kind,
        x: round2((x0 + footprint / 2.0) * scale),
        y: constant_y,
        z: round2((y0 + footprint / 2.0) * scale),
        width: extent,
        height: if use_3d {
            block.kind.nominal_thickness()
        } else {
            extent
        },
    }
}

/// Project blocks into placement instructions, keeping block order
pub fn project_instructions(
    blocks: &[Block],
    small_px: u32,
    scale: f64,
    constant_y: f64,
    use_3d: bool,
) -> Vec<Instruction> {
    blocks
        .iter()
        .map(|block| project_block(block, small_px, scale, constant_y, use_3d))
        .collect()
}
