//! Greedy block tiling of raster images into building plans
//!
//! An image is thresholded into a silhouette, sampled onto a grid of 0.25 m
//! cells, and the occupied cells are merged greedily into the largest uniform
//! blocks of the allowed size tiers (2.5 m, 50 cm, 25 cm). The blocks are then
//! projected into world-space placement instructions.

#![deny(unsafe_code)]

/// Block tiers, greedy merging and edge/interior preferences
pub mod blocks;
/// Input/output operations, configuration and error handling
pub mod io;
/// Single-image planning from sampling to instructions
pub mod pipeline;
/// World-space instructions and block summaries
pub mod projection;
/// Shape mask and cell grid sampling
pub mod shape;

pub use blocks::{AllowedTypes, Block, BlockKind, MergeOutcome, apply_preferences, generate_blocks};
pub use io::configuration::PlanConfig;
pub use io::error::{PlanError, Result};
pub use pipeline::{Plan, plan_image, plan_with_scale};
pub use projection::{BlockSummary, Instruction, project_instructions};
pub use shape::{Grid, compute_shape_mask, sample_grid};
