//! End-to-end planning of a single image
//!
//! Runs sampling, merging, the optional preference pass and projection in
//! sequence. Each stage produces a fresh value; nothing is shared between
//! calls.

use crate::blocks::block::Block;
use crate::blocks::merger::generate_blocks;
use crate::blocks::preference::apply_preferences;
use crate::io::configuration::PlanConfig;
use crate::io::error::Result;
use crate::io::image::render_schematic;
use crate::projection::instructions::{Instruction, project_instructions};
use crate::projection::summary::BlockSummary;
use crate::shape::sampler::{Grid, sample_grid_with_threshold, scale_from_height};
use image::RgbImage;
use log::debug;

/// Everything produced for one image
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    /// Meters per pixel used for the run
    pub scale: f64,
    /// Sampled cell grid
    pub grid: Grid,
    /// Blocks after merging and preferences, in emission order
    pub blocks: Vec<Block>,
    /// Whether leftover cells needed the fallback tier
    pub fallback_used: bool,
    /// Placement instructions, one per block
    pub instructions: Vec<Instruction>,
    /// Block counts per type
    pub summary: BlockSummary,
}

impl Plan {
    /// Render the outlined schematic of this plan at resampled resolution
    pub fn schematic(&self) -> RgbImage {
        render_schematic(
            (self.grid.new_width, self.grid.new_height),
            &self.blocks,
            self.grid.small_px,
        )
    }
}

/// Plan an image with an explicit scale in meters per pixel
///
/// # Errors
///
/// Returns an error if:
/// - The scale is not positive or the image is empty
/// - The configured threshold is negative or not finite
pub fn plan_with_scale(image: &RgbImage, scale: f64, config: &PlanConfig) -> Result<Plan> {
    config.validate()?;

    let grid = sample_grid_with_threshold(image, scale, config.shape_threshold)?;
    let outcome = generate_blocks(&grid, &config.allowed, config.threshold)?;

    let blocks = if config.has_preferences() {
        apply_preferences(
            &outcome.blocks,
            &grid.inside,
            config.edge_preference,
            config.interior_preference,
            &config.allowed,
        )
    } else {
        outcome.blocks
    };

    let instructions =
        project_instructions(&blocks, grid.small_px, scale, config.y_value, config.use_3d);
    let summary = BlockSummary::from_instructions(&instructions);
    debug!("plan: {summary}");

    Ok(Plan {
        scale,
        grid,
        blocks,
        fallback_used: outcome.fallback_used,
        instructions,
        summary,
    })
}

/// Plan an image whose height spans `config.z_value` meters
///
/// # Errors
///
/// Returns an error if:
/// - No image height is configured or it is not positive
/// - The image is empty
/// - The configured threshold is negative or not finite
pub fn plan_image(image: &RgbImage, config: &PlanConfig) -> Result<Plan> {
    let scale = scale_from_height(config.require_z_value()?, image.dimensions())?;
    plan_with_scale(image, scale, config)
}
