//! Resampling of the source image onto the elementary cell grid
//!
//! One cell is `small_px` pixels per side and stands for 0.25 m of the real
//! object. The image is resized so that it holds a whole number of cells,
//! then each cell gets an occupancy flag and a mean color.

use crate::io::configuration::{CELL_EDGE_METERS, DEFAULT_SHAPE_THRESHOLD, OCCUPANCY_RATIO};
use crate::io::error::{PlanError, Result};
use crate::shape::mask::compute_shape_mask;
use image::RgbImage;
use image::imageops::{self, FilterType};
use log::debug;
use ndarray::{Array2, s};
use std::borrow::Cow;

/// Per-cell view of the resampled image
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Cells whose pixels are mostly inside the shape
    pub inside: Array2<bool>,
    /// Mean RGB of each cell, channels in 0..=255
    pub color: Array2<[f64; 3]>,
    /// Cell edge length in pixels
    pub small_px: u32,
    /// Width of the resampled image in pixels
    pub new_width: u32,
    /// Height of the resampled image in pixels
    pub new_height: u32,
    /// Number of cell rows
    pub num_rows: usize,
    /// Number of cell columns
    pub num_cols: usize,
}

impl Grid {
    /// Build a grid directly from per-cell data
    ///
    /// `color` must have the same shape as `inside`. Pixel dimensions are
    /// derived from `small_px`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the two arrays differ in shape or `small_px` is zero
    pub fn from_cells(
        inside: Array2<bool>,
        color: Array2<[f64; 3]>,
        small_px: u32,
    ) -> Result<Self> {
        if inside.dim() != color.dim() {
            return Err(crate::io::error::invalid_parameter(
                "color",
                &format!("{:?}", color.dim()),
                &format!("shape must match inside grid {:?}", inside.dim()),
            ));
        }
        if small_px == 0 {
            return Err(crate::io::error::invalid_parameter(
                "small_px",
                &small_px,
                &"cell size must be at least one pixel",
            ));
        }

        let (num_rows, num_cols) = inside.dim();
        Ok(Self {
            inside,
            color,
            small_px,
            new_width: num_cols as u32 * small_px,
            new_height: num_rows as u32 * small_px,
            num_rows,
            num_cols,
        })
    }

    /// Whether the cell is occupied; cells off the grid are not
    pub fn is_inside(&self, row: usize, col: usize) -> bool {
        self.inside.get((row, col)).copied().unwrap_or(false)
    }

    /// Mean color of a cell, if it exists
    pub fn cell_color(&self, row: usize, col: usize) -> Option<[f64; 3]> {
        self.color.get((row, col)).copied()
    }

    /// Number of occupied cells
    pub fn occupied_cells(&self) -> usize {
        self.inside.iter().filter(|&&cell| cell).count()
    }

    /// Total number of cells
    pub const fn total_cells(&self) -> usize {
        self.num_rows * self.num_cols
    }
}

/// Meters per pixel for an image whose height spans `z_value` meters
///
/// `dimensions` is the image's `(width, height)` in pixels.
///
/// # Errors
///
/// Returns `InvalidScale` if `z_value` is not a positive finite number and
/// `EmptyImage` if the image has no pixels
pub fn scale_from_height(z_value: f64, dimensions: (u32, u32)) -> Result<f64> {
    let (width, height_px) = dimensions;
    if width == 0 || height_px == 0 {
        return Err(PlanError::EmptyImage {
            width,
            height: height_px,
        });
    }
    if !z_value.is_finite() || z_value <= 0.0 {
        return Err(PlanError::InvalidScale { value: z_value });
    }
    Ok(z_value / f64::from(height_px))
}

/// Cell edge length in pixels for a scale, never below one pixel
///
/// `0.25 / scale` is rounded half-to-even.
///
/// # Errors
///
/// Returns `InvalidScale` if `scale` is not a positive finite number
pub fn cell_size_px(scale: f64) -> Result<u32> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(PlanError::InvalidScale { value: scale });
    }
    let rounded = (CELL_EDGE_METERS / scale).round_ties_even();
    Ok(if rounded < 1.0 { 1 } else { rounded as u32 })
}

/// Sample an image onto the cell grid with the default shape threshold
///
/// # Errors
///
/// Returns `InvalidScale` for a non-positive scale and `EmptyImage` if the
/// image is smaller than one cell in either direction
pub fn sample_grid(image: &RgbImage, scale: f64) -> Result<Grid> {
    sample_grid_with_threshold(image, scale, DEFAULT_SHAPE_THRESHOLD)
}

/// Sample an image onto the cell grid
///
/// Truncates the image to a whole number of cells, resizes it to exactly
/// that many pixels, and aggregates the shape mask and colors per cell.
///
/// # Errors
///
/// Returns `InvalidScale` for a non-positive scale and `EmptyImage` if the
/// image is smaller than one cell in either direction
pub fn sample_grid_with_threshold(
    image: &RgbImage,
    scale: f64,
    shape_threshold: u8,
) -> Result<Grid> {
    let small_px = cell_size_px(scale)?;
    let (width, height) = image.dimensions();

    let num_cols = width / small_px;
    let num_rows = height / small_px;
    if num_cols == 0 || num_rows == 0 {
        return Err(PlanError::EmptyImage { width, height });
    }

    let new_width = num_cols * small_px;
    let new_height = num_rows * small_px;
    let resized: Cow<'_, RgbImage> = if (new_width, new_height) == (width, height) {
        Cow::Borrowed(image)
    } else {
        Cow::Owned(imageops::resize(
            image,
            new_width,
            new_height,
            FilterType::CatmullRom,
        ))
    };

    debug!(
        "scale {scale:.4} m/px -> cell {small_px} px, grid {num_rows}x{num_cols} ({new_width}x{new_height} px)"
    );

    let mask = compute_shape_mask(&resized, shape_threshold)?;

    let px = small_px as usize;
    let (rows, cols) = (num_rows as usize, num_cols as usize);
    let cell_area = (px * px) as f64;

    let mut inside = Array2::from_elem((rows, cols), false);
    for ((row, col), cell) in inside.indexed_iter_mut() {
        let window = mask.slice(s![row * px..(row + 1) * px, col * px..(col + 1) * px]);
        let filled = window.iter().filter(|&&m| m).count();
        *cell = filled as f64 / cell_area > OCCUPANCY_RATIO;
    }

    let mut sums = Array2::from_elem((rows, cols), [0.0_f64; 3]);
    for (x, y, pixel) in resized.enumerate_pixels() {
        if let Some(sum) = sums.get_mut((y as usize / px, x as usize / px)) {
            for (acc, &channel) in sum.iter_mut().zip(pixel.0.iter()) {
                *acc += f64::from(channel);
            }
        }
    }
    let color = sums.mapv(|sum| sum.map(|channel| channel / cell_area));

    Ok(Grid {
        inside,
        color,
        small_px,
        new_width,
        new_height,
        num_rows: rows,
        num_cols: cols,
    })
}
