//! Binary silhouette extraction from an RGB image

use crate::io::error::{PlanError, Result};
use image::{Rgb, RgbImage};
use ndarray::Array2;

/// ITU-R 601 luma in 16.16 fixed point, rounded to the nearest integer
pub const fn luma(pixel: Rgb<u8>) -> u8 {
    let [r, g, b] = pixel.0;
    let weighted = 19_595 * r as u32 + 38_470 * g as u32 + 7_471 * b as u32 + 0x8000;
    (weighted >> 16) as u8
}

/// Mark every pixel darker than `threshold` as part of the shape
///
/// The result is indexed `[y, x]`. White and near-white background
/// (gray >= `threshold`) is outside.
///
/// # Errors
///
/// Returns `EmptyImage` if the image has zero width or height
pub fn compute_shape_mask(image: &RgbImage, threshold: u8) -> Result<Array2<bool>> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(PlanError::EmptyImage { width, height });
    }

    let mut mask = Array2::from_elem((height as usize, width as usize), false);
    for (x, y, pixel) in image.enumerate_pixels() {
        if let Some(cell) = mask.get_mut((y as usize, x as usize)) {
            *cell = luma(*pixel) < threshold;
        }
    }

    Ok(mask)
}
