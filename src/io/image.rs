//! Image loading and the outlined schematic preview

use crate::blocks::block::Block;
use crate::io::error::{PlanError, Result};
use image::{Rgb, RgbImage};
use std::path::Path;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const OUTLINE: Rgb<u8> = Rgb([0, 0, 0]);

/// Load any supported image file as 8-bit RGB
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be opened or decoded
pub fn load_rgb_image(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).map_err(|e| PlanError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_rgb8())
}

fn put_clipped(img: &mut RgbImage, x: u64, y: u64) {
    if x < u64::from(img.width()) && y < u64::from(img.height()) {
        img.put_pixel(x as u32, y as u32, OUTLINE);
    }
}

/// Draw every block as a one-pixel black outline on a white canvas
///
/// Each outline spans `x0..=x0 + size * small_px` horizontally (and the same
/// vertically), so neighbouring blocks share their border line. Pixels past
/// the canvas are dropped.
pub fn render_schematic(canvas: (u32, u32), blocks: &[Block], small_px: u32) -> RgbImage {
    let (width, height) = canvas;
    let mut img = RgbImage::from_pixel(width, height, BACKGROUND);
    let px = u64::from(small_px);

    for block in blocks {
        let x0 = block.col as u64 * px;
        let y0 = block.row as u64 * px;
        let x1 = x0 + block.size as u64 * px;
        let y1 = y0 + block.size as u64 * px;

        for x in x0..=x1 {
            put_clipped(&mut img, x, y0);
            put_clipped(&mut img, x, y1);
        }
        for y in y0..=y1 {
            put_clipped(&mut img, x0, y);
            put_clipped(&mut img, x1, y);
        }
    }

    img
}

/// Save a schematic as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn export_schematic_png(image: &RgbImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| PlanError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| PlanError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
