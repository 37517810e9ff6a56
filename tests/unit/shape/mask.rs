//! Tests for grayscale thresholding into a shape mask

#[cfg(test)]
mod tests {
    use blockplan::PlanError;
    use blockplan::shape::mask::{compute_shape_mask, luma};
    use image::{Rgb, RgbImage};

    // Tests luma weights on primaries and extremes
    #[test]
    fn test_luma_weights() {
        assert_eq!(luma(Rgb([0, 0, 0])), 0);
        assert_eq!(luma(Rgb([255, 255, 255])), 255);
        assert_eq!(luma(Rgb([255, 0, 0])), 76);
        assert_eq!(luma(Rgb([0, 255, 0])), 150);
        assert_eq!(luma(Rgb([0, 0, 255])), 29);
        assert_eq!(luma(Rgb([128, 128, 128])), 128);
    }

    // Tests threshold comparison is strict
    #[test]
    fn test_threshold_is_strict() {
        let mut img = RgbImage::from_pixel(3, 1, Rgb([255, 255, 255]));
        img.put_pixel(0, 0, Rgb([249, 249, 249]));
        img.put_pixel(1, 0, Rgb([250, 250, 250]));

        let mask = compute_shape_mask(&img, 250).unwrap();
        assert_eq!(mask.get((0, 0)).copied(), Some(true));
        assert_eq!(mask.get((0, 1)).copied(), Some(false));
        assert_eq!(mask.get((0, 2)).copied(), Some(false));
    }

    // Tests mask is indexed by row then column
    #[test]
    fn test_mask_orientation() {
        let mut img = RgbImage::from_pixel(4, 2, Rgb([255, 255, 255]));
        img.put_pixel(3, 1, Rgb([0, 0, 0]));

        let mask = compute_shape_mask(&img, 250).unwrap();
        assert_eq!(mask.dim(), (2, 4));
        assert_eq!(mask.get((1, 3)).copied(), Some(true));
        assert_eq!(mask.iter().filter(|&&m| m).count(), 1);
    }

    // Tests zero-sized images are rejected
    #[test]
    fn test_empty_image() {
        let img = RgbImage::new(0, 5);
        assert!(matches!(
            compute_shape_mask(&img, 250),
            Err(PlanError::EmptyImage { width: 0, height: 5 })
        ));
    }
}
