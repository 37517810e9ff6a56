//! Image analysis: silhouette mask and cell grid sampling

/// Grayscale thresholding into a shape mask
pub mod mask;
/// Cell grid resampling with occupancy and mean color
pub mod sampler;

pub use mask::compute_shape_mask;
pub use sampler::{Grid, sample_grid};
