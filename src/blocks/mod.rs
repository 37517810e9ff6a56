//! Block tiers and the merge pipeline from grid cells to placed blocks

/// Placed block geometry
pub mod block;
/// Write-once claim state for a merge run
pub mod claims;
/// Size tiers and allowed-type sets
pub mod kind;
/// Greedy largest-first cell merging
pub mod merger;
/// Edge/interior tier preferences
pub mod preference;

pub use block::Block;
pub use kind::{AllowedTypes, BlockKind};
pub use merger::{MergeOutcome, generate_blocks};
pub use preference::apply_preferences;
