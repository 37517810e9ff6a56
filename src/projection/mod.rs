//! Conversion of blocks into world-space plans

/// Placement instruction projection
pub mod instructions;
/// Block counts per type
pub mod summary;

pub use instructions::{Instruction, project_instructions};
pub use summary::BlockSummary;
