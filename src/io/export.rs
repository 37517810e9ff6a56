//! JSON export of generated plans

use crate::io::error::{PlanError, Result};
use crate::pipeline::Plan;
use crate::projection::instructions::Instruction;
use crate::projection::summary::BlockSummary;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serializable record of one planned image
#[derive(Debug, Clone, Serialize)]
pub struct PlanReport<'a> {
    /// Source image name
    pub source: String,
    /// Meters per pixel
    pub scale: f64,
    /// Cell edge in pixels
    pub small_px: u32,
    /// Number of cell rows
    pub num_rows: usize,
    /// Number of cell columns
    pub num_cols: usize,
    /// Whether leftover cells needed the fallback tier
    pub fallback_used: bool,
    /// Block counts per type
    pub summary: &'a BlockSummary,
    /// Placement instructions in block order
    pub instructions: &'a [Instruction],
}

impl<'a> PlanReport<'a> {
    /// Borrow a plan for serialization
    pub fn new(source: impl Into<String>, plan: &'a Plan) -> Self {
        Self {
            source: source.into(),
            scale: plan.scale,
            small_px: plan.grid.small_px,
            num_rows: plan.grid.num_rows,
            num_cols: plan.grid.num_cols,
            fallback_used: plan.fallback_used,
            summary: &plan.summary,
            instructions: &plan.instructions,
        }
    }
}

/// Pretty-print a plan report as JSON
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be created or flushed and
/// `Serialization` if encoding fails
pub fn write_instructions_json(path: &Path, report: &PlanReport<'_>) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| PlanError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let file = File::create(path).map_err(|e| PlanError::FileSystem {
        path: path.to_path_buf(),
        operation: "create file",
        source: e,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report).map_err(|e| PlanError::Serialization {
        path: path.to_path_buf(),
        source: e,
    })?;
    writer.flush().map_err(|e| PlanError::FileSystem {
        path: path.to_path_buf(),
        operation: "write file",
        source: e,
    })
}
