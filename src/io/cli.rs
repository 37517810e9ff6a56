//! Command-line interface for batch planning of image files

use crate::blocks::kind::{AllowedTypes, BlockKind};
use crate::io::configuration::{PLAN_SUFFIX, PlanConfig, SCHEMATIC_SUFFIX, SUPPORTED_EXTENSIONS, load_config};
use crate::io::error::{Result, target_error};
use crate::io::export::{PlanReport, write_instructions_json};
use crate::io::image::{export_schematic_png, load_rgb_image};
use crate::io::progress::{ProgressManager, Stage};
use crate::pipeline::plan_image;
use clap::Parser;
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "blockplan")]
#[command(
    author,
    version,
    about = "Turn an image into a block building plan with schematic preview"
)]
/// Command-line arguments for the planning tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input image file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Real-world height of the image in meters
    #[arg(short, long = "z", value_name = "METERS")]
    pub z_value: Option<f64>,

    /// Constant elevation of every block in meters
    #[arg(short, long = "y", value_name = "METERS")]
    pub y_value: Option<f64>,

    /// Comma-separated block types to use (25cm,50cm,2.5m); empty for none
    #[arg(short, long, value_name = "TYPES")]
    pub allowed: Option<AllowedTypes>,

    /// Maximum per-channel color deviation inside a merged block
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Block type for blocks on the silhouette edge
    #[arg(short, long, value_name = "TYPE")]
    pub edge: Option<BlockKind>,

    /// Block type for interior blocks
    #[arg(short, long, value_name = "TYPE")]
    pub interior: Option<BlockKind>,

    /// Report tier thickness as block height
    #[arg(long = "3d")]
    pub use_3d: bool,

    /// JSON configuration file; flags override its values
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Log merge statistics
    #[arg(short, long)]
    pub debug: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Merge the optional config file with command-line overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be loaded or the merged
    /// values are out of range
    pub fn plan_config(&self) -> Result<PlanConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => PlanConfig::default(),
        };

        if self.z_value.is_some() {
            config.z_value = self.z_value;
        }
        if let Some(y) = self.y_value {
            config.y_value = y;
        }
        if let Some(allowed) = &self.allowed {
            config.allowed = allowed.clone();
        }
        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        if self.edge.is_some() {
            config.edge_preference = self.edge;
        }
        if self.interior.is_some() {
            config.interior_preference = self.interior;
        }
        config.use_3d |= self.use_3d;

        config.validate()?;
        config.require_z_value()?;
        Ok(config)
    }
}

/// Orchestrates batch processing of image files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Create a processor that never draws progress bars
    pub const fn without_progress(cli: Cli) -> Self {
        Self {
            cli,
            progress_manager: None,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// Returns the number of files planned.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, target validation or file processing fails
    pub fn process(&mut self) -> Result<usize> {
        let config = self.cli.plan_config()?;
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(0);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index, &config)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(files.len())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if is_supported_image(target) {
                if self.should_process_file(target) {
                    Ok(vec![target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(target_error(
                    target,
                    "target file must be a png, jpg, jpeg, bmp or gif image",
                ))
            }
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target)? {
                let path = entry?.path();
                if is_supported_image(&path)
                    && !is_generated_output(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(target_error(target, "target must be an image file or directory"))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let outputs_exist = Self::get_schematic_path(input_path).exists()
            && Self::get_plan_path(input_path).exists();
        if outputs_exist {
            info!("Skipping: {} (output exists)", input_path.display());
        }
        !outputs_exist
    }

    fn process_file(&mut self, input_path: &Path, index: usize, config: &PlanConfig) -> Result<()> {
        let start_time = Instant::now();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let image = load_rgb_image(input_path)?;

        self.report_stage(index, Stage::Plan);
        let plan = plan_image(&image, config)?;
        if plan.blocks.is_empty() {
            warn!(
                "No blocks generated for {}; check the image and parameters",
                input_path.display()
            );
        }

        self.report_stage(index, Stage::Schematic);
        export_schematic_png(&plan.schematic(), &Self::get_schematic_path(input_path))?;

        self.report_stage(index, Stage::Export);
        let source = input_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        write_instructions_json(
            &Self::get_plan_path(input_path),
            &PlanReport::new(source, &plan),
        )?;

        info!(
            "{}: {} ({:.2?})",
            input_path.display(),
            plan.summary,
            start_time.elapsed()
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        Ok(())
    }

    fn report_stage(&mut self, index: usize, stage: Stage) {
        if let Some(ref mut pm) = self.progress_manager {
            pm.update_stage(index, stage);
        }
    }

    fn output_path(input_path: &Path, suffix: &str, extension: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{suffix}.{extension}", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }

    /// Location of the schematic preview written for an input image
    pub fn get_schematic_path(input_path: &Path) -> PathBuf {
        Self::output_path(input_path, SCHEMATIC_SUFFIX, "png")
    }

    /// Location of the plan JSON written for an input image
    pub fn get_plan_path(input_path: &Path) -> PathBuf {
        Self::output_path(input_path, PLAN_SUFFIX, "json")
    }
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        })
}

// Schematics land next to their sources; do not plan them on a re-run
fn is_generated_output(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(SCHEMATIC_SUFFIX))
}
