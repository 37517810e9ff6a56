//! Planning constants and runtime configuration

use crate::blocks::kind::{AllowedTypes, BlockKind};
use crate::io::error::{PlanError, Result, invalid_parameter};
use serde::Deserialize;
use std::path::Path;

// Geometry of the elementary cell
/// Real-world edge length of one grid cell in meters
pub const CELL_EDGE_METERS: f64 = 0.25;

/// Gray level below which a pixel belongs to the shape
pub const DEFAULT_SHAPE_THRESHOLD: u8 = 250;

// Strictly greater: a half-filled cell stays outside
/// Fraction of shape pixels a cell needs to count as occupied
pub const OCCUPANCY_RATIO: f64 = 0.5;

/// Maximum per-channel color deviation inside a merged block
pub const DEFAULT_UNIFORMITY_THRESHOLD: f64 = 30.0;

// Output settings
/// Suffix added to schematic preview filenames
pub const SCHEMATIC_SUFFIX: &str = "_schematic";
/// Suffix added to plan JSON filenames
pub const PLAN_SUFFIX: &str = "_plan";
/// Image extensions picked up when the target is a directory
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Number of steps reported per file
pub const PIPELINE_STAGES: usize = 4;

/// Parameters of one planning run
///
/// Every field has a default, so a config file only needs the values it
/// changes. `z_value` has no usable default and must come from the file or
/// the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanConfig {
    /// Real-world height of the image in meters
    pub z_value: Option<f64>,
    /// Constant elevation of every placed block in meters
    pub y_value: f64,
    /// Block tiers the merger may use
    pub allowed: AllowedTypes,
    /// Maximum per-channel color deviation inside a merged block
    pub threshold: f64,
    /// Gray level below which a pixel belongs to the shape
    pub shape_threshold: u8,
    /// Tier to relabel blocks on the silhouette edge with
    pub edge_preference: Option<BlockKind>,
    /// Tier to relabel interior blocks with
    pub interior_preference: Option<BlockKind>,
    /// Report tier thickness instead of footprint height
    pub use_3d: bool,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            z_value: None,
            y_value: 0.0,
            allowed: AllowedTypes::all(),
            threshold: DEFAULT_UNIFORMITY_THRESHOLD,
            shape_threshold: DEFAULT_SHAPE_THRESHOLD,
            edge_preference: None,
            interior_preference: None,
            use_3d: false,
        }
    }
}

impl PlanConfig {
    /// Configuration with the given image height in meters and defaults elsewhere
    pub fn with_z_value(z_value: f64) -> Self {
        Self {
            z_value: Some(z_value),
            ..Self::default()
        }
    }

    /// Whether an edge or interior preference is configured
    pub const fn has_preferences(&self) -> bool {
        self.edge_preference.is_some() || self.interior_preference.is_some()
    }

    /// The configured image height in meters
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if no height was configured
    pub fn require_z_value(&self) -> Result<f64> {
        self.z_value.ok_or_else(|| {
            invalid_parameter("z_value", &"<missing>", &"the real-world image height is required")
        })
    }

    /// Check value ranges that serde cannot express
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a negative or non-finite threshold or
    /// elevation, and `InvalidScale` for a non-positive image height
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(invalid_parameter(
                "threshold",
                &self.threshold,
                &"must be a finite, non-negative color distance",
            ));
        }
        if !self.y_value.is_finite() {
            return Err(invalid_parameter("y_value", &self.y_value, &"must be finite"));
        }
        if let Some(z) = self.z_value {
            if !z.is_finite() || z <= 0.0 {
                return Err(PlanError::InvalidScale { value: z });
            }
        }
        Ok(())
    }
}

// Tier names stay strings until `FromStr` so a bad name is reported as
// `InvalidAllowedType`, the same as on the command line
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    z_value: Option<f64>,
    y_value: Option<f64>,
    allowed: Option<Vec<String>>,
    threshold: Option<f64>,
    shape_threshold: Option<u8>,
    edge_preference: Option<String>,
    interior_preference: Option<String>,
    use_3d: Option<bool>,
}

impl ConfigFile {
    fn into_config(self) -> Result<PlanConfig> {
        let defaults = PlanConfig::default();
        Ok(PlanConfig {
            z_value: self.z_value,
            y_value: self.y_value.unwrap_or(defaults.y_value),
            allowed: match self.allowed {
                Some(names) => AllowedTypes::parse(names)?,
                None => defaults.allowed,
            },
            threshold: self.threshold.unwrap_or(defaults.threshold),
            shape_threshold: self.shape_threshold.unwrap_or(defaults.shape_threshold),
            edge_preference: self
                .edge_preference
                .as_deref()
                .map(str::parse::<BlockKind>)
                .transpose()?,
            interior_preference: self
                .interior_preference
                .as_deref()
                .map(str::parse::<BlockKind>)
                .transpose()?,
            use_3d: self.use_3d.unwrap_or(defaults.use_3d),
        })
    }
}

/// Load a planning configuration from a JSON file
///
/// Omitted keys keep their defaults.
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be read, `Serialization` if it is
/// not valid configuration JSON, `InvalidAllowedType` for an unknown tier
/// name, and `Config` if values are out of range
pub fn load_config(path: &Path) -> Result<PlanConfig> {
    let contents = std::fs::read_to_string(path).map_err(|e| PlanError::FileSystem {
        path: path.to_path_buf(),
        operation: "read config",
        source: e,
    })?;
    let file: ConfigFile =
        serde_json::from_str(&contents).map_err(|e| PlanError::Serialization {
            path: path.to_path_buf(),
            source: e,
        })?;
    let config = file.into_config()?;
    config.validate().map_err(|e| PlanError::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(config)
}
