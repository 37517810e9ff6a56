//! Error types for block plan generation and file operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all planning operations
#[derive(Debug)]
pub enum PlanError {
    /// Meters-per-pixel scale is zero, negative or not finite
    InvalidScale {
        /// The rejected scale value
        value: f64,
    },

    /// Image has no pixels, or none remain after truncating to whole cells
    EmptyImage {
        /// Width in pixels
        width: u32,
        /// Height in pixels
        height: u32,
    },

    /// Block type name is not one of `25cm`, `50cm` or `2.5m`
    InvalidAllowedType {
        /// The unrecognized name
        value: String,
    },

    /// Algorithm parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save the schematic image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// JSON encoding or decoding failed
    Serialization {
        /// File being written or read
        path: PathBuf,
        /// Underlying serde error
        source: serde_json::Error,
    },

    /// Configuration file is present but unusable
    Config {
        /// Path to the configuration file
        path: PathBuf,
        /// What is wrong with it
        reason: String,
    },
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScale { value } => {
                write!(f, "Invalid scale {value}: must be a positive number of meters per pixel")
            }
            Self::EmptyImage { width, height } => {
                write!(f, "Image is empty ({width}x{height} pixels)")
            }
            Self::InvalidAllowedType { value } => {
                write!(
                    f,
                    "Unknown block type '{value}' (expected one of 25cm, 50cm, 2.5m)"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { path, source } => {
                write!(f, "JSON error for '{}': {source}", path.display())
            }
            Self::Config { path, reason } => {
                write!(f, "Invalid configuration '{}': {reason}", path.display())
            }
        }
    }
}

impl std::error::Error for PlanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for planning results
pub type Result<T> = std::result::Result<T, PlanError>;

impl From<std::io::Error> for PlanError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PlanError {
    PlanError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an error for a bad CLI target path
pub fn target_error(path: impl Into<PathBuf>, reason: &str) -> PlanError {
    PlanError::InvalidParameter {
        parameter: "target",
        value: path.into().display().to_string(),
        reason: reason.to_string(),
    }
}
