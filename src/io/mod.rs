//! Input/output, configuration and error handling around the planning core

/// Command-line parsing and batch file processing
pub mod cli;
/// Constants and runtime configuration
pub mod configuration;
/// Error types
pub mod error;
/// JSON plan export
pub mod export;
/// Image loading and schematic rendering
pub mod image;
/// Logger setup
pub mod logging;
/// Progress bars for batch runs
pub mod progress;
