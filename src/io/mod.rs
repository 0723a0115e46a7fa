//! Input/output operations, rendering, and error handling

/// Command-line interface and batch file processing
pub mod cli;
/// Layout constants and runtime configuration defaults
pub mod configuration;
/// Error types for layout and rendering operations
pub mod error;
/// Frequency list loading and validation
pub mod frequency;
/// Self-contained HTML rendering of layout results
pub mod html;
/// PNG schematic preview export
pub mod image;
/// Batch progress display
pub mod progress;
