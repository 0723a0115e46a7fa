//! Grid-based word cloud layout engine with collision-avoiding placement
//!
//! The system consumes a ranked word-frequency list, scales each word by its
//! relative frequency, assigns it a cell in a fixed placement grid using
//! bounded random retry, and styles it for rendering as HTML or a PNG preview.

#![forbid(unsafe_code)]

/// Input/output operations, rendering, and error handling
pub mod io;
/// Core layout pipeline: size scaling, slot assignment, and styling
pub mod layout;
/// Data model for frequency entries, grid slots, and layout results
pub mod model;
/// Aggregate captions and top-word reporting derived from a layout pass
pub mod summary;

pub use io::error::{LayoutError, Result};
pub use layout::engine::{LayoutConfig, LayoutEngine};
pub use model::{FrequencyEntry, GridSlot, LayoutResult, PlacedWord};
