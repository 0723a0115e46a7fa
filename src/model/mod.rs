//! Data model for word cloud layout
//!
//! This module contains the value types flowing through a layout pass:
//! - Ranked frequency entries (the input contract)
//! - Grid slots and per-pass occupancy state
//! - Placed words and the layout result they aggregate into

/// Frequency entries and ordering utilities
pub mod entry;
/// Grid slots and per-pass occupancy tracking
pub mod grid;
/// Placed words and the aggregate layout result
pub mod placed;

pub use entry::FrequencyEntry;
pub use grid::{GridSlot, SlotGrid};
pub use placed::{LayoutResult, PlacedWord};
