//! Aggregate reporting derived from a layout pass

/// Summary statistics and caption formatting
pub mod report;

pub use report::LayoutSummary;
