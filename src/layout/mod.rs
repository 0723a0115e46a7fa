/// Layout orchestration running the scale, placement, and style stages
pub mod engine;
/// Random grid slot assignment with bounded collision retry
pub mod placement;
/// Frequency normalization and font size scaling
pub mod scale;
/// Decorative attribute assignment: color, rotation, emphasis
pub mod style;
