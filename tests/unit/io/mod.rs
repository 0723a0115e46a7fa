pub mod frequency;
pub mod progress;
