pub mod entry;
pub mod placed;
