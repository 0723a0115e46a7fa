//! Placed words and the aggregate result of a layout pass

use crate::model::grid::GridSlot;

/// A word with its assigned slot and display attributes
///
/// Immutable once produced; a new layout pass builds a fresh set rather
/// than updating placements incrementally.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    /// The word to display
    pub word: String,
    /// Occurrence count from the source list
    pub frequency: u64,
    /// Grid cell the word was placed into
    pub slot: GridSlot,
    /// Display font size in pixels, clamped to the configured bounds
    pub font_size_px: f64,
    /// Index into the fixed color palette, cycled by rank
    pub palette_index: usize,
    /// Rotation in degrees, drawn from a fixed upright-biased set
    pub rotation_deg: i16,
    /// Whether the word is rendered bold
    pub emphasized: bool,
}

/// Complete output of one layout pass
///
/// Owned by the caller and discarded when the next frequency list arrives;
/// the engine holds no state between passes beyond its random stream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutResult {
    /// Placed words ordered by descending frequency
    pub items: Vec<PlacedWord>,
    /// Length of the full input list, including words beyond the display cap
    pub total_word_count: usize,
    /// Highest frequency in the full input list
    pub max_frequency: u64,
    /// Lowest frequency in the full input list
    pub min_frequency: u64,
    /// Placements that shared a cell after the retry budget ran out
    pub collisions: usize,
}

impl LayoutResult {
    /// Number of words actually placed
    pub fn displayed_count(&self) -> usize {
        self.items.len()
    }

    /// Whether the pass produced no placements (empty input)
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Frequency extremes (min, max) over the full input list
    pub const fn frequency_range(&self) -> (u64, u64) {
        (self.min_frequency, self.max_frequency)
    }

    /// Highest-frequency placed word, if any
    pub fn top_word(&self) -> Option<&PlacedWord> {
        self.items.first()
    }
}
