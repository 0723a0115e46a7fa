//! Ranked word-frequency entries forming the layout input contract

/// A single word with its occurrence count
///
/// Input lists are expected to arrive sorted descending by frequency.
/// The engine re-sorts defensively, so an unsorted list degrades nothing
/// beyond the cost of the sort itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyEntry {
    /// The word to display
    pub word: String,
    /// Number of occurrences in the analyzed corpus
    pub frequency: u64,
}

impl FrequencyEntry {
    /// Create a new frequency entry
    pub fn new(word: impl Into<String>, frequency: u64) -> Self {
        Self {
            word: word.into(),
            frequency,
        }
    }
}

/// Stable sort entries by descending frequency
///
/// Stability preserves the caller's relative order for equal counts,
/// which keeps rank-derived styling deterministic for tied words.
pub fn sort_descending(entries: &mut [FrequencyEntry]) {
    entries.sort_by_key(|e| std::cmp::Reverse(e.frequency));
}

/// Frequency extremes (min, max) over a descending-sorted list
///
/// The normalization range spans the full dataset, not just the rendered
/// prefix, so these are read from the last and first entries.
pub fn frequency_extremes(entries: &[FrequencyEntry]) -> Option<(u64, u64)> {
    let max = entries.first().map(|e| e.frequency)?;
    let min = entries.last().map(|e| e.frequency)?;
    Some((min, max))
}
