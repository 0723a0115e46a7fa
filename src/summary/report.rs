//! Summary statistics and caption formatting for a completed layout
//!
//! Thin aggregation over the layout result: displayed versus total counts,
//! the headline word, and the frequency range, formatted as the one-line
//! caption shown beneath the rendered cloud.

use crate::io::configuration::TOP_WORDS_LISTED;
use crate::model::placed::LayoutResult;

/// Aggregate figures for one layout pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSummary {
    /// Number of words actually placed
    pub displayed_count: usize,
    /// Length of the full input list
    pub total_count: usize,
    /// Highest-frequency word with its count, if any
    pub top: Option<(String, u64)>,
    /// Frequency extremes (min, max) over the full input list
    pub frequency_range: (u64, u64),
}

impl LayoutSummary {
    /// Derive summary figures from a layout result
    pub fn from_result(result: &LayoutResult) -> Self {
        Self {
            displayed_count: result.displayed_count(),
            total_count: result.total_word_count,
            top: result
                .top_word()
                .map(|placed| (placed.word.clone(), placed.frequency)),
            frequency_range: result.frequency_range(),
        }
    }

    /// One-line caption for rendering beneath the cloud
    ///
    /// Empty passes produce a short "no data" caption instead of a
    /// zero-filled statistics line.
    pub fn caption(&self) -> String {
        let Some((word, frequency)) = &self.top else {
            return "No words to display".to_string();
        };

        let (min, max) = self.frequency_range;
        format!(
            "Showing top {} of {} words | Top word: \"{word}\" ({frequency}) | Frequency range: {min}-{max}",
            self.displayed_count, self.total_count,
        )
    }
}

/// Top-k placed words as (word, frequency) pairs for list display
///
/// Items are already ordered by descending frequency, so this is a prefix
/// take; `k` defaults to the configured listing length at call sites.
pub fn top_words(result: &LayoutResult, k: usize) -> Vec<(&str, u64)> {
    result
        .items
        .iter()
        .take(k)
        .map(|placed| (placed.word.as_str(), placed.frequency))
        .collect()
}

/// Top words using the default listing length
pub fn default_top_words(result: &LayoutResult) -> Vec<(&str, u64)> {
    top_words(result, TOP_WORDS_LISTED)
}
