//! Tests for layout result accessors

#[cfg(test)]
mod tests {
    use wordgrid::model::grid::GridSlot;
    use wordgrid::model::placed::{LayoutResult, PlacedWord};

    fn placed(word: &str, frequency: u64) -> PlacedWord {
        PlacedWord {
            word: word.to_string(),
            frequency,
            slot: GridSlot::new(1, 1),
            font_size_px: 24.0,
            palette_index: 0,
            rotation_deg: 0,
            emphasized: false,
        }
    }

    #[test]
    fn test_default_result_is_empty() {
        let result = LayoutResult::default();
        assert!(result.is_empty());
        assert_eq!(result.displayed_count(), 0);
        assert_eq!(result.top_word(), None);
        assert_eq!(result.frequency_range(), (0, 0));
    }

    #[test]
    fn test_accessors_reflect_items_and_extremes() {
        let result = LayoutResult {
            items: vec![placed("alpha", 90), placed("beta", 10)],
            total_word_count: 150,
            max_frequency: 90,
            min_frequency: 2,
            collisions: 0,
        };

        assert!(!result.is_empty());
        assert_eq!(result.displayed_count(), 2);
        assert_eq!(result.frequency_range(), (2, 90));
        assert_eq!(result.top_word().map(|p| p.word.as_str()), Some("alpha"));
    }
}
