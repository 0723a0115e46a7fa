//! Tests for layout configuration validation and pass orchestration

#[cfg(test)]
mod tests {
    use wordgrid::model::FrequencyEntry;
    use wordgrid::{LayoutConfig, LayoutEngine};

    #[test]
    fn test_default_config_validates() {
        assert!(LayoutConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_dimensions_are_rejected() {
        let no_columns = LayoutConfig {
            grid_columns: 0,
            ..LayoutConfig::default()
        };
        assert!(no_columns.validate().is_err());

        let no_rows = LayoutConfig {
            grid_rows: 0,
            ..LayoutConfig::default()
        };
        assert!(no_rows.validate().is_err());
    }

    #[test]
    fn test_zero_cap_and_zero_attempts_are_rejected() {
        let no_words = LayoutConfig {
            max_words: 0,
            ..LayoutConfig::default()
        };
        assert!(no_words.validate().is_err());

        let no_attempts = LayoutConfig {
            max_attempts: 0,
            ..LayoutConfig::default()
        };
        assert!(no_attempts.validate().is_err());
    }

    #[test]
    fn test_cap_beyond_grid_capacity_is_rejected() {
        let config = LayoutConfig {
            grid_columns: 6,
            grid_rows: 6,
            max_words: 37,
            ..LayoutConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("grid capacity"));
    }

    #[test]
    fn test_normalization_uses_full_list_extremes() {
        // 70 entries: only 60 are placed, but the minimum of the full
        // list anchors the normalization range
        let entries: Vec<FrequencyEntry> = (0..70)
            .map(|i| FrequencyEntry::new(format!("w{i}"), 80 - i))
            .collect();

        let mut engine = LayoutEngine::with_seed(4).unwrap();
        let result = engine.layout(&entries);

        assert_eq!(result.displayed_count(), 60);
        assert_eq!(result.max_frequency, 80);
        assert_eq!(result.min_frequency, 11);

        // The last placed word sits above the full-list minimum, so its
        // size stays strictly above the floor
        let last = result.items.last().unwrap();
        assert!(last.font_size_px > 10.0);
    }

    #[test]
    fn test_single_entry_uses_degenerate_uniform_sizing() {
        let entries = vec![FrequencyEntry::new("only", 12)];
        let mut engine = LayoutEngine::with_seed(4).unwrap();
        let result = engine.layout(&entries);

        let only = result.items.first().unwrap();
        assert!((only.font_size_px - 50.0).abs() < f64::EPSILON);
        assert!(only.emphasized);
    }

    #[test]
    fn test_consecutive_passes_are_independent() {
        let entries = vec![
            FrequencyEntry::new("a", 30),
            FrequencyEntry::new("b", 20),
            FrequencyEntry::new("c", 10),
        ];
        let mut engine = LayoutEngine::with_seed(17).unwrap();

        let first = engine.layout(&entries);
        let second = engine.layout(&entries);

        // Deterministic attributes agree even though the random stream
        // advances between passes
        for (a, b) in first.items.iter().zip(second.items.iter()) {
            assert_eq!(a.word, b.word);
            assert_eq!(a.palette_index, b.palette_index);
            assert!((a.font_size_px - b.font_size_px).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_config_accessor_round_trips() {
        let config = LayoutConfig {
            seed: 9,
            ..LayoutConfig::default()
        };
        let engine = LayoutEngine::new(config).unwrap();
        assert_eq!(engine.config().seed, 9);
        assert_eq!(engine.config().grid_columns, 12);
    }
}
