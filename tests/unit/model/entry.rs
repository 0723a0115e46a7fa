//! Tests for frequency entry ordering and range extraction

#[cfg(test)]
mod tests {
    use wordgrid::model::entry::{FrequencyEntry, frequency_extremes, sort_descending};

    #[test]
    fn test_sort_descending_orders_by_frequency() {
        let mut entries = vec![
            FrequencyEntry::new("low", 1),
            FrequencyEntry::new("high", 100),
            FrequencyEntry::new("mid", 50),
        ];
        sort_descending(&mut entries);

        let words: Vec<&str> = entries.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_sort_descending_is_stable_for_ties() {
        let mut entries = vec![
            FrequencyEntry::new("first", 5),
            FrequencyEntry::new("second", 5),
            FrequencyEntry::new("third", 5),
        ];
        sort_descending(&mut entries);

        let words: Vec<&str> = entries.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_frequency_extremes_read_full_list_bounds() {
        let entries = vec![
            FrequencyEntry::new("a", 90),
            FrequencyEntry::new("b", 40),
            FrequencyEntry::new("c", 3),
        ];
        assert_eq!(frequency_extremes(&entries), Some((3, 90)));
    }

    #[test]
    fn test_frequency_extremes_empty_list() {
        assert_eq!(frequency_extremes(&[]), None);
    }

    #[test]
    fn test_frequency_extremes_single_entry_is_degenerate() {
        let entries = vec![FrequencyEntry::new("only", 7)];
        assert_eq!(frequency_extremes(&entries), Some((7, 7)));
    }
}
