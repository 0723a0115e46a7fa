//! Tests for frequency list parsing and validation

#[cfg(test)]
mod tests {
    use std::io::Write as _;
    use std::path::Path;
    use wordgrid::LayoutError;
    use wordgrid::io::frequency::{load_frequency_list, parse_frequency_list};

    fn parse(text: &str) -> wordgrid::Result<Vec<wordgrid::FrequencyEntry>> {
        parse_frequency_list(text, Path::new("test.txt"))
    }

    #[test]
    fn test_parses_word_count_pairs() {
        let entries = parse("hello\t42\nworld 7\n").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries.first().map(|e| e.word.as_str()), Some("hello"));
        assert_eq!(entries.first().map(|e| e.frequency), Some(42));
    }

    #[test]
    fn test_output_is_sorted_descending_regardless_of_file_order() {
        let entries = parse("low 1\nhigh 100\nmid 50\n").unwrap();
        let frequencies: Vec<u64> = entries.iter().map(|e| e.frequency).collect();
        assert_eq!(frequencies, vec![100, 50, 1]);
    }

    #[test]
    fn test_comments_and_blank_lines_are_skipped() {
        let entries = parse("# header\n\nword 3\n   \n# trailing\n").unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_negative_count_fails_fast() {
        let err = parse("word -5\n").unwrap_err();
        assert!(matches!(
            err,
            LayoutError::InvalidFrequency { line: 1, .. }
        ));
    }

    #[test]
    fn test_non_numeric_count_fails_fast() {
        let err = parse("word often\n").unwrap_err();
        assert!(matches!(err, LayoutError::InvalidFrequency { .. }));
    }

    #[test]
    fn test_error_reports_the_offending_line() {
        let err = parse("ok 1\nbroken x\n").unwrap_err();
        match err {
            LayoutError::InvalidFrequency { line, value, .. } => {
                assert_eq!(line, 2);
                assert_eq!(value, "x");
            }
            other => unreachable!("Expected InvalidFrequency, got {other}"),
        }
    }

    #[test]
    fn test_line_without_count_is_malformed() {
        let err = parse("loneword\n").unwrap_err();
        assert!(matches!(err, LayoutError::MalformedRecord { line: 1, .. }));
    }

    #[test]
    fn test_zero_count_is_valid() {
        let entries = parse("rare 0\n").unwrap();
        assert_eq!(entries.first().map(|e| e.frequency), Some(0));
    }

    #[test]
    fn test_load_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "alpha 10").unwrap();
        writeln!(file, "beta 20").unwrap();

        let entries = load_frequency_list(&path).unwrap();
        assert_eq!(entries.first().map(|e| e.word.as_str()), Some("beta"));
    }

    #[test]
    fn test_missing_file_is_a_file_system_error() {
        let err = load_frequency_list(Path::new("/nonexistent/words.txt")).unwrap_err();
        assert!(matches!(err, LayoutError::FileSystem { .. }));
    }
}
