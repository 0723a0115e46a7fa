//! Frequency list loading and validation
//!
//! Input files are plain text: one `word count` pair per line, separated
//! by whitespace, with `#` comments and blank lines ignored. Counts must
//! be non-negative integers; anything else fails fast before layout.

use crate::io::error::{LayoutError, Result, file_system_error};
use crate::model::entry::{self, FrequencyEntry};
use std::path::Path;

/// Load and parse a frequency list from a file
///
/// Entries are re-sorted descending (stable) regardless of file order.
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be read, `MalformedRecord` for
/// lines lacking a count, and `InvalidFrequency` for counts that are
/// negative or not integers.
pub fn load_frequency_list(path: &Path) -> Result<Vec<FrequencyEntry>> {
    let text = std::fs::read_to_string(path)
        .map_err(|source| file_system_error(path, "read", source))?;
    parse_frequency_list(&text, path)
}

/// Parse frequency list text, attributing errors to the given path
///
/// # Errors
///
/// Returns `MalformedRecord` or `InvalidFrequency` as for
/// [`load_frequency_list`]
pub fn parse_frequency_list(text: &str, path: &Path) -> Result<Vec<FrequencyEntry>> {
    let mut entries = Vec::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((word, count)) = line.rsplit_once(char::is_whitespace) else {
            return Err(LayoutError::MalformedRecord {
                path: path.to_path_buf(),
                line: index + 1,
                content: line.to_string(),
            });
        };

        let word = word.trim_end();
        if word.is_empty() {
            return Err(LayoutError::MalformedRecord {
                path: path.to_path_buf(),
                line: index + 1,
                content: line.to_string(),
            });
        }

        let Ok(frequency) = count.parse::<u64>() else {
            return Err(LayoutError::InvalidFrequency {
                path: path.to_path_buf(),
                line: index + 1,
                value: count.to_string(),
            });
        };

        entries.push(FrequencyEntry::new(word, frequency));
    }

    entry::sort_descending(&mut entries);
    Ok(entries)
}
