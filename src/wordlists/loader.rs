//! Word list loading utilities
//!
//! Lists are cleaned on the way in: entries are trimmed and uppercased,
//! invalid entries are skipped and later duplicates are dropped.

use crate::core::word::normalize;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load target words from a file, one per line
///
/// Blank lines and invalid words are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_search::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines()))
}

/// Convert a string slice to a clean target list
///
/// # Examples
/// ```
/// use word_search::wordlists::loader::words_from_slice;
/// use word_search::wordlists::DEFAULT_WORDS;
///
/// let words = words_from_slice(DEFAULT_WORDS);
/// assert_eq!(words.len(), DEFAULT_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice<S: AsRef<str>>(slice: &[S]) -> Vec<String> {
    words_from_lines(slice.iter().map(AsRef::as_ref))
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = FxHashSet::default();
    lines
        .filter_map(|line| normalize(line).ok())
        .filter(|word| seen.insert(word.clone()))
        .collect()
}
