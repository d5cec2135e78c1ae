//! Target word validation
//!
//! Target words are stored uppercase. A word must be able to fit on a
//! single board line and be long enough to ever be accepted.

use super::board::{COLS, ROWS};
use std::fmt;

/// Shortest word a submission may spell
pub const MIN_LEN: usize = 3;

/// Longest word that fits on a single line of the board
pub const MAX_LEN: usize = if ROWS > COLS { ROWS } else { COLS };

/// Error type for invalid target words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
    TooShort(usize),
    TooLong(usize),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word is empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
            Self::TooShort(len) => {
                write!(f, "Word must have at least {MIN_LEN} letters, got {len}")
            }
            Self::TooLong(len) => {
                write!(f, "Word must have at most {MAX_LEN} letters, got {len}")
            }
        }
    }
}

impl std::error::Error for WordError {}

/// Validate a target word and return it uppercased
///
/// # Errors
/// Returns `WordError` if the trimmed text is empty, contains anything but
/// ASCII letters, or its length is outside `MIN_LEN..=MAX_LEN`.
///
/// # Examples
/// ```
/// use word_search::core::word::normalize;
///
/// assert_eq!(normalize(" queue ").unwrap(), "QUEUE");
/// assert!(normalize("no-way").is_err());
/// ```
pub fn normalize(text: &str) -> Result<String, WordError> {
    let text = text.trim();

    if text.is_empty() {
        return Err(WordError::Empty);
    }

    if !text.is_ascii() {
        return Err(WordError::NonAscii);
    }

    if !text.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(WordError::InvalidCharacters);
    }

    match text.len() {
        len if len < MIN_LEN => Err(WordError::TooShort(len)),
        len if len > MAX_LEN => Err(WordError::TooLong(len)),
        _ => Ok(text.to_ascii_uppercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_uppercases() {
        assert_eq!(normalize("java").unwrap(), "JAVA");
        assert_eq!(normalize("MeThOd").unwrap(), "METHOD");
    }

    #[test]
    fn normalize_trims() {
        assert_eq!(normalize("  code\t").unwrap(), "CODE");
    }

    #[test]
    fn normalize_rejects_empty() {
        assert_eq!(normalize(""), Err(WordError::Empty));
        assert_eq!(normalize("   "), Err(WordError::Empty));
    }

    #[test]
    fn normalize_rejects_bad_characters() {
        assert_eq!(normalize("café"), Err(WordError::NonAscii));
        assert_eq!(normalize("c0de"), Err(WordError::InvalidCharacters));
        assert_eq!(normalize("two words"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn normalize_checks_length() {
        assert_eq!(normalize("ab"), Err(WordError::TooShort(2)));
        assert_eq!(normalize("abcdefghijk"), Err(WordError::TooLong(11)));
        assert!(normalize("abcdefghij").is_ok());
    }
}
