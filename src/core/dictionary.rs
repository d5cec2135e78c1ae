//! Set of words that count as real finds

use std::collections::BTreeSet;

/// Insert-only ordered set of valid words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: BTreeSet<String>,
}

impl Dictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `word`, returning `false` if it was already present
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        self.words.insert(word.into())
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_contains() {
        let mut dict = Dictionary::new();
        assert!(dict.insert("CODE"));
        assert!(dict.contains("CODE"));
        assert!(!dict.contains("CODES"));
        assert!(!dict.contains("code"));
    }

    #[test]
    fn duplicate_insert_is_noop() {
        let mut dict = Dictionary::new();
        assert!(dict.insert("JAVA"));
        assert!(!dict.insert("JAVA"));
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn collects_from_iterator() {
        let dict: Dictionary = ["STACK", "CODE", "QUEUE", "CODE"].into_iter().collect();
        assert_eq!(dict.len(), 3);
        assert!(dict.contains("QUEUE"));
    }

    #[test]
    fn empty_dictionary() {
        let dict = Dictionary::new();
        assert!(dict.is_empty());
        assert!(!dict.contains(""));
    }
}
