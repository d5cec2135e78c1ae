//! Words the player has located so far

/// Insertion-ordered, duplicate-free list of found words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoundWords {
    words: Vec<String>,
}

impl FoundWords {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `word`, returning `false` if it was already found
    pub fn add(&mut self, word: impl Into<String>) -> bool {
        let word = word.into();
        if self.contains(&word) {
            return false;
        }
        self.words.push(word);
        true
    }

    /// Forget `word`, returning `false` if it was never found
    pub fn remove(&mut self, word: &str) -> bool {
        match self.words.iter().position(|w| w == word) {
            Some(index) => {
                self.words.remove(index);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn clear(&mut self) {
        self.words.clear();
    }

    /// Found words, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
