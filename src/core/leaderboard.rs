//! Best score per player
//!
//! Each name keeps only its highest recorded score. Listing is by score
//! descending with ties broken by name ascending.

use rustc_hash::FxHashMap;
use std::cmp::Reverse;

/// One ranked leaderboard row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
}

/// Name to best-score table
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    best: FxHashMap<String, u32>,
}

impl Leaderboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `score` for `name`, keeping the higher of old and new
    ///
    /// Returns `true` if the stored best changed.
    ///
    /// # Examples
    /// ```
    /// use word_search::core::Leaderboard;
    ///
    /// let mut board = Leaderboard::new();
    /// board.insert("ada", 50);
    /// board.insert("ada", 30);
    /// assert_eq!(board.best_score("ada"), Some(50));
    /// ```
    pub fn insert(&mut self, name: &str, score: u32) -> bool {
        match self.best.get_mut(name) {
            Some(best) if *best >= score => false,
            Some(best) => {
                *best = score;
                true
            }
            None => {
                self.best.insert(name.to_string(), score);
                true
            }
        }
    }

    #[must_use]
    pub fn best_score(&self, name: &str) -> Option<u32> {
        self.best.get(name).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.best.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    /// All entries, highest score first
    #[must_use]
    pub fn descending(&self) -> Vec<LeaderboardEntry> {
        let mut entries: Vec<LeaderboardEntry> = self
            .best
            .iter()
            .map(|(name, &score)| LeaderboardEntry {
                name: name.clone(),
                score,
            })
            .collect();
        entries.sort_by(|a, b| (Reverse(a.score), &a.name).cmp(&(Reverse(b.score), &b.name)));
        entries
    }
}
