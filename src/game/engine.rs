//! Main game engine
//!
//! Owns all per-session state. A front end reads the board, found words and
//! score for display and feeds selections back through `submit`.

use super::outcome::SubmitResult;
use super::scoring::{apply_penalty, points_for};
use crate::core::path::is_linear;
use crate::core::word::MIN_LEN;
use crate::core::{
    Board, COLS, Coordinate, Dictionary, FoundWords, Leaderboard, LeaderboardEntry, ROWS,
};
use crate::wordlists::DEFAULT_WORDS;
use crate::wordlists::loader::words_from_slice;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHashSet;
use std::fmt;

/// Name used until the player sets one
pub const DEFAULT_PLAYER_NAME: &str = "Player";

/// A path that breaks the selection contract
///
/// These are caller bugs rather than player mistakes, so they are reported
/// without touching the score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    OutOfBounds(Coordinate),
    RepeatedCell(Coordinate),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(c) => write!(f, "Cell {c} is outside the board"),
            Self::RepeatedCell(c) => write!(f, "Cell {c} is selected more than once"),
        }
    }
}

impl std::error::Error for PathError {}

/// One successful find, kept so it can be undone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoEntry {
    pub word: String,
    pub path: Vec<Coordinate>,
}

/// Word search game state
pub struct GameEngine {
    target_words: Vec<String>,
    dictionary: Dictionary,
    board: Board,
    found: FoundWords,
    undo_stack: Vec<UndoEntry>,
    leaderboard: Leaderboard,
    score: u32,
    player_name: String,
    rng: StdRng,
}

impl GameEngine {
    /// Start a game on `words` with an OS-seeded RNG
    ///
    /// Words are trimmed and uppercased; invalid entries and duplicates are
    /// dropped.
    #[must_use]
    pub fn new<S: AsRef<str>>(words: &[S]) -> Self {
        Self::with_rng(words, StdRng::from_os_rng())
    }

    /// Start a reproducible game: the same seed always yields the same boards
    ///
    /// # Examples
    /// ```
    /// use word_search::game::GameEngine;
    ///
    /// let a = GameEngine::with_seed(&["CODE", "JAVA"], 3);
    /// let b = GameEngine::with_seed(&["CODE", "JAVA"], 3);
    /// assert_eq!(a.grid(), b.grid());
    /// ```
    #[must_use]
    pub fn with_seed<S: AsRef<str>>(words: &[S], seed: u64) -> Self {
        Self::with_rng(words, StdRng::seed_from_u64(seed))
    }

    /// Start a game drawing all randomness from `rng`
    #[must_use]
    pub fn with_rng<S: AsRef<str>>(words: &[S], mut rng: StdRng) -> Self {
        let target_words = words_from_slice(words);
        let board = Board::generate(&target_words, &mut rng);
        Self::assemble(target_words, board, rng)
    }

    /// Start a game on a prepared board
    ///
    /// No placement happens; the caller decides where words are.
    #[must_use]
    pub fn with_board<S: AsRef<str>>(words: &[S], board: Board) -> Self {
        Self::assemble(words_from_slice(words), board, StdRng::from_os_rng())
    }

    fn assemble(target_words: Vec<String>, board: Board, rng: StdRng) -> Self {
        let dictionary = target_words.iter().cloned().collect();
        Self {
            target_words,
            dictionary,
            board,
            found: FoundWords::new(),
            undo_stack: Vec::new(),
            leaderboard: Leaderboard::new(),
            score: 0,
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            rng,
        }
    }

    /// Regenerate the board for the same target list
    ///
    /// Found words, undo history and score are reset; the player name and
    /// leaderboard carry over.
    pub fn new_game(&mut self) {
        self.board = Board::generate(&self.target_words, &mut self.rng);
        self.found.clear();
        self.undo_stack.clear();
        self.score = 0;
    }

    /// Set the player name; blank input restores the default
    pub fn set_player_name(&mut self, name: &str) {
        let name = name.trim();
        self.player_name = if name.is_empty() {
            DEFAULT_PLAYER_NAME.to_string()
        } else {
            name.to_string()
        };
    }

    #[must_use]
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Snapshot of the letters on the board
    #[must_use]
    pub fn grid(&self) -> [[char; COLS]; ROWS] {
        self.board.grid()
    }

    #[must_use]
    pub fn target_words(&self) -> &[String] {
        &self.target_words
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub const fn found_words(&self) -> &FoundWords {
        &self.found
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    #[must_use]
    pub fn total_words(&self) -> usize {
        self.target_words.len()
    }

    /// True once every target word has been found
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.target_words.is_empty() && self.found.len() == self.target_words.len()
    }

    /// Finds that can still be undone, oldest first
    #[must_use]
    pub fn history(&self) -> &[UndoEntry] {
        &self.undo_stack
    }

    /// Every cell belonging to a currently found word
    #[must_use]
    pub fn found_cells(&self) -> FxHashSet<Coordinate> {
        self.undo_stack
            .iter()
            .flat_map(|entry| entry.path.iter().copied())
            .collect()
    }

    /// Validate and score a selection
    ///
    /// Rules are checked in order and the first failure wins: too short, not
    /// a target word, already found, not linear. A failure costs the flat
    /// penalty. Success records the word, pushes it on the undo stack and
    /// awards two points per letter. An empty path is `Cleared` and free.
    ///
    /// # Errors
    /// Returns `PathError` if a cell is off the board or appears twice.
    ///
    /// # Examples
    /// ```
    /// use word_search::core::{Board, Coordinate};
    /// use word_search::game::{GameEngine, SubmitResult};
    ///
    /// let mut rows = vec!["XXXXXXXXXX"; 10];
    /// rows[0] = "CATXXXXXXX";
    /// let board = Board::from_rows(&rows).unwrap();
    /// let mut game = GameEngine::with_board(&["CAT"], board);
    ///
    /// let path = [Coordinate::new(0, 0), Coordinate::new(0, 1), Coordinate::new(0, 2)];
    /// assert_eq!(game.submit(&path).unwrap(), SubmitResult::Accepted("CAT".into(), 6));
    /// assert_eq!(game.score(), 6);
    /// ```
    pub fn submit(&mut self, path: &[Coordinate]) -> Result<SubmitResult, PathError> {
        let word = self.spell(path)?;
        if word.is_empty() {
            return Ok(SubmitResult::Cleared);
        }

        if let Some(rejection) = self.check(word.clone(), path) {
            self.score = apply_penalty(self.score);
            return Ok(rejection);
        }

        let points = points_for(&word);
        self.found.add(word.clone());
        self.undo_stack.push(UndoEntry {
            word: word.clone(),
            path: path.to_vec(),
        });
        self.score += points;
        Ok(SubmitResult::Accepted(word, points))
    }

    fn spell(&self, path: &[Coordinate]) -> Result<String, PathError> {
        let mut seen = FxHashSet::default();
        path.iter()
            .map(|&coord| {
                if !seen.insert(coord) {
                    return Err(PathError::RepeatedCell(coord));
                }
                self.board.letter(coord).ok_or(PathError::OutOfBounds(coord))
            })
            .collect()
    }

    fn check(&self, word: String, path: &[Coordinate]) -> Option<SubmitResult> {
        if word.len() < MIN_LEN {
            Some(SubmitResult::RejectedTooShort(word))
        } else if !self.dictionary.contains(&word) {
            Some(SubmitResult::RejectedNotInDictionary(word))
        } else if self.found.contains(&word) {
            Some(SubmitResult::RejectedAlreadyFound(word))
        } else if !is_linear(path) {
            Some(SubmitResult::RejectedNotLinear(word))
        } else {
            None
        }
    }

    /// Take back the most recent find
    ///
    /// Returns the undone word, or `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<String> {
        let entry = self.undo_stack.pop()?;

        // Only reachable if the stack and found list have drifted apart
        if !self.found.remove(&entry.word) {
            return None;
        }

        self.score = self.score.saturating_sub(points_for(&entry.word));
        Some(entry.word)
    }

    /// Commit the current score as the player's leaderboard entry
    pub fn save_score(&mut self) {
        self.leaderboard.insert(&self.player_name, self.score);
    }

    #[must_use]
    pub const fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    /// Leaderboard rows, highest score first
    #[must_use]
    pub fn leaderboard_descending(&self) -> Vec<LeaderboardEntry> {
        self.leaderboard.descending()
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(DEFAULT_WORDS)
    }
}
