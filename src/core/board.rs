//! The letter grid
//!
//! A board is generated once per game: every target word gets up to
//! `MAX_PLACEMENT_ATTEMPTS` random (start, direction) tries, then every cell
//! left empty is filled with a random letter. Placement is best-effort; a
//! word that never fits is recorded as skipped rather than failing.

use super::coord::{Coordinate, Direction};
use super::word::normalize;
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fmt;

/// Number of rows on the board
pub const ROWS: usize = 10;

/// Number of columns on the board
pub const COLS: usize = 10;

/// Random placement tries per word before it is skipped
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Where a target word was written during generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub word: String,
    pub start: Coordinate,
    pub direction: Direction,
}

impl Placement {
    /// Cells covered by the placed word, in reading order
    #[must_use]
    pub fn cells(&self) -> Vec<Coordinate> {
        self.start
            .ray(self.direction, self.word.len())
            .unwrap_or_default()
    }
}

/// A `ROWS × COLS` grid of uppercase ASCII letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[u8; COLS]; ROWS],
    placements: Vec<Placement>,
    skipped: Vec<String>,
}

type Draft = [[Option<u8>; COLS]; ROWS];

impl Board {
    /// Generate a board containing `words`
    ///
    /// Each word is normalized first (trimmed, uppercased). Words that are not
    /// valid targets are skipped along with those that never fit, so every
    /// cell of the result holds a letter `A`-`Z`.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use word_search::core::Board;
    ///
    /// let words = vec!["CODE".to_string(), "STACK".to_string()];
    /// let board = Board::generate(&words, &mut StdRng::seed_from_u64(7));
    ///
    /// for placement in board.placements() {
    ///     assert_eq!(board.spell(&placement.cells()).as_deref(), Some(placement.word.as_str()));
    /// }
    /// ```
    pub fn generate<R: Rng>(words: &[String], rng: &mut R) -> Self {
        let mut draft: Draft = [[None; COLS]; ROWS];
        let mut placements = Vec::with_capacity(words.len());
        let mut skipped = Vec::new();

        for raw in words {
            let Ok(word) = normalize(raw) else {
                skipped.push(raw.clone());
                continue;
            };
            let letters = word.as_bytes();

            let spot = (0..MAX_PLACEMENT_ATTEMPTS).find_map(|_| {
                let start =
                    Coordinate::new(rng.random_range(0..ROWS), rng.random_range(0..COLS));
                let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
                fits(&draft, letters, start, direction).map(|cells| (start, direction, cells))
            });

            match spot {
                Some((start, direction, cells)) => {
                    for (cell, &letter) in cells.iter().zip(letters) {
                        draft[cell.row][cell.col] = Some(letter);
                    }
                    placements.push(Placement {
                        word,
                        start,
                        direction,
                    });
                }
                None => skipped.push(word),
            }
        }

        let mut cells = [[b'A'; COLS]; ROWS];
        for (row, draft_row) in cells.iter_mut().zip(&draft) {
            for (cell, slot) in row.iter_mut().zip(draft_row) {
                *cell = slot.unwrap_or_else(|| b'A' + rng.random_range(0..26u8));
            }
        }

        Self {
            cells,
            placements,
            skipped,
        }
    }

    /// Build a board from fixed rows of letters
    ///
    /// Returns `None` unless there are exactly `ROWS` rows of `COLS` ASCII
    /// letters each. Lowercase input is uppercased. The board has no
    /// placement records.
    #[must_use]
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        if rows.len() != ROWS {
            return None;
        }

        let mut cells = [[b'A'; COLS]; ROWS];
        for (target, source) in cells.iter_mut().zip(rows) {
            let bytes = source.as_bytes();
            if bytes.len() != COLS || !bytes.iter().all(u8::is_ascii_alphabetic) {
                return None;
            }
            for (cell, &b) in target.iter_mut().zip(bytes) {
                *cell = b.to_ascii_uppercase();
            }
        }

        Some(Self {
            cells,
            placements: Vec::new(),
            skipped: Vec::new(),
        })
    }

    /// Letter at `coord`, or `None` outside the grid
    #[inline]
    #[must_use]
    pub fn letter(&self, coord: Coordinate) -> Option<char> {
        coord
            .in_bounds()
            .then(|| char::from(self.cells[coord.row][coord.col]))
    }

    /// Read-only snapshot of the whole grid
    #[must_use]
    pub fn grid(&self) -> [[char; COLS]; ROWS] {
        self.cells.map(|row| row.map(char::from))
    }

    /// Concatenate the letters along `path`
    ///
    /// Returns `None` if any coordinate is off the board.
    #[must_use]
    pub fn spell(&self, path: &[Coordinate]) -> Option<String> {
        path.iter().map(|&c| self.letter(c)).collect()
    }

    /// Words placed during generation, in placement order
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Words that never found a free line within the attempt limit
    #[must_use]
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    /// Every cell covered by a placed word
    ///
    /// Built from the placement records only, so copies of a word that the
    /// random fill spelled by chance are never included.
    #[must_use]
    pub fn placed_cells(&self) -> FxHashSet<Coordinate> {
        self.placements.iter().flat_map(Placement::cells).collect()
    }
}

/// Cells `letters` would occupy from `start`, if every one is in bounds and
/// either empty or already holding the same letter
fn fits(
    draft: &Draft,
    letters: &[u8],
    start: Coordinate,
    direction: Direction,
) -> Option<Vec<Coordinate>> {
    let cells = start.ray(direction, letters.len())?;
    cells
        .iter()
        .zip(letters)
        .all(|(c, &letter)| draft[c.row][c.col].is_none_or(|existing| existing == letter))
        .then_some(cells)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(|&b| char::from(b).to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
