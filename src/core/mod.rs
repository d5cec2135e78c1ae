//! Core domain types for the word search puzzle
//!
//! This module contains the fundamental domain types with no I/O.
//! Everything here is deterministic given its inputs (board generation takes
//! the RNG as a parameter), so it can be tested in isolation.

mod board;
mod coord;
mod dictionary;
mod found;
mod leaderboard;
pub mod path;
pub mod word;

pub use board::{Board, COLS, MAX_PLACEMENT_ATTEMPTS, Placement, ROWS};
pub use coord::{Coordinate, Direction};
pub use dictionary::Dictionary;
pub use found::FoundWords;
pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use word::WordError;
