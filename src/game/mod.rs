//! Game state engine
//!
//! Ties the board, dictionary, found list, undo stack, score and leaderboard
//! together behind the operations a front end calls.

mod engine;
mod outcome;
pub mod scoring;

pub use engine::{GameEngine, PathError, UndoEntry};
pub use outcome::SubmitResult;
