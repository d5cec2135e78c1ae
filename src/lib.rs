//! Word Search
//!
//! A word search puzzle game: a 10×10 letter grid hiding a list of target
//! words, with scoring, undo and a best-score leaderboard.
//!
//! # Quick Start
//!
//! ```rust
//! use word_search::game::GameEngine;
//! use word_search::wordlists::DEFAULT_WORDS;
//!
//! let mut game = GameEngine::with_seed(DEFAULT_WORDS, 42);
//! game.set_player_name("Ada");
//!
//! // Submit the cells of a word the board placed
//! let placement = game.board().placements()[0].clone();
//! let result = game.submit(&placement.cells()).unwrap();
//! println!("{result} (score: {})", game.score());
//! ```

// Core domain types
pub mod core;

// Game state engine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
