//! Target word lists
//!
//! Provides the built-in puzzle list and loaders for custom lists.

pub mod loader;

/// Built-in target words
pub const DEFAULT_WORDS: &[&str] = &[
    "JAVA", "CODE", "PLAYER", "STACK", "QUEUE", "METHOD", "PUBLIC", "ERROR", "CONST", "FINAL",
    "FIELD",
];
