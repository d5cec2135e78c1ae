//! Interactive terminal interface
//!
//! The presentation layer: it owns cursor and selection state, renders the
//! engine's board, word list and score, and forwards selections to the
//! engine for validation.

mod app;
mod rendering;
mod selection;

pub use app::{App, InputMode, Message, MessageStyle, run_tui};
pub use selection::{SelectOutcome, Selection};
