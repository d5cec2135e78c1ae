//! Formatting utilities for terminal output

use crate::core::LeaderboardEntry;
use crate::game::GameEngine;

/// Title line showing the current score
#[must_use]
pub fn score_title(score: u32) -> String {
    format!("Status | Score: {score}")
}

/// Ranked leaderboard text, one `"N. NAME : SCORE"` line per entry
#[must_use]
pub fn leaderboard_text(entries: &[LeaderboardEntry]) -> String {
    if entries.is_empty() {
        return "(no scores yet)".to_string();
    }

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| format!("{}. {} : {}\n", i + 1, entry.name, entry.score))
        .collect()
}

/// Target words with a check mark on the ones already found
#[must_use]
pub fn word_checklist(game: &GameEngine) -> Vec<String> {
    game.target_words()
        .iter()
        .map(|word| {
            let mark = if game.found_words().contains(word) {
                "✓ "
            } else {
                "  "
            };
            format!("{mark}{word}")
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Coordinate};

    #[test]
    fn score_title_format() {
        assert_eq!(score_title(0), "Status | Score: 0");
        assert_eq!(score_title(42), "Status | Score: 42");
    }

    #[test]
    fn leaderboard_text_empty() {
        assert_eq!(leaderboard_text(&[]), "(no scores yet)");
    }

    #[test]
    fn leaderboard_text_ranks() {
        let entries = vec![
            LeaderboardEntry {
                name: "Ada".into(),
                score: 30,
            },
            LeaderboardEntry {
                name: "Bob".into(),
                score: 12,
            },
        ];
        assert_eq!(leaderboard_text(&entries), "1. Ada : 30\n2. Bob : 12\n");
    }

    #[test]
    fn checklist_marks_found() {
        let mut rows = vec!["XXXXXXXXXX"; 10];
        rows[0] = "CATXXXXXXX";
        let board = Board::from_rows(&rows).unwrap();
        let mut game = GameEngine::with_board(&["CAT", "DOG"], board);
        game.submit(&[
            Coordinate::new(0, 0),
            Coordinate::new(0, 1),
            Coordinate::new(0, 2),
        ])
        .unwrap();

        assert_eq!(word_checklist(&game), vec!["✓ CAT", "  DOG"]);
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
