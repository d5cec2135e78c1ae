//! Display functions for command results

use super::formatters::{create_progress_bar, leaderboard_text, score_title};
use crate::commands::BenchmarkResult;
use crate::core::{Board, COLS, Coordinate, LeaderboardEntry};
use crate::game::SubmitResult;
use colored::Colorize;
use rustc_hash::FxHashSet;

/// Print the board with column and row indices, found cells highlighted
pub fn print_board(board: &Board, highlight: &FxHashSet<Coordinate>) {
    let header: Vec<String> = (0..COLS).map(|c| c.to_string()).collect();
    println!("\n    {}", header.join(" ").bright_black());

    for (r, row) in board.grid().iter().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(c, letter)| {
                let text = letter.to_string();
                if highlight.contains(&Coordinate::new(r, c)) {
                    text.bright_green().bold().to_string()
                } else {
                    text.white().to_string()
                }
            })
            .collect();
        println!("  {} {}", r.to_string().bright_black(), cells.join(" "));
    }
    println!();
}

/// Print where each word was placed and which were skipped
pub fn print_placements(board: &Board) {
    println!("{}", "Placements:".bright_cyan().bold());
    for placement in board.placements() {
        println!(
            "  {:<10} at {} heading {}",
            placement.word.bright_yellow(),
            placement.start,
            placement.direction
        );
    }
    for word in board.skipped() {
        println!("  {:<10} {}", word.red(), "(could not be placed)".bright_black());
    }
}

/// Print a submission outcome along with the new score
pub fn print_submit_result(result: &SubmitResult, score: u32) {
    let line = result.to_string();
    let line = if result.is_accepted() {
        line.green().bold()
    } else if result.is_rejected() {
        line.red()
    } else {
        line.normal()
    };
    println!("{line}  {}", score_title(score).bright_black());
}

/// Print the leaderboard, highest score first
pub fn print_leaderboard(entries: &[LeaderboardEntry]) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "LEADERBOARD".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());
    for line in leaderboard_text(entries).lines() {
        println!("  {line}");
    }
    println!();
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "PLACEMENT BENCHMARK".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let complete_pct = if result.total_boards > 0 {
        result.complete_boards as f64 / result.total_boards as f64 * 100.0
    } else {
        0.0
    };

    println!("\n📊 {}", "Placement:".bright_cyan().bold());
    println!("   Boards generated: {}", result.total_boards);
    println!("   Words per board:  {}", result.words_per_board);
    println!(
        "   Complete boards:  {} {}",
        result.complete_boards,
        format!("({complete_pct:.1}%)").green()
    );
    println!(
        "   Average placed:   {}",
        format!("{:.2}", result.average_placed).bright_yellow().bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Boards/second:    {:.1}", result.boards_per_second);

    if result.skip_counts.is_empty() {
        println!("\n✨ {}", "Every word placed on every board".green().bold());
        return;
    }

    println!("\n📉 {}", "Skipped words:".bright_cyan().bold());
    for (word, count) in &result.skip_counts {
        let pct = *count as f64 / result.total_boards as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 30);
        println!("   {word:<10} {} {count:5} ({pct:5.1}%)", bar.yellow());
    }
}
