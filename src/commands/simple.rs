//! Simple line-mode game
//!
//! Text-based play without the TUI. A selection is typed as `row,col`
//! pairs separated by spaces, for example `0,0 0,1 0,2`.

use crate::core::Coordinate;
use crate::core::path::is_contiguous;
use crate::game::GameEngine;
use crate::output::display::{print_board, print_leaderboard, print_submit_result};
use crate::output::formatters::{score_title, word_checklist};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// A parsed line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Submit(Vec<Coordinate>),
    Undo,
    Board,
    Leaderboard,
    NewGame,
    Help,
    Quit,
}

/// Parse one line of input
///
/// # Errors
///
/// Returns a message naming the first token that is neither a command nor a
/// `row,col` pair.
///
/// # Examples
/// ```
/// use word_search::commands::{Command, parse_command};
/// use word_search::core::Coordinate;
///
/// assert_eq!(parse_command("undo"), Ok(Command::Undo));
/// assert_eq!(
///     parse_command("0,0 0,1"),
///     Ok(Command::Submit(vec![Coordinate::new(0, 0), Coordinate::new(0, 1)]))
/// );
/// ```
pub fn parse_command(input: &str) -> Result<Command, String> {
    let input = input.trim();

    let command = match input.to_lowercase().as_str() {
        "undo" | "u" => Command::Undo,
        "board" | "b" => Command::Board,
        "leaderboard" | "l" => Command::Leaderboard,
        "new" | "n" => Command::NewGame,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => Command::Submit(
            input
                .split_whitespace()
                .map(parse_cell)
                .collect::<Result<_, _>>()?,
        ),
    };

    Ok(command)
}

fn parse_cell(token: &str) -> Result<Coordinate, String> {
    let invalid = || format!("Could not read cell '{token}' (expected row,col)");

    let (row, col) = token.split_once(',').ok_or_else(invalid)?;
    let row = row.trim().parse().map_err(|_| invalid())?;
    let col = col.trim().parse().map_err(|_| invalid())?;
    Ok(Coordinate::new(row, col))
}

/// Run the simple line-mode game
///
/// Prompts for a player name when `ask_name` is set.
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple(game: &mut GameEngine, ask_name: bool) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Word Search - Simple Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    if ask_name {
        match get_user_input("Enter your name")? {
            Some(name) => game.set_player_name(&name),
            None => return Ok(()),
        }
    }

    println!("Welcome, {}! Find the words.", game.player_name().bright_yellow());
    print_help();
    show_state(game);

    loop {
        let Some(line) = get_user_input("Cells or command")? else {
            return quit(game);
        };

        match parse_command(&line) {
            Ok(Command::Submit(path)) => {
                if !is_contiguous(&path) {
                    println!("{}", "Invalid move.".red());
                    continue;
                }

                match game.submit(&path) {
                    Ok(result) => {
                        print_submit_result(&result, game.score());
                        if result.is_accepted() {
                            show_state(game);
                        }
                    }
                    Err(e) => println!("{}", e.to_string().red()),
                }

                if game.is_complete() {
                    println!("\n{}", "CONGRATULATIONS! You found all words!".bright_green().bold());
                    return quit(game);
                }
            }
            Ok(Command::Undo) => {
                match game.undo() {
                    Some(word) => println!("Undo \"{word}\"."),
                    None => println!("Nothing to undo."),
                }
                show_state(game);
            }
            Ok(Command::Board) => show_state(game),
            Ok(Command::Leaderboard) => {
                game.save_score();
                print_leaderboard(&game.leaderboard_descending());
            }
            Ok(Command::NewGame) => {
                game.save_score();
                game.new_game();
                println!("\n🔄 New game started!");
                show_state(game);
            }
            Ok(Command::Help) => print_help(),
            Ok(Command::Quit) => return quit(game),
            Err(message) => println!("{}", message.red()),
        }
    }
}

fn show_state(game: &GameEngine) {
    print_board(game.board(), &game.found_cells());
    println!(
        "{}  ({}/{} found)",
        score_title(game.score()).bright_cyan(),
        game.found_count(),
        game.total_words()
    );
    for line in word_checklist(game) {
        println!("  {line}");
    }
    println!();
}

fn print_help() {
    println!("Select cells as row,col pairs: 0,0 0,1 0,2");
    println!("Commands: 'undo', 'board', 'leaderboard', 'new', 'help', 'quit'\n");
}

fn quit(game: &mut GameEngine) -> Result<()> {
    game.save_score();
    println!(
        "\n👋 Thanks for playing, {}! Final score: {}",
        game.player_name(),
        game.score()
    );
    print_leaderboard(&game.leaderboard_descending());
    Ok(())
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command("u"), Ok(Command::Undo));
        assert_eq!(parse_command(" QUIT "), Ok(Command::Quit));
        assert_eq!(parse_command("l"), Ok(Command::Leaderboard));
        assert_eq!(parse_command("new"), Ok(Command::NewGame));
        assert_eq!(parse_command("?"), Ok(Command::Help));
    }

    #[test]
    fn parses_paths() {
        assert_eq!(
            parse_command("0,0 0,1  0,2"),
            Ok(Command::Submit(vec![
                Coordinate::new(0, 0),
                Coordinate::new(0, 1),
                Coordinate::new(0, 2)
            ]))
        );
        assert_eq!(
            parse_command("9, 9"),
            Err("Could not read cell '9,' (expected row,col)".to_string())
        );
    }

    #[test]
    fn empty_line_is_empty_selection() {
        assert_eq!(parse_command(""), Ok(Command::Submit(Vec::new())));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_command("0;0").is_err());
        assert!(parse_command("a,b").is_err());
        assert!(parse_command("-1,2").is_err());
        assert!(parse_command("hello").is_err());
    }
}
