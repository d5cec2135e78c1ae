//! TUI application state and logic

use super::selection::{SelectOutcome, Selection};
use crate::core::{Coordinate, Direction};
use crate::game::GameEngine;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Status lines kept on screen
const MAX_MESSAGES: usize = 8;

/// Longest accepted player name
const MAX_NAME_LEN: usize = 20;

/// Application state
pub struct App {
    pub game: GameEngine,
    pub cursor: Coordinate,
    pub selection: Selection,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub name_buffer: String,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing the player name before the first move
    Name,
    Playing,
    /// Leaderboard popup over the board
    Leaderboard,
    /// Game over: farewell and leaderboard, waiting to exit or restart
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    /// Wrap `game`; with `ask_name` the player is prompted for a name first
    #[must_use]
    pub fn new(game: GameEngine, ask_name: bool) -> Self {
        let mut app = Self {
            game,
            cursor: Coordinate::new(0, 0),
            selection: Selection::new(),
            messages: Vec::new(),
            input_mode: InputMode::Playing,
            name_buffer: String::new(),
            should_quit: false,
        };

        if ask_name {
            app.input_mode = InputMode::Name;
            app.add_message("Enter your name and press Enter.", MessageStyle::Info);
        } else {
            app.welcome();
        }
        app
    }

    fn welcome(&mut self) {
        let text = format!("Welcome, {}! Find the words.", self.game.player_name());
        self.add_message(&text, MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Letters currently selected
    #[must_use]
    pub fn current_word(&self) -> String {
        self.selection.word(self.game.board())
    }

    /// Move the cursor one cell, stopping at the edges
    pub fn move_cursor(&mut self, direction: Direction) {
        if let Some(next) = self.cursor.step(direction) {
            self.cursor = next;
        }
    }

    pub fn select_at_cursor(&mut self) {
        if self.selection.toggle(self.cursor) == SelectOutcome::Restarted {
            self.add_message("Invalid move.", MessageStyle::Error);
        }
    }

    pub fn submit_selection(&mut self) {
        match self.game.submit(self.selection.cells()) {
            Ok(result) => {
                let style = if result.is_accepted() {
                    MessageStyle::Success
                } else if result.is_rejected() {
                    MessageStyle::Error
                } else {
                    MessageStyle::Info
                };
                self.add_message(&result.to_string(), style);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
        self.selection.clear();

        if self.game.is_complete() {
            self.add_message("CONGRATULATIONS! You found all words!", MessageStyle::Success);
            self.finish();
        }
    }

    pub fn undo_last(&mut self) {
        match self.game.undo() {
            Some(word) => self.add_message(&format!("Undo \"{word}\"."), MessageStyle::Info),
            None => self.add_message("Nothing to undo.", MessageStyle::Error),
        }
    }

    pub fn show_leaderboard(&mut self) {
        self.game.save_score();
        self.input_mode = InputMode::Leaderboard;
    }

    pub fn new_game(&mut self) {
        self.game.save_score();
        self.game.new_game();
        self.selection.clear();
        self.cursor = Coordinate::new(0, 0);
        self.input_mode = InputMode::Playing;
        self.add_message("New game started!", MessageStyle::Info);
    }

    /// Save the score and show the farewell screen
    pub fn finish(&mut self) {
        self.game.save_score();
        let text = format!(
            "Thanks for playing, {}! Final score: {}",
            self.game.player_name(),
            self.game.score()
        );
        self.add_message(&text, MessageStyle::Info);
        self.input_mode = InputMode::Finished;
    }

    /// React to a key press
    pub fn on_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Name => match code {
                KeyCode::Enter => {
                    let name = std::mem::take(&mut self.name_buffer);
                    self.game.set_player_name(&name);
                    self.input_mode = InputMode::Playing;
                    self.welcome();
                }
                KeyCode::Esc => {
                    self.name_buffer.clear();
                    self.input_mode = InputMode::Playing;
                    self.welcome();
                }
                KeyCode::Backspace => {
                    self.name_buffer.pop();
                }
                KeyCode::Char(c) if self.name_buffer.chars().count() < MAX_NAME_LEN => {
                    self.name_buffer.push(c);
                }
                _ => {}
            },
            InputMode::Leaderboard => {
                // Any key closes the popup
                self.input_mode = InputMode::Playing;
            }
            InputMode::Finished => match code {
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => self.should_quit = true,
                _ => {}
            },
            InputMode::Playing => match code {
                KeyCode::Up => self.move_cursor(Direction::North),
                KeyCode::Down => self.move_cursor(Direction::South),
                KeyCode::Left => self.move_cursor(Direction::West),
                KeyCode::Right => self.move_cursor(Direction::East),
                KeyCode::Char(' ') => self.select_at_cursor(),
                KeyCode::Backspace => {
                    self.selection.pop();
                }
                KeyCode::Esc => {
                    self.selection.clear();
                    self.add_message("Selection cleared.", MessageStyle::Info);
                }
                KeyCode::Enter => self.submit_selection(),
                KeyCode::Char('u') => self.undo_last(),
                KeyCode::Char('l') => self.show_leaderboard(),
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('q') => self.finish(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    with_restore(&mut terminal, |t| run_app(t, app), restore_terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run `body`, then `restore` however `body` ended
///
/// An error from `body` takes precedence over one from `restore`.
fn with_restore<S, T>(
    state: &mut S,
    body: impl FnOnce(&mut S) -> Result<T>,
    restore: impl FnOnce(&mut S) -> Result<()>,
) -> Result<T> {
    let res = body(state);
    let restored = restore(state);
    let value = res?;
    restored?;
    Ok(value)
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.on_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Board;

    fn press(app: &mut App, code: KeyCode) {
        app.on_key(code, KeyModifiers::NONE);
    }

    fn app() -> App {
        let mut rows = vec!["XXXXXXXXXX"; 10];
        rows[0] = "CATXXXXXXX";
        rows[1] = "XXXXXXXXXX";
        rows[2] = "DOGXXXXXXX";
        let board = Board::from_rows(&rows).unwrap();
        App::new(GameEngine::with_board(&["CAT", "DOG"], board), false)
    }

    fn select_row(app: &mut App, row: usize) {
        app.cursor = Coordinate::new(row, 0);
        for _ in 0..3 {
            press(app, KeyCode::Char(' '));
            press(app, KeyCode::Right);
        }
    }

    #[test]
    fn name_prompt_sets_player() {
        let board = Board::from_rows(&["XXXXXXXXXX"; 10]).unwrap();
        let mut app = App::new(GameEngine::with_board(&["CAT"], board), true);
        assert_eq!(app.input_mode, InputMode::Name);

        for c in "Ada".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Playing);
        assert_eq!(app.game.player_name(), "Ada");
    }

    #[test]
    fn cursor_stops_at_edges() {
        let mut app = app();
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.cursor, Coordinate::new(0, 0));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.cursor, Coordinate::new(1, 1));
    }

    #[test]
    fn select_and_submit_word() {
        let mut app = app();
        select_row(&mut app, 0);
        assert_eq!(app.current_word(), "CAT");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game.score(), 6);
        assert!(app.selection.is_empty());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Success);
    }

    #[test]
    fn non_adjacent_pick_restarts() {
        let mut app = app();
        press(&mut app, KeyCode::Char(' '));
        app.cursor = Coordinate::new(5, 5);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.selection.cells(), &[Coordinate::new(5, 5)]);
        assert_eq!(app.messages.last().unwrap().text, "Invalid move.");
    }

    #[test]
    fn undo_reports_word() {
        let mut app = app();
        select_row(&mut app, 0);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('u'));
        assert_eq!(app.messages.last().unwrap().text, "Undo \"CAT\".");
        press(&mut app, KeyCode::Char('u'));
        assert_eq!(app.messages.last().unwrap().text, "Nothing to undo.");
        assert_eq!(app.game.score(), 0);
    }

    #[test]
    fn finding_everything_finishes() {
        let mut app = app();
        select_row(&mut app, 0);
        press(&mut app, KeyCode::Enter);
        select_row(&mut app, 2);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Finished);
        assert_eq!(app.game.leaderboard().best_score("Player"), Some(12));

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn leaderboard_popup_saves_and_closes() {
        let mut app = app();
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.input_mode, InputMode::Leaderboard);
        assert_eq!(app.game.leaderboard().len(), 1);
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.input_mode, InputMode::Playing);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app();
        for _ in 0..20 {
            press(&mut app, KeyCode::Char('u'));
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
    }

    #[test]
    fn session_error_is_returned_after_restore() {
        let mut restored = false;
        let res: Result<()> = with_restore(
            &mut restored,
            |_| Err(anyhow::anyhow!("terminal lost")),
            |r| {
                *r = true;
                Ok(())
            },
        );
        assert!(restored);
        assert_eq!(res.unwrap_err().to_string(), "terminal lost");
    }

    #[test]
    fn restore_error_surfaces_after_clean_session() {
        let mut calls = 0;
        let res = with_restore(
            &mut calls,
            |c| {
                *c += 1;
                Ok(())
            },
            |c| {
                *c += 1;
                Err(anyhow::anyhow!("could not leave raw mode"))
            },
        );
        assert_eq!(calls, 2);
        assert!(res.is_err());
    }

    #[test]
    fn ctrl_c_quits_anywhere() {
        let mut app = app();
        app.on_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }
}
