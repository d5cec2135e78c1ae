//! TUI rendering with ratatui
//!
//! Board, word list, status feed and popups.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{COLS, Coordinate};
use crate::output::formatters::{leaderboard_text, score_title, word_checklist};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Width of one rendered cell (" X ")
const CELL_WIDTH: u16 = 3;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(12),    // Main content
            Constraint::Length(3),  // Input area
            Constraint::Length(1),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(COLS as u16 * CELL_WIDTH + 2), // Board
            Constraint::Min(30),                              // Side panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);

    match app.input_mode {
        InputMode::Leaderboard => render_leaderboard_popup(f, app, " Leaderboard ", None),
        InputMode::Finished => {
            let farewell = format!(
                "Thanks for playing, {}! Final score: {}",
                app.game.player_name(),
                app.game.score()
            );
            render_leaderboard_popup(f, app, " Game Over ", Some(farewell));
        }
        InputMode::Name | InputMode::Playing => {}
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔍 WORD SEARCH")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let found = app.game.found_cells();
    let playing = app.input_mode == InputMode::Playing;

    let lines: Vec<Line> = app
        .game
        .grid()
        .iter()
        .enumerate()
        .map(|(r, row)| {
            let spans: Vec<Span> = row
                .iter()
                .enumerate()
                .map(|(c, letter)| {
                    let coord = Coordinate::new(r, c);
                    let mut style = if app.selection.contains(coord) {
                        Style::default().fg(Color::Black).bg(Color::Yellow)
                    } else if found.contains(&coord) {
                        Style::default().fg(Color::White).bg(Color::Green)
                    } else {
                        Style::default()
                    };
                    if playing && coord == app.cursor {
                        style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
                    }
                    Span::styled(format!(" {letter} "), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Status feed
            Constraint::Percentage(50), // Word list
        ])
        .split(area);

    render_messages(f, app, chunks[0]);
    render_word_list(f, app, chunks[1]);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let title = format!(" {} ", score_title(app.game.score()));
    let messages_list =
        List::new(messages).block(Block::default().title(title).borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_word_list(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = word_checklist(&app.game)
        .into_iter()
        .map(|line| {
            let style = if line.starts_with('✓') {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let title = format!(
        " Words to Find ({}/{}) ",
        app.game.found_count(),
        app.game.total_words()
    );
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Name => (
            " Enter your name | Enter to start ",
            app.name_buffer.clone(),
            Color::Cyan,
        ),
        _ => (
            " Selected | Enter to submit, Esc to clear ",
            app.current_word(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.input_mode {
        InputMode::Name => "Type a name | Esc: skip",
        InputMode::Leaderboard => "Any key: close",
        InputMode::Finished => "n: New Game | q: Quit",
        InputMode::Playing => {
            "Arrows: Move | Space: Select | Enter: Submit | u: Undo | l: Leaderboard | n: New | q: Quit"
        }
    };

    let status = Paragraph::new(format!("Player: {} | {help_text}", app.game.player_name()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}

fn render_leaderboard_popup(f: &mut Frame, app: &App, title: &str, header: Option<String>) {
    let area = centered_rect(50, 60, f.area());

    let mut lines: Vec<Line> = Vec::new();
    if let Some(header) = header {
        lines.push(Line::from(Span::styled(
            header,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
    }
    lines.extend(
        leaderboard_text(&app.game.leaderboard_descending())
            .lines()
            .map(|l| Line::from(l.to_string())),
    );

    let popup = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Cyan)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// A rectangle of the given percentage size centered in `area`
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
