//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::{Feedback, LetterStatus, MAX_TRIES, WORD_LEN};
use crate::game::GameState;
use crate::wordlists::WordSource;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Board height: one line per row with a blank line between, plus borders
const BOARD_HEIGHT: u16 = (MAX_TRIES * 2 + 1) as u16;

/// Main UI rendering function
pub fn ui<W: WordSource>(f: &mut Frame, app: &App<W>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Length(BOARD_HEIGHT), // Board
            Constraint::Length(7),            // Keyboard
            Constraint::Min(3),               // Messages
            Constraint::Length(2),            // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
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

/// Tile colors for evaluated letters
#[must_use]
pub fn feedback_style(feedback: Feedback) -> Style {
    match feedback {
        Feedback::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Feedback::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Feedback::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

/// Key colors for the keyboard panel
#[must_use]
pub fn status_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Unknown => Style::default().fg(Color::Cyan),
        LetterStatus::Absent => Style::default().fg(Color::DarkGray),
        LetterStatus::Present => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Correct => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    }
}

fn tile(letter: char, style: Style) -> Span<'static> {
    Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style)
}

fn render_board<W: WordSource>(f: &mut Frame, app: &App<W>, area: Rect) {
    let session = app.game.session();
    let mut lines: Vec<Line> = Vec::with_capacity(MAX_TRIES * 2);

    for record in session.records() {
        let tiles: Vec<Span> = record
            .guess()
            .chars()
            .iter()
            .zip(record.pattern().feedback())
            .flat_map(|(&letter, &feedback)| {
                [tile(char::from(letter), feedback_style(feedback)), Span::raw(" ")]
            })
            .collect();
        lines.push(Line::from(tiles));
        lines.push(Line::default());
    }

    let empty = Style::default().fg(Color::DarkGray);

    if session.state() == GameState::InProgress {
        let typed = if app.invalid_input {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        };

        let mut letters = app.input.chars();
        let tiles: Vec<Span> = (0..WORD_LEN)
            .flat_map(|_| {
                let cell = letters
                    .next()
                    .map_or_else(|| tile('_', empty), |c| tile(c, typed));
                [cell, Span::raw(" ")]
            })
            .collect();
        lines.push(Line::from(tiles));
        lines.push(Line::default());
    }

    while lines.len() < MAX_TRIES * 2 {
        let tiles: Vec<Span> = (0..WORD_LEN)
            .flat_map(|_| [tile('_', empty), Span::raw(" ")])
            .collect();
        lines.push(Line::from(tiles));
        lines.push(Line::default());
    }

    let title = match session.state() {
        GameState::InProgress => format!(
            " Guess {}/{MAX_TRIES} ",
            (session.guesses_made() + 1).min(MAX_TRIES)
        ),
        GameState::Won => " You won! ".to_string(),
        GameState::Lost => format!(
            " You lost! The word was {} ",
            session.target().text().to_uppercase()
        ),
    };

    let color = match session.state() {
        GameState::InProgress => Color::White,
        GameState::Won => Color::Green,
        GameState::Lost => Color::Red,
    };

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(color)),
    );

    f.render_widget(board, area);
}

fn render_keyboard<W: WordSource>(f: &mut Frame, app: &App<W>, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    for (i, row) in app.game.keyboard().rows().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        let keys: Vec<Span> = row
            .into_iter()
            .flat_map(|(letter, status)| {
                [
                    Span::styled(letter.to_ascii_uppercase().to_string(), status_style(status)),
                    Span::raw("  "),
                ]
            })
            .collect();
        lines.push(Line::from(keys));
    }

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));

    f.render_widget(keyboard, area);
}

fn render_messages<W: WordSource>(f: &mut Frame, app: &App<W>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<W: WordSource>(f: &mut Frame, app: &App<W>, area: Rect) {
    let stats = app.game.stats();
    let help_text = if app.game.session().state().is_over() {
        "Space: New Game | Esc: Quit"
    } else {
        "Enter: Submit | Esc: Quit"
    };

    let lines = vec![
        Line::from(format!(
            "Games: {} | Win: {:.0}% | Streak: {}",
            stats.games_played,
            stats.win_rate(),
            stats.current_streak
        )),
        Line::styled(help_text, Style::default().fg(Color::DarkGray)),
    ];

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;
    use crate::interactive::app::{MIN_HEIGHT, MIN_WIDTH};
    use crate::wordlists::WordBank;
    use crate::wordlists::loader::words_from_slice;
    use ratatui::{Terminal, backend::TestBackend};

    fn new_app() -> App {
        let bank = WordBank::new(
            words_from_slice(&["abbey"]),
            &words_from_slice(&["berry", "crane"]),
        )
        .unwrap();
        App::new(Game::new(bank))
    }

    fn draw(app: &App) -> (String, ratatui::buffer::Buffer) {
        let backend = TestBackend::new(MIN_WIDTH, MIN_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();

        let buffer = terminal.backend().buffer().clone();
        let content: String = buffer.content.iter().map(|c| c.symbol()).collect();
        (content, buffer)
    }

    #[test]
    fn renders_title_board_and_keyboard() {
        let (content, _) = draw(&new_app());
        assert!(content.contains("W O R D L E"));
        assert!(content.contains("Guess 1/6"));
        assert!(content.contains("Q  W  E  R  T  Y"));
        assert!(content.contains("Z  X  C  V  B  N  M"));
    }

    #[test]
    fn renders_typed_letters_and_guesses() {
        let mut app = new_app();
        app.game.submit("berry").unwrap();
        app.input = "cra".to_string();

        let (content, _) = draw(&app);
        assert!(content.contains(" B   E   R   R   Y "));
        assert!(content.contains(" C   R   A   _   _ "));
        assert!(content.contains("Guess 2/6"));
    }

    #[test]
    fn tiles_colored_by_feedback() {
        let mut app = new_app();
        app.game.submit("berry").unwrap();
        let (_, buffer) = draw(&app);

        let y_cell = buffer
            .content
            .iter()
            .find(|c| c.symbol() == "Y" && c.bg == Color::Green);
        assert!(y_cell.is_some(), "Y tile should be green");

        let r_cell = buffer
            .content
            .iter()
            .find(|c| c.symbol() == "R" && c.bg == Color::DarkGray);
        assert!(r_cell.is_some(), "R tile should be gray");
    }

    #[test]
    fn lost_game_reveals_word_in_title() {
        let mut app = new_app();
        for _ in 0..MAX_TRIES {
            app.game.submit("crane").unwrap();
        }
        let (content, _) = draw(&app);
        assert!(content.contains("You lost! The word was ABBEY"));
        assert!(content.contains("Space: New Game"));
    }

    #[test]
    fn status_style_ordering_visible() {
        assert_eq!(status_style(LetterStatus::Unknown).fg, Some(Color::Cyan));
        assert_eq!(status_style(LetterStatus::Correct).fg, Some(Color::Green));
    }
}
