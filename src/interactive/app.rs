//! TUI application state and logic

use crate::core::{MAX_TRIES, WORD_LEN};
use crate::game::{Game, GameState, GuessError, Submission};
use crate::wordlists::{WordBank, WordSource};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Smallest terminal the layout fits in
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 28;

/// Messages kept for the message panel
const MAX_MESSAGES: usize = 4;

/// Application state
pub struct App<W: WordSource = WordBank> {
    pub game: Game<W>,
    /// Letters typed for the current row
    pub input: String,
    /// The typed row is a full word that is not in the word list
    pub invalid_input: bool,
    pub messages: Vec<Message>,
    pub should_quit: bool,
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

impl<W: WordSource> App<W> {
    #[must_use]
    pub fn new(game: Game<W>) -> Self {
        Self {
            game,
            input: String::new(),
            invalid_input: false,
            messages: vec![Message {
                text: "Guess the hidden word!".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    /// React to one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            _ if self.game.session().state().is_over() => match key.code {
                KeyCode::Char(' ' | 'n') | KeyCode::Enter => self.new_game(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            KeyCode::Char(c)
                if c.is_ascii_alphabetic()
                    && !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.push_letter(c);
            }
            KeyCode::Backspace => self.pop_letter(),
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    fn push_letter(&mut self, c: char) {
        if self.input.len() >= WORD_LEN {
            return;
        }
        self.input.push(c.to_ascii_lowercase());
        self.invalid_input = self.input.len() == WORD_LEN && self.game.validate(&self.input).is_err();
    }

    fn pop_letter(&mut self) {
        self.input.pop();
        self.invalid_input = false;
    }

    /// Submit the typed row
    pub fn submit(&mut self) {
        if self.input.len() < WORD_LEN {
            self.add_message("Not enough letters", MessageStyle::Error);
            return;
        }

        match self.game.submit(&self.input) {
            Ok(Submission::Accepted { state, .. }) => {
                self.input.clear();
                self.invalid_input = false;
                self.announce(state);
            }
            Ok(Submission::Ignored) => {}
            Err(e @ GuessError::NotInWordList(_)) => {
                self.invalid_input = true;
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn announce(&mut self, state: GameState) {
        match state {
            GameState::Won => {
                let celebration = match self.game.session().guesses_made() {
                    1 => "Genius! You won!",
                    2 => "Magnificent! You won!",
                    3 => "Impressive! You won!",
                    4 => "Splendid! You won!",
                    5 => "Great! You won!",
                    _ => "Phew! You won!",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press space for a new game", MessageStyle::Info);
            }
            GameState::Lost => {
                let target = self.game.session().target().text().to_uppercase();
                self.add_message(
                    &format!("You lost! The correct word was {target}"),
                    MessageStyle::Error,
                );
                self.add_message("Press space for a new game", MessageStyle::Info);
            }
            GameState::InProgress => {
                let left = MAX_TRIES - self.game.session().guesses_made();
                if left == 1 {
                    self.add_message("Last try!", MessageStyle::Info);
                }
            }
        }
    }

    pub fn new_game(&mut self) {
        self.game.restart();
        self.input.clear();
        self.invalid_input = false;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
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
}

/// Whether the terminal can hold the layout
///
/// # Errors
///
/// Returns an error if the terminal size cannot be queried.
pub fn terminal_fits() -> Result<bool> {
    let (width, height) = terminal::size().context("failed to query terminal size")?;
    tracing::debug!(width, height, "terminal size");
    Ok(width >= MIN_WIDTH && height >= MIN_HEIGHT)
}

/// Run the TUI application
///
/// Unless `force` is set, refuses to start in a terminal smaller than
/// [`MIN_WIDTH`] x [`MIN_HEIGHT`].
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<W: WordSource>(app: App<W>, force: bool) -> Result<()> {
    if !force && !terminal_fits()? {
        println!("Your terminal is too small to play Wordle (need {MIN_WIDTH}x{MIN_HEIGHT}).");
        println!("Try making it bigger and run again!");
        println!("Or, run with the -f flag to force a play session.");
        return Ok(());
    }

    bracket(
        || enable_raw_mode().context("failed to enable raw mode"),
        || bracket(enter_alternate_screen, || draw_loop(app), leave_alternate_screen),
        || disable_raw_mode().context("failed to disable raw mode"),
    )
}

fn enter_alternate_screen() -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")
}

fn leave_alternate_screen() -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen).context("failed to leave alternate screen")
}

fn draw_loop<W: WordSource>(app: App<W>) -> Result<()> {
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let res = run_app(&mut terminal, app);
    terminal.show_cursor()?;
    res
}

/// Run `body` between `enter` and `leave`
///
/// `leave` runs whenever `enter` succeeded, also when `body` fails. An error
/// from `body` wins over one from `leave`.
fn bracket<T>(
    enter: impl FnOnce() -> Result<()>,
    body: impl FnOnce() -> Result<T>,
    leave: impl FnOnce() -> Result<()>,
) -> Result<T> {
    enter()?;
    let res = body();
    let left = leave();
    let value = res?;
    left?;
    Ok(value)
}

fn run_app<B: ratatui::backend::Backend, W: WordSource>(
    terminal: &mut Terminal<B>,
    mut app: App<W>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!(
        played = app.game.stats().games_played,
        won = app.game.stats().games_won,
        "quitting"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus;
    use crate::wordlists::loader::words_from_slice;

    fn new_app() -> App {
        let bank = WordBank::new(
            words_from_slice(&["abbey"]),
            &words_from_slice(&["berry", "crane", "slate"]),
        )
        .unwrap()
        .with_seed(3);
        App::new(Game::new(bank))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_fills_row_up_to_five_letters() {
        let mut app = new_app();
        type_word(&mut app, "Cranes");
        assert_eq!(app.input, "crane");
        assert!(!app.invalid_input);
    }

    #[test]
    fn non_letters_ignored() {
        let mut app = new_app();
        type_word(&mut app, "c1r-");
        assert_eq!(app.input, "cr");
    }

    #[test]
    fn enter_submits_full_legal_word() {
        let mut app = new_app();
        type_word(&mut app, "berry");
        press(&mut app, KeyCode::Enter);

        assert!(app.input.is_empty());
        assert_eq!(app.game.session().guesses_made(), 1);
    }

    #[test]
    fn short_row_not_submitted() {
        let mut app = new_app();
        type_word(&mut app, "ber");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input, "ber");
        assert_eq!(app.game.session().guesses_made(), 0);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn unknown_word_highlighted_until_edited() {
        let mut app = new_app();
        type_word(&mut app, "zzzzz");
        assert!(app.invalid_input);

        press(&mut app, KeyCode::Enter);
        assert!(app.invalid_input);
        assert_eq!(app.game.session().guesses_made(), 0);

        press(&mut app, KeyCode::Backspace);
        assert!(!app.invalid_input);
        assert_eq!(app.input, "zzzz");
    }

    #[test]
    fn win_then_space_restarts() {
        let mut app = new_app();
        type_word(&mut app, "abbey");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game.session().state(), GameState::Won);

        // Letters do nothing once the game is over
        type_word(&mut app, "crane");
        assert!(app.input.is_empty());

        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.game.session().state(), GameState::InProgress);
        assert_eq!(app.game.session().guesses_made(), 0);
        assert_eq!(app.game.stats().games_won, 1);
    }

    #[test]
    fn space_after_loss_restarts() {
        let mut app = new_app();
        for _ in 0..MAX_TRIES {
            type_word(&mut app, "crane");
            press(&mut app, KeyCode::Enter);
        }
        assert_eq!(app.game.session().state(), GameState::Lost);

        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.game.session().state(), GameState::InProgress);
        assert_eq!(app.game.session().guesses_made(), 0);
        assert_eq!(app.game.keyboard().status_of(b'c'), LetterStatus::Unknown);
        assert_eq!(app.game.stats().games_played, 1);
        assert_eq!(app.game.stats().games_won, 0);
        assert!(app.input.is_empty());
    }

    #[test]
    fn modified_letters_not_typed() {
        let mut app = new_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL));
        app.handle_key(KeyEvent::new(KeyCode::Char('b'), KeyModifiers::ALT));
        assert!(app.input.is_empty());
        assert!(!app.should_quit);

        app.handle_key(KeyEvent::new(KeyCode::Char('B'), KeyModifiers::SHIFT));
        assert_eq!(app.input, "b");
    }

    #[test]
    fn bracket_leaves_when_body_fails() {
        let left = std::cell::Cell::new(false);
        let res: Result<()> = bracket(
            || Ok(()),
            || Err(anyhow::anyhow!("draw failed")),
            || {
                left.set(true);
                Err(anyhow::anyhow!("restore failed"))
            },
        );
        assert!(left.get());
        assert_eq!(res.unwrap_err().to_string(), "draw failed");
    }

    #[test]
    fn bracket_skips_leave_when_enter_fails() {
        let ran = std::cell::Cell::new(0);
        let res: Result<()> = bracket(
            || Err(anyhow::anyhow!("no tty")),
            || {
                ran.set(ran.get() + 1);
                Ok(())
            },
            || {
                ran.set(ran.get() + 1);
                Ok(())
            },
        );
        assert!(res.is_err());
        assert_eq!(ran.get(), 0);
    }

    #[test]
    fn nested_bracket_restores_outer_on_inner_enter_failure() {
        let raw = std::cell::Cell::new(false);
        let res: Result<u8> = bracket(
            || {
                raw.set(true);
                Ok(())
            },
            || bracket(|| Err(anyhow::anyhow!("no alternate screen")), || Ok(1), || Ok(())),
            || {
                raw.set(false);
                Ok(())
            },
        );
        assert!(res.is_err());
        assert!(!raw.get());
    }

    #[test]
    fn loss_reveals_target() {
        let mut app = new_app();
        for _ in 0..MAX_TRIES {
            type_word(&mut app, "crane");
            press(&mut app, KeyCode::Enter);
        }
        assert_eq!(app.game.session().state(), GameState::Lost);
        assert!(app.messages.iter().any(|m| m.text.contains("ABBEY")));
    }

    #[test]
    fn ctrl_c_and_esc_quit() {
        let mut app = new_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert!(app.input.is_empty());

        let mut app = new_app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn message_list_bounded() {
        let mut app = new_app();
        for i in 0..10 {
            app.add_message(&i.to_string(), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages.last().unwrap().text, "9");
    }
}
