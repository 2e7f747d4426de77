//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterStatus, MAX_TRIES, Pattern, WORD_LEN, Word};
use crate::game::{GameState, KeyboardTracker, Session};
use colored::{ColoredString, Colorize};

/// One guessed letter as a colored tile
#[must_use]
pub fn feedback_tile(letter: u8, feedback: Feedback) -> ColoredString {
    let tile = format!(" {} ", char::from(letter.to_ascii_uppercase()));
    match feedback {
        Feedback::Correct => tile.black().on_green().bold(),
        Feedback::Present => tile.black().on_yellow().bold(),
        Feedback::Absent => tile.white().on_bright_black(),
    }
}

/// A guess rendered as five colored tiles
#[must_use]
pub fn colorize_guess(guess: &Word, pattern: &Pattern) -> String {
    guess
        .chars()
        .iter()
        .zip(pattern.feedback())
        .map(|(&letter, &feedback)| feedback_tile(letter, feedback).to_string())
        .collect()
}

/// A row not guessed yet, as wide as a guessed one
#[must_use]
pub fn empty_row() -> String {
    " _ ".repeat(WORD_LEN)
}

/// A keyboard letter colored by what is known about it
#[must_use]
pub fn key_label(letter: char, status: LetterStatus) -> ColoredString {
    let label = letter.to_ascii_uppercase().to_string();
    match status {
        LetterStatus::Unknown => label.cyan(),
        LetterStatus::Absent => label.bright_black(),
        LetterStatus::Present => label.yellow().bold(),
        LetterStatus::Correct => label.green().bold(),
    }
}

/// The keyboard as three staggered QWERTY rows
#[must_use]
pub fn colorize_keyboard(keyboard: &KeyboardTracker) -> String {
    keyboard
        .rows()
        .enumerate()
        .map(|(row, keys)| {
            let keys: Vec<String> = keys
                .into_iter()
                .map(|(letter, status)| key_label(letter, status).to_string())
                .collect();
            format!("{}{}", " ".repeat(row * 2), keys.join("  "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Spoiler-free result grid, e.g. `3/6` followed by emoji rows
#[must_use]
pub fn share_summary(session: &Session) -> String {
    let score = match session.state() {
        GameState::Won => session.guesses_made().to_string(),
        GameState::Lost | GameState::InProgress => "X".to_string(),
    };

    let mut lines = vec![format!("Wordle {score}/{MAX_TRIES}")];
    lines.extend(session.records().iter().map(|r| r.pattern().to_emoji()));
    lines.join("\n")
}
