//! On-screen keyboard state
//!
//! Tracks the best feedback seen for every letter. Status only moves forward
//! (`Unknown < Absent < Present < Correct`).

use crate::core::{ALPHABET_LEN, Feedback, LetterStatus, Pattern, Word};

/// QWERTY rows as drawn by the shells
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Best-known status per letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardTracker {
    statuses: [LetterStatus; ALPHABET_LEN],
}

impl KeyboardTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Upgrade the status of `letter`; non-letters are ignored
    pub fn record(&mut self, letter: u8, feedback: Feedback) {
        if let Some(slot) = Self::index(letter).map(|i| &mut self.statuses[i]) {
            *slot = (*slot).max(LetterStatus::from(feedback));
        }
    }

    /// Record every letter of an evaluated guess
    pub fn record_pattern(&mut self, guess: &Word, pattern: &Pattern) {
        for (&letter, &feedback) in guess.chars().iter().zip(pattern.feedback()) {
            self.record(letter, feedback);
        }
    }

    /// Status of `letter` (either case); `Unknown` for non-letters
    #[must_use]
    pub fn status_of(&self, letter: u8) -> LetterStatus {
        Self::index(letter).map_or(LetterStatus::Unknown, |i| self.statuses[i])
    }

    /// Forget everything
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Letters with their status in QWERTY row order
    pub fn rows(&self) -> impl Iterator<Item = Vec<(char, LetterStatus)>> + '_ {
        KEYBOARD_ROWS.iter().map(move |row| {
            row.bytes()
                .map(|b| (char::from(b), self.status_of(b)))
                .collect()
        })
    }

    fn index(letter: u8) -> Option<usize> {
        let lower = letter.to_ascii_lowercase();
        if lower.is_ascii_lowercase() {
            Some(usize::from(lower - b'a'))
        } else {
            None
        }
    }
}
