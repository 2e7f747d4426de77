//! One game: target, evaluated guesses, and the win/loss state

use crate::core::{MAX_TRIES, Pattern, Word, WordError};
use std::fmt;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameState {
    /// `Won` or `Lost`
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// An accepted guess with its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    guess: Word,
    pattern: Pattern,
}

impl GuessRecord {
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }
}

/// Why a guess was rejected
///
/// Rejected guesses never change the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    InvalidLength(usize),
    InvalidCharacters,
    NotInWordList(String),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => write!(
                f,
                "Guess must be exactly {} letters, got {len}",
                crate::core::WORD_LEN
            ),
            Self::InvalidCharacters => write!(f, "Guess must contain only letters"),
            Self::NotInWordList(word) => write!(f, "'{word}' is not in the word list"),
        }
    }
}

impl std::error::Error for GuessError {}

impl From<WordError> for GuessError {
    fn from(err: WordError) -> Self {
        match err {
            WordError::InvalidLength(len) => Self::InvalidLength(len),
            WordError::NonAscii | WordError::InvalidCharacters => Self::InvalidCharacters,
        }
    }
}

/// A single game against one target
#[derive(Debug, Clone)]
pub struct Session {
    target: Word,
    records: Vec<GuessRecord>,
    state: GameState,
}

impl Session {
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self {
            target,
            records: Vec::with_capacity(MAX_TRIES),
            state: GameState::InProgress,
        }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Accepted guesses, oldest first
    #[must_use]
    pub fn records(&self) -> &[GuessRecord] {
        &self.records
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn guesses_made(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn guesses_left(&self) -> usize {
        MAX_TRIES - self.records.len()
    }

    /// Evaluate an already validated guess and advance the state machine
    ///
    /// Returns `None` without touching anything once the game is over.
    pub(crate) fn apply(&mut self, guess: Word) -> Option<&GuessRecord> {
        if self.state.is_over() {
            return None;
        }

        let pattern = Pattern::evaluate(&guess, &self.target);
        self.records.push(GuessRecord { guess, pattern });

        // A hit on the last try is still a win
        if pattern.is_perfect() {
            self.state = GameState::Won;
        } else if self.records.len() == MAX_TRIES {
            self.state = GameState::Lost;
        }

        self.records.last()
    }
}
