//! The game as seen by a presentation shell
//!
//! Shells call [`Game::submit`] and [`Game::restart`], then read
//! [`Game::session`] and [`Game::keyboard`] to redraw.

use super::{GameState, GuessError, KeyboardTracker, Session, Statistics};
use crate::core::{Pattern, Word};
use crate::wordlists::{WordBank, WordSource};

/// Outcome of a submission that was not rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// The guess was evaluated; `state` is the state after it
    Accepted { pattern: Pattern, state: GameState },
    /// The game is already over; nothing changed
    Ignored,
}

/// Owns the word source, the current session and the keyboard
pub struct Game<W: WordSource = WordBank> {
    words: W,
    session: Session,
    keyboard: KeyboardTracker,
    stats: Statistics,
}

impl<W: WordSource> Game<W> {
    /// Start a first session with a freshly drawn target
    pub fn new(mut words: W) -> Self {
        let session = Session::new(words.random_target());
        tracing::debug!("new game started");

        Self {
            words,
            session,
            keyboard: KeyboardTracker::new(),
            stats: Statistics::default(),
        }
    }

    /// Submit a guess for the current session
    ///
    /// Input is case-insensitive. Once the game is won or lost every
    /// submission is `Ignored`, valid or not.
    ///
    /// # Errors
    ///
    /// Returns `GuessError` if the guess is not five letters or not a legal
    /// word; the session is left untouched.
    pub fn submit(&mut self, guess: &str) -> Result<Submission, GuessError> {
        if self.session.state().is_over() {
            tracing::debug!(guess, "game over, guess ignored");
            return Ok(Submission::Ignored);
        }

        let word = self.validate(guess).inspect_err(|e| {
            tracing::debug!(guess, "guess rejected: {e}");
        })?;

        let Some(record) = self.session.apply(word) else {
            return Ok(Submission::Ignored);
        };
        let pattern = *record.pattern();
        self.keyboard.record_pattern(record.guess(), &pattern);
        tracing::debug!(guess = record.guess().text(), pattern = %pattern, "guess accepted");

        let state = self.session.state();

        if state.is_over() {
            self.stats.record(state, self.session.guesses_made());
            tracing::info!(
                ?state,
                guesses = self.session.guesses_made(),
                target = self.session.target().text(),
                "game finished"
            );
        }

        Ok(Submission::Accepted { pattern, state })
    }

    /// Check a guess without submitting it
    ///
    /// # Errors
    ///
    /// Returns `GuessError::InvalidLength` / `InvalidCharacters` for malformed
    /// input and `GuessError::NotInWordList` for unknown words.
    pub fn validate(&self, guess: &str) -> Result<Word, GuessError> {
        let word = Word::new(guess)?;
        if self.words.is_legal_guess(word.text()) {
            Ok(word)
        } else {
            Err(GuessError::NotInWordList(word.text().to_string()))
        }
    }

    /// Throw the current session away and start another
    ///
    /// An unfinished session is not counted in the statistics.
    pub fn restart(&mut self) {
        self.session = Session::new(self.words.random_target());
        self.keyboard.reset();
        tracing::debug!("game restarted");
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardTracker {
        &self.keyboard
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }
}
