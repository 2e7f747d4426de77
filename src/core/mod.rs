//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types: validated words, per-letter
//! feedback and the guess evaluation. Everything here is pure and deterministic.

mod feedback;
mod pattern;
mod word;

pub use feedback::{Feedback, LetterStatus};
pub use pattern::Pattern;
pub use word::{Word, WordError};

/// Number of letters in every guess and target
pub const WORD_LEN: usize = 5;

/// Guesses allowed per game
pub const MAX_TRIES: usize = 6;

/// Letters `a` through `z`
pub const ALPHABET_LEN: usize = 26;
