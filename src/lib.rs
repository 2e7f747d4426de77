//! Terminal Wordle
//!
//! Guess a hidden five-letter word in six tries, with per-letter feedback
//! mirrored onto an on-screen keyboard.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_tui::game::{Game, GameState};
//! use wordle_tui::wordlists::WordBank;
//!
//! let mut game = Game::new(WordBank::embedded().unwrap().with_seed(7));
//! let target = game.session().target().text().to_string();
//!
//! game.submit(&target).unwrap();
//! assert_eq!(game.session().state(), GameState::Won);
//! ```

// Core domain types
pub mod core;

// Sessions, keyboard and statistics
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
