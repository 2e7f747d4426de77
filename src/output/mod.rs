//! Terminal output formatting
//!
//! Colored rendering for the line-mode game and one-shot commands.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_check_result, print_game_over};
