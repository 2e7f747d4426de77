//! Display functions for the line-mode game and commands

use super::formatters::{colorize_guess, colorize_keyboard, empty_row, share_summary};
use crate::commands::CheckResult;
use crate::core::MAX_TRIES;
use crate::game::{GameState, KeyboardTracker, Session, Statistics};
use colored::Colorize;

/// Print the board so far and the keyboard
pub fn print_board(session: &Session, keyboard: &KeyboardTracker) {
    println!();
    for (i, record) in session.records().iter().enumerate() {
        println!(
            "  {} {}",
            format!("{}.", i + 1).bright_black(),
            colorize_guess(record.guess(), record.pattern())
        );
    }
    for i in session.guesses_made()..MAX_TRIES {
        println!("  {} {}", format!("{}.", i + 1).bright_black(), empty_row());
    }

    println!();
    for line in colorize_keyboard(keyboard).lines() {
        println!("  {line}");
    }
    println!();
}

/// Print the end-of-game banner
pub fn print_game_over(session: &Session, stats: &Statistics) {
    println!("{}", "═".repeat(40).bright_cyan());
    match session.state() {
        GameState::Won => println!("  {}", "You won!".bright_blue().bold()),
        GameState::Lost => {
            println!("  {}", "You lost!".red().bold());
            println!(
                "  The correct word was: {}",
                session.target().text().to_uppercase().bright_yellow().bold()
            );
        }
        GameState::InProgress => {}
    }
    println!();
    for line in share_summary(session).lines() {
        println!("  {line}");
    }
    println!();
    println!(
        "  Played {} | Win rate {:.0}% | Streak {} (best {})",
        stats.games_played,
        stats.win_rate(),
        stats.current_streak,
        stats.max_streak
    );
    println!("{}", "═".repeat(40).bright_cyan());
}

/// Print the result of checking a guess against a target
pub fn print_check_result(result: &CheckResult) {
    println!(
        "\n  {}  {}  {}",
        result.guess.text().to_uppercase().bright_white().bold(),
        "→".bright_black(),
        result.target.text().to_uppercase().bright_white().bold()
    );
    println!(
        "\n  {}   {}",
        colorize_guess(&result.guess, &result.pattern),
        result.pattern.to_emoji()
    );
    println!("  Pattern: {}\n", result.pattern);
}
