//! Simple interactive CLI mode
//!
//! Line-based game without the full-screen TUI: one guess per line.

use crate::core::MAX_TRIES;
use crate::game::{Game, GuessError, Submission};
use crate::output::{print_board, print_game_over};
use crate::wordlists::WordSource;
use colored::Colorize;
use std::io::{self, Write};

/// What a line of input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    New,
    Help,
    Guess(String),
}

impl Command {
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" | ":q" => Self::Quit,
            "new" | "restart" | ":n" => Self::New,
            "help" | "?" => Self::Help,
            _ => Self::Guess(input.to_string()),
        }
    }
}

/// Result of handling one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Quit,
    Restarted,
    Help,
    Submitted(Submission),
    Rejected(GuessError),
}

/// Apply one line of input to the game
pub fn handle_line<W: WordSource>(game: &mut Game<W>, input: &str) -> LineOutcome {
    match Command::parse(input) {
        Command::Quit => LineOutcome::Quit,
        Command::New => {
            game.restart();
            LineOutcome::Restarted
        }
        Command::Help => LineOutcome::Help,
        Command::Guess(guess) => match game.submit(&guess) {
            Ok(submission) => LineOutcome::Submitted(submission),
            Err(e) => LineOutcome::Rejected(e),
        },
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<W: WordSource>(game: &mut Game<W>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════╗");
    println!("║                Wordle                ║");
    println!("╚══════════════════════════════════════╝");
    print_help();

    loop {
        print_board(game.session(), game.keyboard());

        if game.session().state().is_over() {
            print_game_over(game.session(), game.stats());

            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" | "" => {
                    game.restart();
                    println!("\n🔄 New game started!");
                    continue;
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        let prompt = format!("Guess {}/{MAX_TRIES}", game.session().guesses_made() + 1);
        match handle_line(game, &get_user_input(&prompt)?) {
            LineOutcome::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            LineOutcome::Restarted => println!("\n🔄 New game started!"),
            LineOutcome::Help => print_help(),
            LineOutcome::Rejected(e) => println!("{}", format!("❌ {e}").red()),
            LineOutcome::Submitted(_) => {}
        }
    }
}

fn print_help() {
    println!("\nGuess the hidden five letter word in {MAX_TRIES} tries.");
    println!(
        "  {} right letter, right spot   {} right letter, wrong spot   {} not in the word",
        "G".black().on_green(),
        "Y".black().on_yellow(),
        "-".white().on_bright_black()
    );
    println!("Commands: 'quit' to exit, 'new' for a new word, 'help' for this text");
}

/// Get user input with a prompt; end of input reads as `quit`
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameState;
    use crate::wordlists::WordBank;
    use crate::wordlists::loader::words_from_slice;

    fn game() -> Game {
        let bank = WordBank::new(
            words_from_slice(&["abbey"]),
            &words_from_slice(&["berry", "crane"]),
        )
        .unwrap();
        Game::new(bank)
    }

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse(" Quit "), Command::Quit);
        assert_eq!(Command::parse("new"), Command::New);
        assert_eq!(Command::parse("?"), Command::Help);
        assert_eq!(Command::parse(" Crane"), Command::Guess("Crane".to_string()));
    }

    #[test]
    fn guess_lines_reach_the_game() {
        let mut game = game();
        assert!(matches!(
            handle_line(&mut game, "berry"),
            LineOutcome::Submitted(Submission::Accepted {
                state: GameState::InProgress,
                ..
            })
        ));
        assert_eq!(
            handle_line(&mut game, "zzzzz"),
            LineOutcome::Rejected(GuessError::NotInWordList("zzzzz".to_string()))
        );
        assert_eq!(game.session().guesses_made(), 1);
    }

    #[test]
    fn new_restarts() {
        let mut game = game();
        handle_line(&mut game, "abbey");
        assert_eq!(handle_line(&mut game, "new"), LineOutcome::Restarted);
        assert_eq!(game.session().guesses_made(), 0);
    }

    #[test]
    fn guesses_after_win_ignored() {
        let mut game = game();
        handle_line(&mut game, "abbey");
        assert_eq!(
            handle_line(&mut game, "crane"),
            LineOutcome::Submitted(Submission::Ignored)
        );
    }
}
