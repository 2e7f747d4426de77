//! Terminal Wordle - CLI
//!
//! Full-screen TUI by default, with a line-oriented mode and a one-shot
//! pattern checker.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use wordle_tui::{
    commands::{check_guess, run_simple},
    core::Word,
    game::Game,
    interactive::{App, run_tui},
    logging::{self, LogTarget},
    output::print_check_result,
    wordlists::{ALLOWED, ANSWERS, WordBank, loader::load_from_file, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_tui",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Legal guesses: 'all' (default, embedded list) or path to a word file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Custom list of target words
    #[arg(long, global = true)]
    answers: Option<PathBuf>,

    /// Seed for reproducible target selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Play even if the terminal is smaller than the layout
    #[arg(short = 'f', long, global = true)]
    force: bool,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-oriented mode without the TUI
    Simple,

    /// Print the feedback pattern for a guess against a target
    Check {
        /// The guessed word
        guess: String,

        /// The hidden word
        target: String,
    },
}

fn load_words(path: &Path) -> Result<Vec<Word>> {
    load_from_file(path).with_context(|| format!("failed to load word list {}", path.display()))
}

/// Build the word bank from the -w, --answers and --seed flags
///
/// - "all": embedded answers and guess list
/// - "<path>": embedded lists plus every word in the file
fn build_bank(cli: &Cli) -> Result<WordBank> {
    let mut bank = match &cli.answers {
        Some(path) => {
            let targets = load_words(path)?;
            let mut guesses = words_from_slice(ANSWERS);
            guesses.extend(words_from_slice(ALLOWED));
            WordBank::new(targets, &guesses)
                .with_context(|| format!("no usable target words in {}", path.display()))?
        }
        None => WordBank::embedded().context("embedded word list is empty")?,
    };

    if cli.wordlist != "all" {
        let extra = load_words(Path::new(&cli.wordlist))?;
        bank.extend_legal(&extra);
    }

    if let Some(seed) = cli.seed {
        bank = bank.with_seed(seed);
    }

    tracing::info!(
        targets = bank.target_count(),
        legal = bank.legal_count(),
        "word bank ready"
    );
    Ok(bank)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    let log_target = match (&cli.log_file, command) {
        (Some(path), _) => LogTarget::File(path.clone()),
        (None, Commands::Simple) => LogTarget::Stderr,
        (None, _) => LogTarget::Off,
    };
    let _log_guard = logging::init(&log_target)?;

    match command {
        Commands::Play => {
            let game = Game::new(build_bank(&cli)?);
            run_tui(App::new(game), cli.force)
        }
        Commands::Simple => {
            let mut game = Game::new(build_bank(&cli)?);
            run_simple(&mut game).map_err(anyhow::Error::msg)
        }
        Commands::Check { guess, target } => {
            let result = check_guess(guess, target).map_err(anyhow::Error::msg)?;
            print_check_result(&result);
            Ok(())
        }
    }
}
