//! Pattern check command
//!
//! Evaluates one guess against a chosen target without playing a game.

use crate::core::{Pattern, Word};

/// Result of checking a guess
#[derive(Debug)]
pub struct CheckResult {
    pub guess: Word,
    pub target: Word,
    pub pattern: Pattern,
}

/// Evaluate `guess` against `target`
///
/// Neither word has to be in a word list.
///
/// # Errors
///
/// Returns an error if either word is not five ASCII letters.
pub fn check_guess(guess: &str, target: &str) -> Result<CheckResult, String> {
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let target = Word::new(target).map_err(|e| format!("Invalid target: {e}"))?;
    let pattern = Pattern::evaluate(&guess, &target);

    Ok(CheckResult {
        guess,
        target,
        pattern,
    })
}
