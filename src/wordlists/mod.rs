//! Word lists for Wordle
//!
//! Embedded lists compiled into the binary, file loading, and the [`WordBank`]
//! that draws targets and checks guesses.

mod bank;
mod embedded;
pub mod loader;

pub use bank::{WordBank, WordSource};
pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
pub use loader::WordListError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn lists_hold_five_letter_lowercase_words() {
        for &word in ANSWERS.iter().chain(ALLOWED) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn allowed_list_has_no_answers() {
        let answers: std::collections::HashSet<_> = ANSWERS.iter().collect();
        assert!(ALLOWED.iter().all(|w| !answers.contains(w)));
    }

    #[test]
    fn embedded_bank_accepts_answers_and_extra_guesses() {
        let bank = WordBank::embedded().unwrap();
        assert_eq!(bank.target_count(), ANSWERS_COUNT);
        assert_eq!(bank.legal_count(), ANSWERS_COUNT + ALLOWED_COUNT);
        assert!(bank.is_legal_guess("abbey"));
        assert!(bank.is_legal_guess("salet"));
    }

    #[test]
    fn guess_list_covers_every_initial() {
        let bank = WordBank::embedded().unwrap();
        for word in ["nerds", "dudes", "lased", "zebus", "pious", "tizzy", "quoin", "oxlip"] {
            assert!(bank.is_legal_guess(word), "'{word}' should be a legal guess");
        }

        for initial in b'a'..=b'z' {
            assert!(
                ALLOWED.iter().any(|w| w.as_bytes()[0] == initial),
                "no guess-only word starts with '{}'",
                char::from(initial)
            );
        }
    }
}
