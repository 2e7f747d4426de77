//! Target selection and guess legality

use super::loader::{WordListError, words_from_slice};
use super::{ALLOWED, ANSWERS};
use crate::core::Word;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;

/// Supplies targets and judges guesses
pub trait WordSource {
    /// Draw a target uniformly at random
    fn random_target(&mut self) -> Word;

    /// Whether `word` (lowercase) is accepted as a guess
    fn is_legal_guess(&self, word: &str) -> bool;
}

/// Immutable word lists plus the random generator used to draw targets
///
/// The legal set always contains every target, so a target can always be
/// guessed.
#[derive(Debug, Clone)]
pub struct WordBank {
    targets: Vec<Word>,
    legal: FxHashSet<String>,
    rng: StdRng,
}

impl WordBank {
    /// Build a bank from target words and extra legal guesses
    ///
    /// # Errors
    ///
    /// Returns `WordListError::NoTargets` if `targets` is empty.
    pub fn new(targets: Vec<Word>, extra_guesses: &[Word]) -> Result<Self, WordListError> {
        if targets.is_empty() {
            return Err(WordListError::NoTargets);
        }

        let legal: FxHashSet<String> = targets
            .iter()
            .chain(extra_guesses)
            .map(|w| w.text().to_string())
            .collect();

        Ok(Self {
            targets,
            legal,
            rng: StdRng::from_os_rng(),
        })
    }

    /// The word lists compiled into the binary
    ///
    /// # Errors
    ///
    /// Only fails if the embedded answer list is empty.
    pub fn embedded() -> Result<Self, WordListError> {
        Self::new(words_from_slice(ANSWERS), &words_from_slice(ALLOWED))
    }

    /// Make target selection reproducible
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Accept more words as guesses
    pub fn extend_legal<'w>(&mut self, words: impl IntoIterator<Item = &'w Word>) {
        self.legal
            .extend(words.into_iter().map(|w| w.text().to_string()));
    }

    #[must_use]
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub fn legal_count(&self) -> usize {
        self.legal.len()
    }
}

impl WordSource for WordBank {
    fn random_target(&mut self) -> Word {
        let index = self.rng.random_range(0..self.targets.len());
        self.targets[index].clone()
    }

    fn is_legal_guess(&self, word: &str) -> bool {
        self.legal.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn bank(targets: &[&str], extra: &[&str]) -> WordBank {
        WordBank::new(words_from_slice(targets), &words_from_slice(extra)).unwrap()
    }

    #[test]
    fn empty_targets_rejected() {
        let result = WordBank::new(Vec::new(), &words_from_slice(&["crane"]));
        assert!(matches!(result, Err(WordListError::NoTargets)));
    }

    #[test]
    fn targets_are_legal_guesses() {
        let bank = bank(&["crane"], &["salet"]);
        assert!(bank.is_legal_guess("crane"));
        assert!(bank.is_legal_guess("salet"));
        assert!(!bank.is_legal_guess("zzzzz"));
        assert_eq!(bank.legal_count(), 2);
    }

    #[test]
    fn random_target_comes_from_targets_only() {
        let mut bank = bank(&["crane", "slate"], &["salet"]).with_seed(7);
        for _ in 0..50 {
            let target = bank.random_target();
            assert!(target.text() == "crane" || target.text() == "slate");
        }
    }

    #[test]
    fn seeded_banks_agree() {
        let mut a = WordBank::embedded().unwrap().with_seed(42);
        let mut b = WordBank::embedded().unwrap().with_seed(42);
        for _ in 0..10 {
            assert_eq!(a.random_target(), b.random_target());
        }
    }

    #[test]
    fn random_target_covers_all_targets() {
        let mut bank = bank(&["crane", "slate", "irate", "abbey"], &[]).with_seed(1);
        let mut seen: FxHashMap<String, usize> = FxHashMap::default();
        for _ in 0..400 {
            *seen.entry(bank.random_target().text().to_string()).or_default() += 1;
        }
        assert_eq!(seen.len(), 4);
        assert!(seen.values().all(|&n| n > 50));
    }

    #[test]
    fn extend_legal_adds_words() {
        let mut bank = bank(&["crane"], &[]);
        assert!(!bank.is_legal_guess("slate"));
        bank.extend_legal(&words_from_slice(&["slate"]));
        assert!(bank.is_legal_guess("slate"));
    }
}
