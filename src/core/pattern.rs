//! Guess evaluation
//!
//! A pattern is the feedback for one guess: one [`Feedback`] per position.

use super::{Feedback, WORD_LEN, Word};
use std::fmt;

/// Feedback pattern for a Wordle guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern([Feedback; WORD_LEN]);

impl Pattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([Feedback::Correct; WORD_LEN]);

    /// Create a pattern from explicit feedback
    #[must_use]
    pub const fn new(feedback: [Feedback; WORD_LEN]) -> Self {
        Self(feedback)
    }

    /// Evaluate `guess` against `target`
    ///
    /// Implements Wordle's feedback rules, including duplicate letters: each
    /// target letter can back at most one `Correct` or `Present` mark.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches and remove them from the pool
    /// 2. Second pass: mark `Present` from what remains of the pool, else `Absent`
    ///
    /// Exact matches must be taken out of the pool before any partial match is
    /// considered, otherwise an earlier misplaced copy can steal the letter.
    ///
    /// # Examples
    /// ```
    /// use wordle_tui::core::{Feedback::*, Pattern, Word};
    ///
    /// let guess = Word::new("berry").unwrap();
    /// let target = Word::new("abbey").unwrap();
    ///
    /// assert_eq!(
    ///     Pattern::evaluate(&guess, &target).feedback(),
    ///     &[Present, Present, Absent, Absent, Correct]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let mut result = [Feedback::Absent; WORD_LEN];
        let mut available = target.letter_counts();

        // Allow: Index needed to access guess[i], target[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if guess.char_at(i) == target.char_at(i) {
                result[i] = Feedback::Correct;
                available[usize::from(guess.char_at(i) - b'a')] -= 1;
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if result[i] == Feedback::Correct {
                continue;
            }
            let count = &mut available[usize::from(guess.char_at(i) - b'a')];
            if *count > 0 {
                result[i] = Feedback::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Feedback per position
    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &[Feedback; WORD_LEN] {
        &self.0
    }

    /// Feedback at a position
    ///
    /// # Panics
    /// Panics if `position >= WORD_LEN`
    #[inline]
    #[must_use]
    pub const fn at(&self, position: usize) -> Feedback {
        self.0[position]
    }

    /// Check if this is a perfect match (all greens)
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count positions with the given feedback
    #[must_use]
    pub fn count(&self, kind: Feedback) -> usize {
        self.0.iter().filter(|&&f| f == kind).count()
    }

    /// Parse a pattern from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_tui::core::Pattern;
    ///
    /// let p1 = Pattern::parse("GY-GY").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut result = [Feedback::Absent; WORD_LEN];
        let mut chars = s.chars();

        for slot in &mut result {
            *slot = Feedback::from_code(chars.next()?)?;
        }

        if chars.next().is_some() {
            return None;
        }

        Some(Self(result))
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_tui::core::Pattern;
    ///
    /// let p = Pattern::parse("GY-GY").unwrap();
    /// assert_eq!(p.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for feedback in &self.0 {
            write!(f, "{}", feedback.code())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}
