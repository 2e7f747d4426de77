//! Per-letter feedback kinds
//!
//! [`Feedback`] is what a single guessed letter receives. [`LetterStatus`] is the
//! best feedback seen for a letter across a whole game, with an extra `Unknown`
//! for letters that were never guessed. Both are ordered so that "better
//! knowledge" compares greater, which lets the keyboard upgrade with `max`.

/// Feedback for one letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feedback {
    /// Letter does not occur (or all occurrences are already accounted for)
    Absent,
    /// Letter occurs in the target at another position
    Present,
    /// Letter is at the right position
    Correct,
}

impl Feedback {
    /// Single-character code used in pattern strings (`G`, `Y`, `-`)
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    /// Emoji square for share strings
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse a pattern character
    ///
    /// Accepts `G`/`g`/🟩, `Y`/`y`/🟨 and `-`/`_`/⬜.
    #[must_use]
    pub const fn from_code(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Best-known status of a keyboard letter
///
/// Ordered `Unknown < Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LetterStatus {
    #[default]
    Unknown,
    Absent,
    Present,
    Correct,
}

impl From<Feedback> for LetterStatus {
    fn from(feedback: Feedback) -> Self {
        match feedback {
            Feedback::Absent => Self::Absent,
            Feedback::Present => Self::Present,
            Feedback::Correct => Self::Correct,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_order() {
        assert!(Feedback::Absent < Feedback::Present);
        assert!(Feedback::Present < Feedback::Correct);
    }

    #[test]
    fn status_order_puts_unknown_first() {
        let mut statuses = [
            LetterStatus::Correct,
            LetterStatus::Unknown,
            LetterStatus::Present,
            LetterStatus::Absent,
        ];
        statuses.sort();
        assert_eq!(
            statuses,
            [
                LetterStatus::Unknown,
                LetterStatus::Absent,
                LetterStatus::Present,
                LetterStatus::Correct,
            ]
        );
    }

    #[test]
    fn status_from_feedback_preserves_order() {
        let all = [Feedback::Absent, Feedback::Present, Feedback::Correct];
        for pair in all.windows(2) {
            assert!(LetterStatus::from(pair[0]) < LetterStatus::from(pair[1]));
        }
        assert!(LetterStatus::Unknown < LetterStatus::from(Feedback::Absent));
    }

    #[test]
    fn code_round_trips() {
        for feedback in [Feedback::Absent, Feedback::Present, Feedback::Correct] {
            assert_eq!(Feedback::from_code(feedback.code()), Some(feedback));
            assert_eq!(Feedback::from_code(feedback.emoji()), Some(feedback));
        }
        assert_eq!(Feedback::from_code('x'), None);
    }
}
