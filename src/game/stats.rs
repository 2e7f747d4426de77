//! Results across the games of one run (not persisted)

use super::GameState;
use crate::core::MAX_TRIES;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// Wins by number of guesses; index 0 is a win on the first guess
    pub guess_distribution: [usize; MAX_TRIES],
}

impl Statistics {
    /// Count a finished game; in-progress states are ignored
    pub fn record(&mut self, state: GameState, guesses: usize) {
        match state {
            GameState::InProgress => return,
            GameState::Won => {
                self.games_won += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
                if let Some(slot) = guesses
                    .checked_sub(1)
                    .and_then(|i| self.guess_distribution.get_mut(i))
                {
                    *slot += 1;
                }
            }
            GameState::Lost => self.current_streak = 0,
        }
        self.games_played += 1;
    }

    /// Percentage of games won, 0 when nothing was played
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}
