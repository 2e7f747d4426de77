//! Game state: sessions, the on-screen keyboard and run statistics

mod engine;
mod keyboard;
mod session;
mod stats;

pub use engine::{Game, Submission};
pub use keyboard::{KEYBOARD_ROWS, KeyboardTracker};
pub use session::{GameState, GuessError, GuessRecord, Session};
pub use stats::Statistics;
