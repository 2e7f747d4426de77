//! Full-screen TUI shell

mod app;
mod rendering;

pub use app::{App, MIN_HEIGHT, MIN_WIDTH, Message, MessageStyle, run_tui, terminal_fits};
pub use rendering::{feedback_style, status_style, ui};
