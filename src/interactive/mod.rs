//! Interactive TUI
//!
//! Type the word that was played, set each letter's colour, and watch the
//! suggestions narrow.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, PendingGuess, Statistics, run_tui};
