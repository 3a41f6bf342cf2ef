//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark, Word};
use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressStyle};

/// Render a guess as coloured tiles, one per letter
#[must_use]
pub fn colored_guess(word: &Word, feedback: Feedback) -> String {
    word.text()
        .chars()
        .zip(feedback.marks())
        .map(|(ch, &mark)| tile(ch, mark).to_string())
        .collect()
}

fn tile(ch: char, mark: Mark) -> ColoredString {
    let text = format!(" {} ", ch.to_ascii_uppercase());
    match mark {
        Mark::Correct => text.black().on_green().bold(),
        Mark::Present => text.black().on_yellow().bold(),
        Mark::Absent => text.white().on_bright_black(),
    }
}

/// Join letters as "a, e, o", or "-" if there are none
#[must_use]
pub fn letter_list(letters: &[char]) -> String {
    if letters.is_empty() {
        return "-".to_string();
    }
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Progress bar for a run over `len` items
#[must_use]
pub fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    pb
}
