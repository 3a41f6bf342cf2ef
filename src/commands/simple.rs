//! Simple interactive CLI mode
//!
//! Text-based guess loop without the TUI. Each turn shows the ranked
//! suggestions, then reads the word actually played and its marks.

use crate::core::{Feedback, Word};
use crate::output::formatters::colored_guess;
use crate::session::Session;
use crate::solver::{Scorer, Solver};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Suggestions shown per turn
const SHOWN: usize = 10;

enum Turn {
    Play(Word, Feedback),
    Undo,
    New,
    Quit,
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<S: Scorer>(solver: &Solver<S>) -> Result<()> {
    let stdin = io::stdin();
    run_simple_with(solver, &mut stdin.lock(), &mut io::stdout())
}

/// Run the guess loop on arbitrary input and output
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<S: Scorer, R: BufRead, W: Write>(
    solver: &Solver<S>,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║               Wordle Sieve - Interactive Mode                ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Type the word you played (Enter takes the top suggestion),")?;
    writeln!(out, "then the marks it received:\n")?;
    writeln!(out, "  - G/g/🟩 for green (correct position)")?;
    writeln!(out, "  - Y/y/🟨 for yellow (in the word, wrong position)")?;
    writeln!(out, "  - -/_/⬜ for gray (not in the word)")?;
    writeln!(out, "  - or 'win' if it was right\n")?;
    writeln!(
        out,
        "Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n"
    )?;

    let mut session = Session::new();

    loop {
        let ranked = match session.solve(solver) {
            Ok(ranked) => ranked,
            Err(e) => {
                writeln!(out, "{} {e}", "❌ Conflicting marks:".red())?;
                Vec::new()
            }
        };

        let turn = session.rounds().len() + 1;
        writeln!(out, "────────────────────────────────────────────────────────────")?;
        writeln!(out, "Turn {turn}: {} candidates remaining", ranked.len())?;
        writeln!(out, "────────────────────────────────────────────────────────────")?;
        for round in session.rounds() {
            writeln!(out, "  {}", colored_guess(&round.guess, round.feedback))?;
        }

        if ranked.is_empty() {
            writeln!(out, "\n❌ No candidates remain! Some marks may be wrong.")?;
            writeln!(out, "Type 'undo' to go back, or 'new' to start over.\n")?;
        } else {
            writeln!(
                out,
                "\n📊 Suggested guess: {}",
                ranked[0].word.text().to_uppercase().bright_yellow().bold()
            )?;
            for candidate in ranked.iter().take(SHOWN) {
                writeln!(
                    out,
                    "  • {} {}",
                    candidate.word.text().to_uppercase(),
                    format!("{:.2}", candidate.score).bright_black()
                )?;
            }
            writeln!(out)?;
        }

        let suggestion = ranked.first().map(|c| c.word.clone());
        match read_turn(input, out, suggestion)? {
            Turn::Quit => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            Turn::New => {
                session.reset();
                writeln!(out, "\n🔄 New game started!\n")?;
            }
            Turn::Undo => {
                if session.undo().is_some() {
                    writeln!(out, "✓ Undone! Back to turn {}\n", session.rounds().len() + 1)?;
                } else {
                    writeln!(out, "Nothing to undo!\n")?;
                }
            }
            Turn::Play(guess, feedback) => {
                session.record(guess, feedback);
                if feedback.is_solved() {
                    print_victory(out, &session)?;
                    let again = prompt(input, out, "Play again? (yes/no)")?;
                    if !matches!(again.as_deref(), Some("yes" | "y")) {
                        writeln!(out, "\n👋 Thanks for playing!\n")?;
                        return Ok(());
                    }
                    session.reset();
                    writeln!(out, "\n🔄 New game started!\n")?;
                }
            }
        }
    }
}

/// Read one turn: a command, or a word followed by its marks
fn read_turn<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    suggestion: Option<Word>,
) -> Result<Turn> {
    let guess = loop {
        let text = "Word played (Enter for suggestion, or command)";
        let Some(line) = prompt(input, out, text)? else {
            return Ok(Turn::Quit);
        };
        if let Some(command) = command(&line) {
            return Ok(command);
        }
        if line.is_empty() {
            match &suggestion {
                Some(word) => break word.clone(),
                None => {
                    writeln!(out, "No suggestion available, type a word or a command\n")?;
                    continue;
                }
            }
        }
        match Word::new(&line) {
            Ok(word) => break word,
            Err(e) => writeln!(out, "❌ {e}\n")?,
        }
    };

    loop {
        let text = format!("Marks for {} (G/Y/-)", guess.text().to_uppercase());
        let Some(line) = prompt(input, out, &text)? else {
            return Ok(Turn::Quit);
        };
        if let Some(command) = command(&line) {
            return Ok(command);
        }
        if matches!(line.as_str(), "win" | "correct" | "solved") {
            return Ok(Turn::Play(guess, Feedback::SOLVED));
        }
        match Feedback::parse(&line) {
            Some(feedback) => return Ok(Turn::Play(guess, feedback)),
            None => writeln!(out, "❌ Invalid marks! Use G/Y/-, 'win', or '🟩🟨⬜🟩🟨'\n")?,
        }
    }
}

fn command(line: &str) -> Option<Turn> {
    match line {
        "quit" | "q" | "exit" => Some(Turn::Quit),
        "new" | "n" => Some(Turn::New),
        "undo" | "u" => Some(Turn::Undo),
        _ => None,
    }
}

fn print_victory<W: Write>(out: &mut W, session: &Session) -> Result<()> {
    let guesses = session.rounds().len();

    writeln!(out, "\n{}", "═".repeat(70).bright_cyan())?;
    writeln!(
        out,
        "{}",
        "    🎉 🎊 ✨  W O R D L E   S O L V E D !  ✨ 🎊 🎉    "
            .bright_green()
            .bold()
    )?;
    writeln!(out, "{}", "═".repeat(70).bright_cyan())?;
    writeln!(
        out,
        "\n  Solution found in {} {}",
        guesses.to_string().bright_cyan().bold(),
        if guesses == 1 { "guess" } else { "guesses" }
    )?;

    writeln!(out, "\n  Guess history:")?;
    for (i, round) in session.rounds().iter().enumerate() {
        writeln!(
            out,
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            colored_guess(&round.guess, round.feedback),
            round.feedback.to_emoji()
        )?;
    }
    writeln!(out, "\n{}", "═".repeat(70).bright_cyan())?;
    Ok(())
}

/// Prompt and read one trimmed, lowercased line; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> Result<Option<String>> {
    write!(out, "{text}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}
