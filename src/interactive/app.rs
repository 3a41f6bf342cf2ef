//! TUI application state and logic

use crate::core::{ConstraintSet, Feedback, Mark, WORD_LENGTH, Word};
use crate::session::Session;
use crate::solver::{Candidate, ScorerType, Solver};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept on screen
const MESSAGE_LIMIT: usize = 5;

/// Application state
pub struct App<'a> {
    pub solver: Solver<'a, ScorerType>,
    pub session: Session,
    pub suggestions: Vec<Candidate<'a>>,
    pub constraints: ConstraintSet,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub pending: Option<PendingGuess>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing the word that was played
    Guess,
    /// Setting the colour of each letter
    Marks,
    WinCelebration,
}

/// A guess whose marks are being entered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingGuess {
    pub word: Word,
    pub feedback: Feedback,
    pub cursor: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; 7],
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(solver: Solver<'a, ScorerType>) -> Self {
        let mut app = Self {
            solver,
            session: Session::new(),
            suggestions: Vec::new(),
            constraints: ConstraintSet::new(),
            input_mode: InputMode::Guess,
            input_buffer: String::new(),
            pending: None,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };
        app.add_message(
            "Type the word you played, or press Enter for the top suggestion.",
            MessageStyle::Info,
        );
        app.refresh();
        app
    }

    /// Re-solve with everything recorded so far
    pub fn refresh(&mut self) {
        match self.session.constraints() {
            Ok(constraints) => {
                self.suggestions = self.solver.solve(&constraints);
                self.constraints = constraints;
            }
            Err(e) => {
                self.suggestions.clear();
                self.constraints = ConstraintSet::new();
                self.add_message(&format!("Conflicting marks: {e}"), MessageStyle::Error);
            }
        }
    }

    #[must_use]
    pub fn candidates_count(&self) -> usize {
        self.suggestions.len()
    }

    /// Dispatch one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::WinCelebration => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Guess => self.handle_guess_key(key),
            InputMode::Marks => self.handle_marks_key(key),
        }
    }

    fn handle_guess_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('u') if ctrl => self.undo_last(),
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Tab => {
                if let Some(best) = self.suggestions.first() {
                    self.input_buffer = best.word.text().to_string();
                }
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                if self.input_buffer.len() < WORD_LENGTH {
                    self.input_buffer.push(c.to_ascii_lowercase());
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit_guess(),
            _ => {}
        }
    }

    fn handle_marks_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.cancel_marks(),
            KeyCode::Left => self.move_cursor(-1),
            KeyCode::Right => self.move_cursor(1),
            KeyCode::Char(' ') | KeyCode::Up | KeyCode::Down => self.cycle_at_cursor(),
            KeyCode::Char(c @ '1'..='5') => {
                self.cycle_mark(usize::from(c as u8 - b'1'));
            }
            KeyCode::Char(c) => {
                if let Some(mark) = Mark::from_char(c) {
                    self.set_mark_at_cursor(mark);
                }
            }
            KeyCode::Enter => self.commit_marks(),
            _ => {}
        }
    }

    /// Take the typed word (or the top suggestion) and start entering marks
    pub fn submit_guess(&mut self) {
        let text = if self.input_buffer.is_empty() {
            match self.suggestions.first() {
                Some(best) => best.word.text().to_string(),
                None => {
                    self.add_message("No suggestion available, type a word.", MessageStyle::Error);
                    return;
                }
            }
        } else {
            self.input_buffer.clone()
        };

        match Word::new(&text) {
            Ok(word) => {
                if !self.solver.corpus().contains(word.text()) {
                    self.add_message(
                        &format!("Note: {} is not in the word list", word.text().to_uppercase()),
                        MessageStyle::Info,
                    );
                }
                self.pending = Some(PendingGuess {
                    word,
                    feedback: Feedback::default(),
                    cursor: 0,
                });
                self.input_buffer.clear();
                self.input_mode = InputMode::Marks;
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Cycle the mark at `position` gray → yellow → green
    pub fn cycle_mark(&mut self, position: usize) {
        if let Some(pending) = &mut self.pending
            && position < WORD_LENGTH
        {
            pending.feedback.cycle(position);
            pending.cursor = position;
        }
    }

    fn cycle_at_cursor(&mut self) {
        if let Some(cursor) = self.pending.as_ref().map(|p| p.cursor) {
            self.cycle_mark(cursor);
        }
    }

    fn set_mark_at_cursor(&mut self, mark: Mark) {
        if let Some(pending) = &mut self.pending {
            pending.feedback.set(pending.cursor, mark);
            pending.cursor = (pending.cursor + 1).min(WORD_LENGTH - 1);
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        if let Some(pending) = &mut self.pending {
            pending.cursor = pending
                .cursor
                .saturating_add_signed(delta)
                .min(WORD_LENGTH - 1);
        }
    }

    fn cancel_marks(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.input_buffer = pending.word.text().to_string();
        }
        self.input_mode = InputMode::Guess;
    }

    /// Record the pending guess and solve again
    pub fn commit_marks(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };

        let before = self.candidates_count();
        self.session.record(pending.word, pending.feedback);
        self.refresh();

        if pending.feedback.is_solved() {
            self.record_win();
            return;
        }

        self.input_mode = InputMode::Guess;
        let after = self.candidates_count();
        if after == 0 {
            self.add_message(
                "No candidates remain - some marks may be wrong. Ctrl-U to undo.",
                MessageStyle::Error,
            );
        } else {
            self.add_message(
                &format!("{before} → {after} candidates remaining"),
                MessageStyle::Info,
            );
        }
    }

    fn record_win(&mut self) {
        let guess_count = self.session.rounds().len();
        self.stats.games_won += 1;
        self.stats.total_games += 1;
        if guess_count < self.stats.guess_distribution.len() {
            self.stats.guess_distribution[guess_count] += 1;
        }

        self.input_mode = InputMode::WinCelebration;
        let celebration = match guess_count {
            1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
            2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
            3 => "✨ SPLENDID! Three guesses! ✨",
            4 => "👏 GREAT JOB! Four guesses! 👏",
            5 => "🎉 NICE WORK! Five guesses! 🎉",
            6 => "😅 PHEW! Got it in six! 😅",
            _ => "🎊 SOLVED! 🎊",
        };
        self.add_message(celebration, MessageStyle::Success);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        if self.input_mode != InputMode::WinCelebration && !self.session.is_empty() {
            self.stats.total_games += 1;
        }
        self.session.reset();
        self.pending = None;
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guess;
        self.add_message("New game started!", MessageStyle::Info);
        self.refresh();
    }

    pub fn undo_last(&mut self) {
        if self.session.undo().is_some() {
            self.refresh();
            self.add_message("Undone!", MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MESSAGE_LIMIT {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only key presses; some terminals also report releases
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
