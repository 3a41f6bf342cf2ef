//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Feedback, Mark, Word};
use crate::output::formatters::letter_list;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Suggestions listed in the side panel
const SHOWN: usize = 12;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORDLE SIEVE - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_board(f, app, chunks[0]);
    render_constraints(f, app, chunks[1]);
}

fn tile_style(mark: Mark) -> Style {
    let bg = match mark {
        Mark::Correct => Color::Green,
        Mark::Present => Color::Yellow,
        Mark::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn tiles(word: &Word, feedback: Feedback, cursor: Option<usize>) -> Line<'static> {
    let spans: Vec<Span> = word
        .text()
        .chars()
        .zip(feedback.marks())
        .enumerate()
        .flat_map(|(i, (ch, &mark))| {
            let mut style = tile_style(mark);
            if cursor == Some(i) {
                style = style.add_modifier(Modifier::UNDERLINED | Modifier::SLOW_BLINK);
            }
            [
                Span::styled(format!(" {} ", ch.to_ascii_uppercase()), style),
                Span::raw(" "),
            ]
        })
        .collect();
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = app
        .session
        .rounds()
        .iter()
        .map(|round| tiles(&round.guess, round.feedback, None))
        .collect();

    if let Some(pending) = &app.pending {
        lines.push(tiles(&pending.word, pending.feedback, Some(pending.cursor)));
    }

    if lines.is_empty() {
        lines.push(Line::from("No guesses yet"));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_constraints(f: &mut Frame, app: &App, area: Rect) {
    let constraints = &app.constraints;
    let contradictions = constraints.contradictions();

    let mut content = vec![
        Line::from(vec![
            Span::raw("Pattern: "),
            Span::styled(
                constraints.pattern().to_uppercase(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("Present: "),
            Span::styled(
                letter_list(&constraints.present_letters()),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            Span::raw("Absent:  "),
            Span::styled(
                letter_list(&constraints.absent_letters()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];

    if !contradictions.is_empty() {
        content.push(Line::from(Span::styled(
            format!("Contradiction: {}", letter_list(&contradictions)),
            Style::default().fg(Color::Red),
        )));
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Constraints ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Search space gauge
            Constraint::Percentage(60), // Suggestions
            Constraint::Min(4),         // Messages
        ])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_suggestions(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let total = app.solver.corpus().len();
    let remaining = app.candidates_count();
    let ratio = if total == 0 {
        0.0
    } else {
        1.0 - remaining as f64 / total as f64
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Search Space ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{remaining}/{total} words remain"));

    f.render_widget(gauge, area);
}

fn render_suggestions(f: &mut Frame, app: &App, area: Rect) {
    let content = if app.suggestions.is_empty() {
        vec![Line::from(Span::styled(
            "No candidates",
            Style::default().fg(Color::Red),
        ))]
    } else {
        let mut lines: Vec<Line> = app
            .suggestions
            .iter()
            .take(SHOWN)
            .enumerate()
            .map(|(i, candidate)| {
                let style = if i == 0 {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                Line::from(vec![
                    Span::raw(format!("{:>2}. ", i + 1)),
                    Span::styled(format!("{:<5}", candidate.word.text().to_uppercase()), style),
                    Span::styled(
                        format!(" {:.2}", candidate.score),
                        Style::default().fg(Color::Cyan),
                    ),
                ])
            })
            .collect();

        if app.suggestions.len() > SHOWN {
            lines.push(Line::from(format!(
                "    ... {} more",
                app.suggestions.len() - SHOWN
            )));
        }
        lines
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Suggestions ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let pending_word = app
        .pending
        .as_ref()
        .map(|p| p.word.text().to_uppercase())
        .unwrap_or_default();

    let (title, content, color) = match app.input_mode {
        InputMode::WinCelebration => (
            " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new game or 'q' to quit ",
            String::new(),
            Color::Green,
        ),
        InputMode::Guess => (
            " Word Played (Enter = top suggestion, TAB = fill suggestion) ",
            app.input_buffer.to_uppercase(),
            Color::Yellow,
        ),
        InputMode::Marks => (
            " Marks: 1-5/Space cycle, G/Y/- set, ←/→ move, Enter to add, ESC to edit word ",
            pending_word,
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(20),
            Constraint::Percentage(30),
        ])
        .split(area);

    let mode_text = format!("Scorer: {}", app.solver.scorer().name());
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let candidates_text = format!("Candidates: {}", app.candidates_count());
    let candidates = Paragraph::new(candidates_text).alignment(Alignment::Center);
    f.render_widget(candidates, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::WinCelebration => "q: Quit | n: New Game",
        _ => "ESC/Ctrl-C: Quit | Ctrl-U: Undo | Ctrl-N: New",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;
    use crate::solver::{ScorerType, Solver};
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_suggestions_and_status() {
        let corpus = Corpus::new(["about", "other", "audio"]);
        let app = App::new(Solver::new(ScorerType::default(), &corpus));
        let screen = draw(&app);
        assert!(screen.contains("ABOUT"));
        assert!(screen.contains("Candidates: 3"));
        assert!(screen.contains("3/3 words remain"));
    }

    #[test]
    fn renders_pending_guess() {
        let corpus = Corpus::new(["about", "other", "audio"]);
        let mut app = App::new(Solver::new(ScorerType::default(), &corpus));
        app.input_buffer = "other".to_string();
        app.submit_guess();
        let screen = draw(&app);
        assert!(screen.contains(" O "));
        assert!(screen.contains("Marks:"));
    }
}
