//! Benchmark command
//!
//! Plays the guess loop against sampled corpus words: guess the top
//! suggestion, colour it against the hidden target, record the marks in a
//! session and solve again.

use crate::core::{Feedback, Word};
use crate::corpus::Corpus;
use crate::session::Session;
use crate::solver::{Scorer, Solver};
use indicatif::ProgressBar;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Guesses allowed per game
pub const MAX_GUESSES: usize = 6;

/// One simulated game
#[derive(Debug, Clone)]
pub struct GameOutcome {
    pub target: String,
    pub guesses: Vec<String>,
    pub solved: bool,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    /// Mean guesses over solved games
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    /// Solved games that took the most guesses, worst first
    pub hardest: Vec<(String, usize)>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick `count` distinct targets from the corpus
///
/// The same seed always picks the same targets.
#[must_use]
pub fn sample_targets(corpus: &Corpus, count: usize, seed: u64) -> Vec<Word> {
    let mut rng = StdRng::seed_from_u64(seed);
    corpus
        .words()
        .choose_multiple(&mut rng, count)
        .cloned()
        .collect()
}

/// Play one game against `target`
///
/// Stops at the first all-green guess, after `max_guesses`, or when nothing
/// is left to suggest.
#[must_use]
pub fn play_game<S: Scorer>(solver: &Solver<S>, target: &Word, max_guesses: usize) -> GameOutcome {
    let mut session = Session::new();
    let mut guesses = Vec::new();
    let mut solved = false;

    while guesses.len() < max_guesses {
        let Ok(ranked) = session.solve(solver) else {
            break;
        };
        let Some(best) = ranked.first() else {
            break;
        };

        let feedback = Feedback::calculate(best.word, target);
        guesses.push(best.word.text().to_string());
        session.record(best.word.clone(), feedback);

        if feedback.is_solved() {
            solved = true;
            break;
        }
    }

    GameOutcome {
        target: target.text().to_string(),
        guesses,
        solved,
    }
}

/// Run the benchmark on a set of target words
///
/// Games run in parallel; `progress` advances once per finished game.
pub fn run_benchmark<S: Scorer + Sync>(
    solver: &Solver<S>,
    targets: &[Word],
    progress: &ProgressBar,
) -> BenchmarkResult {
    let start = Instant::now();

    let outcomes: Vec<GameOutcome> = targets
        .par_iter()
        .map(|target| {
            let outcome = play_game(solver, target, MAX_GUESSES);
            progress.inc(1);
            outcome
        })
        .collect();

    progress.finish_with_message("Complete!");
    summarize(&outcomes, start.elapsed())
}

fn summarize(outcomes: &[GameOutcome], duration: Duration) -> BenchmarkResult {
    let solved: Vec<&GameOutcome> = outcomes.iter().filter(|o| o.solved).collect();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    for outcome in &solved {
        *distribution.entry(outcome.guesses.len()).or_insert(0) += 1;
    }

    let total_guesses: usize = solved.iter().map(|o| o.guesses.len()).sum();
    let average_guesses = if solved.is_empty() {
        0.0
    } else {
        total_guesses as f64 / solved.len() as f64
    };

    let mut hardest: Vec<(String, usize)> = solved
        .iter()
        .filter(|o| o.guesses.len() >= 5)
        .map(|o| (o.target.clone(), o.guesses.len()))
        .collect();
    hardest.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    hardest.truncate(10);

    let total_words = outcomes.len();
    let secs = duration.as_secs_f64();

    BenchmarkResult {
        total_words,
        solved: solved.len(),
        failed: total_words - solved.len(),
        average_guesses,
        min_guesses: solved.iter().map(|o| o.guesses.len()).min().unwrap_or(0),
        max_guesses: solved.iter().map(|o| o.guesses.len()).max().unwrap_or(0),
        distribution,
        hardest,
        duration,
        words_per_second: if secs > 0.0 {
            total_words as f64 / secs
        } else {
            0.0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::ScorerType;

    fn corpus() -> Corpus {
        Corpus::new([
            "about", "other", "audio", "cheap", "eerie", "geese", "abbey", "wheat", "sheet",
            "tweet", "speed", "crane",
        ])
    }

    #[test]
    fn game_finds_every_target() {
        let corpus = corpus();
        let solver = Solver::new(ScorerType::default(), &corpus);

        for target in corpus.words() {
            let outcome = play_game(&solver, target, 20);
            assert!(outcome.solved, "failed on {target}");
            assert_eq!(outcome.guesses.last().map(String::as_str), Some(target.text()));
        }
    }

    #[test]
    fn game_never_repeats_a_guess() {
        let corpus = corpus();
        let solver = Solver::new(ScorerType::default(), &corpus);
        let target = Word::new("sheet").unwrap();

        let outcome = play_game(&solver, &target, MAX_GUESSES);
        let mut seen = outcome.guesses.clone();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), outcome.guesses.len());
    }

    #[test]
    fn game_respects_guess_limit() {
        let corpus = corpus();
        let solver = Solver::new(ScorerType::default(), &corpus);
        let target = Word::new("tweet").unwrap();

        let outcome = play_game(&solver, &target, 1);
        assert_eq!(outcome.guesses.len(), 1);
    }

    #[test]
    fn benchmark_distribution_sums_to_solved() {
        let corpus = corpus();
        let solver = Solver::new(ScorerType::default(), &corpus);

        let result = run_benchmark(&solver, corpus.words(), &ProgressBar::hidden());
        assert_eq!(result.total_words, corpus.len());
        assert_eq!(result.solved + result.failed, result.total_words);
        assert_eq!(result.distribution.values().sum::<usize>(), result.solved);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= MAX_GUESSES);
        assert!(result.average_guesses >= 1.0);
    }

    #[test]
    fn benchmark_empty_target_list() {
        let corpus = corpus();
        let solver = Solver::new(ScorerType::default(), &corpus);

        let result = run_benchmark(&solver, &[], &ProgressBar::hidden());
        assert_eq!(result.total_words, 0);
        assert_eq!(result.solved, 0);
        assert!(result.distribution.is_empty());
        assert!(result.hardest.is_empty());
    }

    #[test]
    fn sampling_is_seeded() {
        let corpus = corpus();
        let a = sample_targets(&corpus, 5, 42);
        let b = sample_targets(&corpus, 5, 42);
        assert_eq!(a, b);
        assert_eq!(a.len(), 5);

        // Asking for more than the corpus holds yields the whole corpus
        assert_eq!(sample_targets(&corpus, 100, 7).len(), corpus.len());
    }
}
