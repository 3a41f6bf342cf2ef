//! Command implementations

pub mod benchmark;
pub mod check;
pub mod simple;
pub mod solve;

pub use benchmark::{
    BenchmarkResult, GameOutcome, MAX_GUESSES, play_game, run_benchmark, sample_targets,
};
pub use check::{CheckResult, check_word};
pub use simple::{run_simple, run_simple_with};
pub use solve::{SolveReport, SolveRequest, letters, solve_pattern};
