//! Candidate filtering and ranking
//!
//! This module turns a corpus and a constraint set into ranked suggestions.

mod engine;
pub mod scoring;

pub use engine::{Candidate, Ranked, Solver, admissible, solve, solve_from, solve_with};
pub use scoring::{CoverageScorer, DIVERSITY_BONUS, FrequencyScorer, Scorer, ScorerType};
