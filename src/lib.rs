//! Wordle Sieve
//!
//! Filters a five-letter word list by green, yellow and gray constraints and
//! ranks the survivors.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_sieve::core::ConstraintSet;
//! use wordle_sieve::corpus::Corpus;
//! use wordle_sieve::solver::solve;
//!
//! let corpus = Corpus::new(["about", "other", "audio"]);
//!
//! // Starts with A, contains O, no T
//! let constraints = ConstraintSet::parse("a....", ['o'], ['t']).unwrap();
//!
//! let best = solve(&corpus, &constraints);
//! assert_eq!(best[0].word.text(), "audio");
//! ```

// Core domain types
pub mod core;

// Word lists and where they come from
pub mod corpus;

// Filtering and ranking
pub mod solver;

// Round-by-round guess state
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
