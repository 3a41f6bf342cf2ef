//! Core domain types
//!
//! Words, constraint sets and feedback marks. Everything here is pure: no I/O,
//! no logging, no shared state.

mod constraints;
mod feedback;
mod word;

pub use constraints::{ConstraintError, ConstraintSet, WILDCARDS};
pub use feedback::{Feedback, Mark};
pub use word::{WORD_LENGTH, Word, WordError, letter_bit};
