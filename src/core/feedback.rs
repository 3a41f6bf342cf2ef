//! Per-letter feedback marks
//!
//! Each letter of a guess is marked one of:
//! - Absent (gray): letter not in the word
//! - Present (yellow): letter in the word, wrong position
//! - Correct (green): letter in the correct position
//!
//! The engine never sees marks directly; a [`Session`](crate::session::Session)
//! turns accumulated marks into a [`ConstraintSet`](super::ConstraintSet).

use super::word::{WORD_LENGTH, Word};
use rustc_hash::FxHashMap;
use std::fmt;

/// Status of one letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Absent,
    Present,
    Correct,
}

impl Mark {
    /// Next mark in the gray -> yellow -> green -> gray cycle
    #[must_use]
    pub const fn cycle(self) -> Self {
        match self {
            Self::Absent => Self::Present,
            Self::Present => Self::Correct,
            Self::Correct => Self::Absent,
        }
    }

    /// Emoji square for this mark
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }

    /// Parse one feedback character
    ///
    /// Accepts G/g/🟩 for green, Y/y/🟨 for yellow and -/_/./⬜ for gray.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Marks for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback([Mark; WORD_LENGTH]);

impl Feedback {
    /// All greens
    pub const SOLVED: Self = Self([Mark::Correct; WORD_LENGTH]);

    #[must_use]
    pub const fn new(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub const fn mark(&self, position: usize) -> Mark {
        self.0[position]
    }

    /// Replace the mark at `position`
    ///
    /// # Panics
    /// Panics if position >= [`WORD_LENGTH`]
    pub const fn set(&mut self, position: usize, mark: Mark) {
        self.0[position] = mark;
    }

    /// Cycle the mark at `position` to the next state
    ///
    /// # Panics
    /// Panics if position >= [`WORD_LENGTH`]
    pub const fn cycle(&mut self, position: usize) {
        self.0[position] = self.0[position].cycle();
    }

    /// Check if every letter is green
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Compute the marks Wordle would show for `guess` against `answer`
    ///
    /// Greens are assigned first and consume their letter; yellows are then
    /// handed out left to right from what remains, so a repeated guess letter
    /// is only yellow as many times as the answer has spare copies.
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// assert_eq!(Feedback::calculate(&guess, &answer).to_emoji(), "⬜⬜🟩⬜🟩");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut available: FxHashMap<u8, u8> = FxHashMap::default();

        for (i, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
            if g == a {
                marks[i] = Mark::Correct;
            } else {
                *available.entry(a).or_insert(0) += 1;
            }
        }

        for (i, &g) in guess.chars().iter().enumerate() {
            if marks[i] == Mark::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&g)
                && *count > 0
            {
                marks[i] = Mark::Present;
                *count -= 1;
            }
        }

        Self(marks)
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::Feedback;
    ///
    /// let a = Feedback::parse("GY-GY").unwrap();
    /// let b = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(a, b);
    /// assert!(Feedback::parse("GYG").is_none());
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let marks = s
            .chars()
            .map(Mark::from_char)
            .collect::<Option<Vec<Mark>>>()?;
        let marks: [Mark; WORD_LENGTH] = marks.try_into().ok()?;
        Some(Self(marks))
    }

    /// Render as emoji squares
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}
