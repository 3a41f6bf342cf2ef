//! Accumulated letter constraints and the admissibility test
//!
//! A `ConstraintSet` holds what is known about the target word:
//! - fixed letters per position (green)
//! - letters that must appear somewhere (yellow)
//! - letters that must not appear at all (gray)
//! - letters ruled out of specific positions (yellow, with the slot it was seen in)
//!
//! Letter sets are stored as 26-bit masks, bit 0 = 'a'.

use super::word::{WORD_LENGTH, Word, letter_bit};
use std::fmt;
use thiserror::Error;

/// Characters accepted as "unconstrained" in a pattern string
pub const WILDCARDS: [char; 4] = ['.', '?', '_', '*'];

/// Malformed constraint input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintError {
    #[error("pattern must be exactly {} characters, got {0}", WORD_LENGTH)]
    PatternLength(usize),
    #[error("pattern has invalid character {character:?} at position {position}")]
    PatternCharacter { position: usize, character: char },
    #[error("letter list contains non-alphabetic entry {0:?}")]
    InvalidLetter(char),
    #[error("position {0} is outside 0..{}", WORD_LENGTH)]
    PositionOutOfRange(usize),
    #[error("position {position} is already fixed to '{existing}', cannot also be '{requested}'")]
    PositionConflict {
        position: usize,
        existing: char,
        requested: char,
    },
}

/// Constraints accumulated over one or more guesses
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ConstraintSet {
    positions: [Option<u8>; WORD_LENGTH],
    present: u32,
    absent: u32,
    misplaced: [u32; WORD_LENGTH],
}

/// Validate and lowercase a single letter
fn normalize_letter(letter: char) -> Result<u8, ConstraintError> {
    let lower = letter.to_ascii_lowercase();
    if lower.is_ascii_lowercase() {
        Ok(lower as u8)
    } else {
        Err(ConstraintError::InvalidLetter(letter))
    }
}

fn check_position(position: usize) -> Result<(), ConstraintError> {
    if position < WORD_LENGTH {
        Ok(())
    } else {
        Err(ConstraintError::PositionOutOfRange(position))
    }
}

fn mask_letters(mask: u32) -> Vec<char> {
    (b'a'..=b'z')
        .filter(|&c| mask & letter_bit(c) != 0)
        .map(char::from)
        .collect()
}

impl ConstraintSet {
    /// An empty constraint set, admitting every word
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a constraint set from a pattern plus present/absent letter collections
    ///
    /// The pattern has one character per position: a letter fixes that
    /// position, any of [`WILDCARDS`] leaves it open. A single leading `^` and
    /// trailing `$` are ignored, so regex-style patterns such as `^a..le$`
    /// are accepted. Letters are case-insensitive.
    ///
    /// Nothing is evaluated if any part of the input is malformed.
    ///
    /// # Errors
    /// Returns `ConstraintError` if the pattern is not [`WORD_LENGTH`]
    /// characters long, contains anything other than letters and wildcards,
    /// or either letter collection contains a non-alphabetic entry.
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::{ConstraintSet, Word};
    ///
    /// let constraints = ConstraintSet::parse("a....", "o".chars(), "t".chars()).unwrap();
    /// assert!(constraints.admits(&Word::new("audio").unwrap()));
    /// assert!(!constraints.admits(&Word::new("about").unwrap()));
    ///
    /// assert!(ConstraintSet::parse("a...", [], []).is_err());
    /// ```
    pub fn parse<P, A>(pattern: &str, present: P, absent: A) -> Result<Self, ConstraintError>
    where
        P: IntoIterator<Item = char>,
        A: IntoIterator<Item = char>,
    {
        let body = pattern.strip_prefix('^').unwrap_or(pattern);
        let body = body.strip_suffix('$').unwrap_or(body);

        let length = body.chars().count();
        if length != WORD_LENGTH {
            return Err(ConstraintError::PatternLength(length));
        }

        let mut constraints = Self::new();

        for (position, character) in body.chars().enumerate() {
            if WILDCARDS.contains(&character) {
                continue;
            }
            let letter = normalize_letter(character)
                .map_err(|_| ConstraintError::PatternCharacter {
                    position,
                    character,
                })?;
            constraints.positions[position] = Some(letter);
        }

        for letter in present {
            constraints.present |= letter_bit(normalize_letter(letter)?);
        }

        for letter in absent {
            constraints.absent |= letter_bit(normalize_letter(letter)?);
        }

        Ok(constraints)
    }

    /// Require `letter` at `position`
    ///
    /// Fixing a position to the letter it already holds is a no-op.
    ///
    /// # Errors
    /// Fails on an invalid letter, a position out of range, or a position
    /// already fixed to a different letter.
    pub fn fix(&mut self, position: usize, letter: char) -> Result<(), ConstraintError> {
        check_position(position)?;
        let letter = normalize_letter(letter)?;

        match self.positions[position] {
            Some(existing) if existing != letter => Err(ConstraintError::PositionConflict {
                position,
                existing: char::from(existing),
                requested: char::from(letter),
            }),
            _ => {
                self.positions[position] = Some(letter);
                Ok(())
            }
        }
    }

    /// Require `letter` somewhere in the word
    ///
    /// # Errors
    /// Fails if `letter` is not alphabetic.
    pub fn require(&mut self, letter: char) -> Result<(), ConstraintError> {
        self.present |= letter_bit(normalize_letter(letter)?);
        Ok(())
    }

    /// Forbid `letter` anywhere in the word
    ///
    /// # Errors
    /// Fails if `letter` is not alphabetic.
    pub fn forbid(&mut self, letter: char) -> Result<(), ConstraintError> {
        self.absent |= letter_bit(normalize_letter(letter)?);
        Ok(())
    }

    /// Forbid `letter` at `position` only
    ///
    /// # Errors
    /// Fails on an invalid letter or a position out of range.
    pub fn exclude_at(&mut self, position: usize, letter: char) -> Result<(), ConstraintError> {
        check_position(position)?;
        self.misplaced[position] |= letter_bit(normalize_letter(letter)?);
        Ok(())
    }

    /// Builder form of [`fix`](Self::fix)
    ///
    /// # Errors
    /// See [`fix`](Self::fix).
    pub fn with_position(mut self, position: usize, letter: char) -> Result<Self, ConstraintError> {
        self.fix(position, letter)?;
        Ok(self)
    }

    /// Builder form of [`require`](Self::require)
    ///
    /// # Errors
    /// See [`require`](Self::require).
    pub fn with_present(mut self, letter: char) -> Result<Self, ConstraintError> {
        self.require(letter)?;
        Ok(self)
    }

    /// Builder form of [`forbid`](Self::forbid)
    ///
    /// # Errors
    /// See [`forbid`](Self::forbid).
    pub fn with_absent(mut self, letter: char) -> Result<Self, ConstraintError> {
        self.forbid(letter)?;
        Ok(self)
    }

    /// Builder form of [`exclude_at`](Self::exclude_at)
    ///
    /// # Errors
    /// See [`exclude_at`](Self::exclude_at).
    pub fn with_misplaced(mut self, position: usize, letter: char) -> Result<Self, ConstraintError> {
        self.exclude_at(position, letter)?;
        Ok(self)
    }

    /// Check whether `word` is consistent with every constraint
    ///
    /// Pure and order-independent.
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        let mask = word.letter_mask();

        if mask & self.present != self.present || mask & self.absent != 0 {
            return false;
        }

        word.chars()
            .iter()
            .zip(&self.positions)
            .zip(&self.misplaced)
            .all(|((&ch, &fixed), &banned)| {
                fixed.is_none_or(|letter| letter == ch) && banned & letter_bit(ch) == 0
            })
    }

    /// Mask of every letter known to be in the word (green or yellow)
    fn known_mask(&self) -> u32 {
        self.positions
            .iter()
            .flatten()
            .fold(self.present, |mask, &ch| mask | letter_bit(ch))
    }

    /// Letters that are both required and forbidden
    ///
    /// Includes a letter fixed at a position it is also excluded from.
    #[must_use]
    pub fn contradictions(&self) -> Vec<char> {
        let mut mask = self.known_mask() & self.absent;

        for (fixed, &banned) in self.positions.iter().zip(&self.misplaced) {
            if let Some(letter) = fixed {
                mask |= letter_bit(*letter) & banned;
            }
        }

        mask_letters(mask)
    }

    /// True if no word can satisfy these constraints
    #[must_use]
    pub fn is_contradictory(&self) -> bool {
        !self.contradictions().is_empty()
    }

    /// True if nothing is constrained
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// The fixed letter at `position`, if any
    #[must_use]
    pub fn position(&self, position: usize) -> Option<char> {
        self.positions.get(position).copied().flatten().map(char::from)
    }

    /// Letters required somewhere in the word, alphabetically
    #[must_use]
    pub fn present_letters(&self) -> Vec<char> {
        mask_letters(self.present)
    }

    /// Letters forbidden everywhere, alphabetically
    #[must_use]
    pub fn absent_letters(&self) -> Vec<char> {
        mask_letters(self.absent)
    }

    /// Letters excluded from `position`, alphabetically
    #[must_use]
    pub fn misplaced_at(&self, position: usize) -> Vec<char> {
        self.misplaced
            .get(position)
            .map_or_else(Vec::new, |&mask| mask_letters(mask))
    }

    /// The positional part as a pattern string, `.` for open slots
    #[must_use]
    pub fn pattern(&self) -> String {
        self.positions
            .iter()
            .map(|fixed| fixed.map_or('.', char::from))
            .collect()
    }
}

impl fmt::Display for ConstraintSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pattern())?;

        let present: String = self.present_letters().into_iter().collect();
        if !present.is_empty() {
            write!(f, " +{present}")?;
        }

        let absent: String = self.absent_letters().into_iter().collect();
        if !absent.is_empty() {
            write!(f, " -{absent}")?;
        }

        Ok(())
    }
}
