//! Candidate word representation
//!
//! A Word stores a fixed-length lowercase word together with a letter bitmask
//! so membership checks during filtering are a single AND.

use std::fmt;
use thiserror::Error;

/// Number of letters in every word handled by the engine
pub const WORD_LENGTH: usize = 5;

/// A fixed-length lowercase word
///
/// Stores the word as bytes and keeps a 26-bit mask of the letters it contains.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
    letters: u32,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly {} letters, got {0}", WORD_LENGTH)]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

/// Bit for a lowercase ASCII letter in a letter mask
#[inline]
#[must_use]
pub const fn letter_bit(letter: u8) -> u32 {
    1 << (letter - b'a')
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly [`WORD_LENGTH`]
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::Word;
    ///
    /// let word = Word::new("Audio").unwrap();
    /// assert_eq!(word.text(), "audio");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.bytes().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut chars = [0u8; WORD_LENGTH];
        chars.copy_from_slice(text.as_bytes());

        let letters = chars.iter().fold(0, |mask, &ch| mask | letter_bit(ch));

        Ok(Self {
            text,
            chars,
            letters,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position
    ///
    /// # Panics
    /// Panics if position >= [`WORD_LENGTH`]
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific lowercase letter
    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.letters & letter_bit(letter) != 0
    }

    /// Bitmask of the letters in this word (bit 0 = 'a')
    #[inline]
    #[must_use]
    pub const fn letter_mask(&self) -> u32 {
        self.letters
    }

    /// Number of distinct letters in the word
    #[inline]
    #[must_use]
    pub const fn distinct_letters(&self) -> u32 {
        self.letters.count_ones()
    }

    /// Iterate over the distinct letters of the word in alphabetical order
    pub fn unique_letters(&self) -> impl Iterator<Item = u8> + '_ {
        (b'a'..=b'z').filter(|&c| self.letters & letter_bit(c) != 0)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("audio").unwrap();
        assert_eq!(word.text(), "audio");
        assert_eq!(word.chars(), b"audio");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("ABOUT").unwrap();
        assert_eq!(word.text(), "about");

        let word2 = Word::new("AbOuT").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(
            Word::new("shrt"),
            Err(WordError::InvalidLength(4))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("crâne"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("other").unwrap();
        assert_eq!(word.char_at(0), b'o');
        assert_eq!(word.char_at(4), b'r');
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("about").unwrap();
        assert!(word.has_letter(b'a'));
        assert!(word.has_letter(b't'));
        assert!(!word.has_letter(b'z'));
        assert!(!word.has_letter(b'A'));
        assert!(!word.has_letter(b'.'));
    }

    #[test]
    fn word_distinct_letters() {
        assert_eq!(Word::new("audio").unwrap().distinct_letters(), 5);
        assert_eq!(Word::new("eerie").unwrap().distinct_letters(), 3);
        assert_eq!(Word::new("aaaaa").unwrap().distinct_letters(), 1);
    }

    #[test]
    fn word_unique_letters_sorted() {
        let word = Word::new("speed").unwrap();
        let letters: Vec<u8> = word.unique_letters().collect();
        assert_eq!(letters, b"deps".to_vec());
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "Other".parse().unwrap();
        assert_eq!(format!("{word}"), "other");
    }
}
