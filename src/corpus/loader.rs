//! Word list parsing
//!
//! Turns raw word-list text into a [`Corpus`]. One entry per line, with an
//! optional whitespace-separated weight in the second column. Blank lines and
//! `#` comments are skipped, as is anything that is not a valid word.

use super::Corpus;
use crate::core::Word;

/// A weight is usable if it is a finite, non-negative number
pub(crate) fn valid_weight(weight: f64) -> Option<f64> {
    (weight.is_finite() && weight >= 0.0).then_some(weight)
}

/// Parse one line into a word and its optional weight
///
/// Returns `None` for blank lines, comments, invalid words and weights that
/// are not finite non-negative numbers.
fn parse_line(line: &str) -> Option<(Word, Option<f64>)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let mut columns = line.split_whitespace();
    let word = Word::new(columns.next()?).ok()?;

    let weight = match columns.next() {
        None => None,
        Some(raw) => Some(valid_weight(raw.parse().ok()?)?),
    };

    Some((word, weight))
}

/// Parse word-list text into a corpus
///
/// # Examples
/// ```
/// use wordle_sieve::corpus::loader::parse_word_list;
///
/// let corpus = parse_word_list("Audio\nabout 12\n# comment\ntoolong\naudio\n");
/// assert_eq!(corpus.len(), 2);
/// assert!(corpus.contains("audio"));
/// assert_eq!(corpus.weight_of("about"), Some(12.0));
/// ```
#[must_use]
pub fn parse_word_list(content: &str) -> Corpus {
    Corpus::from_entries(content.lines().filter_map(parse_line))
}
