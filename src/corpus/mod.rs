//! Word corpus and its providers
//!
//! A [`Corpus`] is the deduplicated, lowercase, alphabetically ordered set of
//! candidate words, optionally weighted by frequency. It is built once and
//! then lent read-only to the solver.
//!
//! Corpora come from a [`CorpusSource`]: a local file ([`LocalSource`]) or a
//! downloaded list cached on disk ([`RemoteSource`]). [`CachedProvider`]
//! memoises whichever source is configured.

pub mod loader;
mod local;
mod remote;
mod source;

pub use local::LocalSource;
pub use remote::{DEFAULT_URL, RemoteSource};
pub use source::{
    CachedProvider, CorpusConfig, CorpusProvider, CorpusSource, SourceChoice, SourceKind,
};

use crate::core::{WORD_LENGTH, Word};
use std::fmt::Write as _;
use std::path::PathBuf;
use thiserror::Error;

/// The corpus could not be produced
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to download word list from {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("word list from {origin} has no valid {}-letter words", WORD_LENGTH)]
    Empty { origin: String },
    #[error("corpus source not configured: {0}")]
    NotConfigured(String),
}

/// Set of candidate words with optional frequency weights
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corpus {
    words: Vec<Word>,
    weights: Option<Vec<f64>>,
}

impl Corpus {
    /// Build an unweighted corpus, skipping invalid words
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::corpus::Corpus;
    ///
    /// let corpus = Corpus::new(["other", "About", "audio", "about", "xyz"]);
    /// let words: Vec<&str> = corpus.iter().map(|w| w.text()).collect();
    /// assert_eq!(words, ["about", "audio", "other"]);
    /// ```
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_entries(
            words
                .into_iter()
                .filter_map(|s| Word::new(s.as_ref()).ok())
                .map(|w| (w, None)),
        )
    }

    /// Build a weighted corpus, skipping invalid words
    ///
    /// Entries whose weight is negative, NaN or infinite are skipped too,
    /// the same as in a word-list file.
    pub fn with_weights<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        Self::from_entries(entries.into_iter().filter_map(|(s, weight)| {
            let weight = loader::valid_weight(weight)?;
            Word::new(s.as_ref()).ok().map(|w| (w, Some(weight)))
        }))
    }

    /// Build from already-validated entries
    ///
    /// Entries are sorted alphabetically; for duplicates the first
    /// occurrence wins. If any entry carries a weight the corpus is
    /// weighted, and unweighted entries get 0.
    pub(crate) fn from_entries(entries: impl IntoIterator<Item = (Word, Option<f64>)>) -> Self {
        let mut entries: Vec<(Word, Option<f64>)> = entries.into_iter().collect();
        entries.sort_by(|a, b| a.0.text().cmp(b.0.text()));
        entries.dedup_by(|later, earlier| later.0 == earlier.0);

        let weighted = entries.iter().any(|(_, weight)| weight.is_some());
        let weights =
            weighted.then(|| entries.iter().map(|(_, w)| w.unwrap_or(0.0)).collect());
        let words = entries.into_iter().map(|(word, _)| word).collect();

        Self { words, weights }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in corpus order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// True if the corpus carries frequency weights
    #[must_use]
    pub fn has_weights(&self) -> bool {
        self.weights.is_some()
    }

    /// Weight of the word at `index`, if the corpus is weighted
    #[must_use]
    pub fn weight(&self, index: usize) -> Option<f64> {
        self.weights.as_ref()?.get(index).copied()
    }

    /// Position of `text` in the corpus
    #[must_use]
    pub fn position(&self, text: &str) -> Option<usize> {
        let text = text.to_lowercase();
        self.words
            .binary_search_by(|w| w.text().cmp(text.as_str()))
            .ok()
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.position(text).is_some()
    }

    /// Look up a word by text
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        self.position(text).map(|i| &self.words[i])
    }

    /// Weight of the word `text`, if present and the corpus is weighted
    #[must_use]
    pub fn weight_of(&self, text: &str) -> Option<f64> {
        self.position(text).and_then(|i| self.weight(i))
    }

    /// Serialize back to the word-list format read by [`loader::parse_word_list`]
    #[must_use]
    pub fn to_word_list(&self) -> String {
        let mut out = String::with_capacity(self.words.len() * (WORD_LENGTH + 1));
        for (i, word) in self.words.iter().enumerate() {
            match self.weight(i) {
                Some(weight) => {
                    let _ = writeln!(out, "{word} {weight}");
                }
                None => {
                    let _ = writeln!(out, "{word}");
                }
            }
        }
        out
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corpus_sorted_and_deduplicated() {
        let corpus = Corpus::new(["other", "audio", "OTHER", "about"]);
        let texts: Vec<&str> = corpus.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["about", "audio", "other"]);
    }

    #[test]
    fn corpus_skips_invalid_words() {
        let corpus = Corpus::new(["about", "abc", "ab0ut", "toolong"]);
        assert_eq!(corpus.len(), 1);
    }

    #[test]
    fn unweighted_corpus_has_no_weights() {
        let corpus = Corpus::new(["about"]);
        assert!(!corpus.has_weights());
        assert_eq!(corpus.weight(0), None);
        assert_eq!(corpus.weight_of("about"), None);
    }

    #[test]
    fn weighted_corpus_keeps_first_duplicate() {
        let corpus = Corpus::with_weights([("about", 5.0), ("other", 2.0), ("About", 9.0)]);
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.weight_of("about"), Some(5.0));
        assert_eq!(corpus.weight_of("other"), Some(2.0));
    }

    #[test]
    fn weighted_corpus_skips_unusable_weights() {
        let corpus = Corpus::with_weights([
            ("about", f64::NAN),
            ("other", -1.0),
            ("audio", f64::INFINITY),
            ("above", 2.0),
        ]);
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.weight_of("above"), Some(2.0));
        assert_eq!(corpus.weight_of("about"), None);
    }

    #[test]
    fn mixed_weights_default_to_zero() {
        let corpus = Corpus::from_entries([
            (Word::new("about").unwrap(), Some(4.0)),
            (Word::new("other").unwrap(), None),
        ]);
        assert!(corpus.has_weights());
        assert_eq!(corpus.weight_of("other"), Some(0.0));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let corpus = Corpus::new(["about", "audio"]);
        assert!(corpus.contains("AUDIO"));
        assert_eq!(corpus.get("About").map(Word::text), Some("about"));
        assert!(!corpus.contains("other"));
    }

    #[test]
    fn word_list_round_trips() {
        let corpus = Corpus::with_weights([("about", 1.5), ("other", 3.0)]);
        let text = corpus.to_word_list();
        assert_eq!(text, "about 1.5\nother 3\n");
        assert_eq!(loader::parse_word_list(&text), corpus);

        let plain = Corpus::new(["audio"]);
        assert_eq!(plain.to_word_list(), "audio\n");
    }
}
