//! Word lookup command

use crate::core::Word;
use crate::corpus::Corpus;

/// Result of looking a word up in the corpus
pub struct CheckResult {
    pub input: String,
    /// Why the input is not a valid word, if it is not
    pub invalid: Option<String>,
    pub in_corpus: bool,
    pub weight: Option<f64>,
}

/// Check whether `input` is a valid word and present in the corpus
#[must_use]
pub fn check_word(corpus: &Corpus, input: &str) -> CheckResult {
    match Word::new(input) {
        Ok(word) => CheckResult {
            input: word.text().to_string(),
            invalid: None,
            in_corpus: corpus.contains(word.text()),
            weight: corpus.weight_of(word.text()),
        },
        Err(e) => CheckResult {
            input: input.to_string(),
            invalid: Some(e.to_string()),
            in_corpus: false,
            weight: None,
        },
    }
}
