//! Candidate scoring strategies
//!
//! Defines the Scorer trait and concrete implementations. Scores only order
//! candidates; their absolute values carry no meaning.

use crate::corpus::Corpus;

/// Bonus per distinct letter added to a frequency weight
///
/// A word has 1..=5 distinct letters, so two words' bonuses differ by at most
/// `4 * DIVERSITY_BONUS`. Weights further apart than that are never reordered.
pub const DIVERSITY_BONUS: f64 = 0.01;

/// A strategy for scoring admissible words
pub trait Scorer {
    /// Score every word in `pool`
    ///
    /// `pool` holds corpus indices of the admissible words, in corpus order.
    /// Returns one score per entry, aligned with `pool`.
    fn score(&self, corpus: &Corpus, pool: &[usize]) -> Vec<f64>;
}

/// Enum wrapper for all scorer types
///
/// Allows runtime selection of the scorer while maintaining static dispatch.
#[derive(Debug, Clone, Copy)]
pub enum ScorerType {
    /// Corpus frequency plus a letter-diversity bonus (default)
    Frequency(FrequencyScorer),
    /// Letter coverage over the admissible pool
    Coverage(CoverageScorer),
}

impl Default for ScorerType {
    fn default() -> Self {
        Self::Frequency(FrequencyScorer::default())
    }
}

impl Scorer for ScorerType {
    fn score(&self, corpus: &Corpus, pool: &[usize]) -> Vec<f64> {
        match self {
            Self::Frequency(s) => s.score(corpus, pool),
            Self::Coverage(s) => s.score(corpus, pool),
        }
    }
}

impl ScorerType {
    /// Create a scorer from a name
    ///
    /// Supported names: "frequency", "coverage"
    /// Defaults to frequency if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "coverage" | "letters" => Self::Coverage(CoverageScorer),
            _ => Self::default(),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency",
            Self::Coverage(_) => "coverage",
        }
    }
}

/// Frequency weight plus a small bonus per distinct letter
///
/// Without weights in the corpus the score is the distinct-letter count.
#[derive(Debug, Clone, Copy)]
pub struct FrequencyScorer {
    pub bonus: f64,
}

impl FrequencyScorer {
    #[must_use]
    pub const fn new(bonus: f64) -> Self {
        Self { bonus }
    }
}

impl Default for FrequencyScorer {
    fn default() -> Self {
        Self::new(DIVERSITY_BONUS)
    }
}

impl Scorer for FrequencyScorer {
    fn score(&self, corpus: &Corpus, pool: &[usize]) -> Vec<f64> {
        let words = corpus.words();

        pool.iter()
            .map(|&i| {
                let distinct = f64::from(words[i].distinct_letters());
                match corpus.weight(i) {
                    Some(weight) => self.bonus.mul_add(distinct, weight),
                    None => distinct,
                }
            })
            .collect()
    }
}

/// Sum of pool-wide letter counts over each word's distinct letters
///
/// Letters are counted across every admissible word (repeats included); a
/// word scores the counts of its distinct letters, so words covering the most
/// common remaining letters rank first.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoverageScorer;

impl Scorer for CoverageScorer {
    fn score(&self, corpus: &Corpus, pool: &[usize]) -> Vec<f64> {
        let words = corpus.words();

        let mut counts = [0u32; 26];
        for &i in pool {
            for &ch in words[i].chars() {
                counts[usize::from(ch - b'a')] += 1;
            }
        }

        pool.iter()
            .map(|&i| {
                words[i]
                    .unique_letters()
                    .map(|ch| f64::from(counts[usize::from(ch - b'a')]))
                    .sum()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all(corpus: &Corpus) -> Vec<usize> {
        (0..corpus.len()).collect()
    }

    #[test]
    fn frequency_without_weights_counts_distinct_letters() {
        // about(5) eerie(3) other(5)
        let corpus = Corpus::new(["about", "eerie", "other"]);
        let scores = FrequencyScorer::default().score(&corpus, &all(&corpus));
        assert_eq!(scores, vec![5.0, 3.0, 5.0]);
    }

    #[test]
    fn frequency_with_weights_adds_bonus() {
        let corpus = Corpus::with_weights([("about", 10.0), ("eerie", 10.0)]);
        let scores = FrequencyScorer::default().score(&corpus, &all(&corpus));
        assert!((scores[0] - 10.05).abs() < 1e-9);
        assert!((scores[1] - 10.03).abs() < 1e-9);
    }

    #[test]
    fn bonus_never_outweighs_larger_frequency_gap() {
        // eerie has the fewest distinct letters but a weight gap above 4 * bonus
        let gap = 4.0 * DIVERSITY_BONUS + 1e-6;
        let corpus = Corpus::with_weights([("about", 1.0), ("eerie", 1.0 + gap)]);
        let scores = FrequencyScorer::default().score(&corpus, &all(&corpus));
        assert!(scores[1] > scores[0]);
    }

    #[test]
    fn frequency_scores_only_pool() {
        let corpus = Corpus::new(["about", "eerie", "other"]);
        let scores = FrequencyScorer::default().score(&corpus, &[1]);
        assert_eq!(scores, vec![3.0]);
    }

    #[test]
    fn coverage_uses_pool_letter_counts() {
        // Pool letters: a b o u t / o t h e r
        // o=2 t=2, all others 1
        let corpus = Corpus::new(["about", "other"]);
        let scores = CoverageScorer.score(&corpus, &all(&corpus));
        // about: a1 b1 o2 u1 t2 = 7; other: o2 t2 h1 e1 r1 = 7
        assert_eq!(scores, vec![7.0, 7.0]);
    }

    #[test]
    fn coverage_counts_repeats_once_per_word_score() {
        let corpus = Corpus::new(["eerie", "other"]);
        let scores = CoverageScorer.score(&corpus, &all(&corpus));
        // counts: e=4 r=2 i=1 o=1 t=1 h=1
        // eerie: e4 + r2 + i1 = 7; other: o1 t1 h1 e4 r2 = 9
        assert_eq!(scores, vec![7.0, 9.0]);
    }

    #[test]
    fn scorer_type_from_name() {
        assert_eq!(ScorerType::from_name("coverage").name(), "coverage");
        assert_eq!(ScorerType::from_name("frequency").name(), "frequency");
        assert_eq!(ScorerType::from_name("unknown").name(), "frequency");
    }
}
