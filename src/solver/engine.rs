//! Filtering and ranking
//!
//! `solve` is a pure function of the corpus and the constraint set: it keeps
//! admissible words, scores them and sorts by descending score. Equal scores
//! keep corpus order.

use super::scoring::{Scorer, ScorerType};
use crate::core::{ConstraintSet, Word};
use crate::corpus::{Corpus, CorpusError, CorpusProvider};

/// A ranked candidate word
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<'a> {
    pub word: &'a Word,
    pub score: f64,
}

/// Candidates sorted best first
pub type Ranked<'a> = Vec<Candidate<'a>>;

/// Solver bound to a corpus and a scoring strategy
///
/// Holds no per-round state: every call takes the full constraint set.
#[derive(Debug, Clone, Copy)]
pub struct Solver<'a, S: Scorer> {
    scorer: S,
    corpus: &'a Corpus,
}

impl<'a, S: Scorer> Solver<'a, S> {
    pub const fn new(scorer: S, corpus: &'a Corpus) -> Self {
        Self { scorer, corpus }
    }

    #[must_use]
    pub const fn corpus(&self) -> &'a Corpus {
        self.corpus
    }

    #[must_use]
    pub const fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Ranked candidates consistent with `constraints`
    #[must_use]
    pub fn solve(&self, constraints: &ConstraintSet) -> Ranked<'a> {
        solve_with(self.corpus, constraints, &self.scorer)
    }

    /// Best candidate, or `None` if nothing is admissible
    #[must_use]
    pub fn best(&self, constraints: &ConstraintSet) -> Option<&'a Word> {
        self.solve(constraints).first().map(|c| c.word)
    }

    /// Number of admissible words
    #[must_use]
    pub fn count(&self, constraints: &ConstraintSet) -> usize {
        admissible(self.corpus, constraints).len()
    }
}

/// Corpus indices of the admissible words, in corpus order
///
/// Contradictory sets short-circuit to an empty pool.
#[must_use]
pub fn admissible(corpus: &Corpus, constraints: &ConstraintSet) -> Vec<usize> {
    if constraints.is_contradictory() {
        return Vec::new();
    }

    corpus
        .iter()
        .enumerate()
        .filter(|(_, word)| constraints.admits(word))
        .map(|(i, _)| i)
        .collect()
}

/// Filter and rank with a specific scorer
#[must_use]
pub fn solve_with<'a, S: Scorer + ?Sized>(
    corpus: &'a Corpus,
    constraints: &ConstraintSet,
    scorer: &S,
) -> Ranked<'a> {
    let pool = admissible(corpus, constraints);
    if pool.is_empty() {
        return Vec::new();
    }

    let scores = scorer.score(corpus, &pool);
    debug_assert_eq!(scores.len(), pool.len(), "scorer must score every word");

    let words = corpus.words();
    let mut ranked: Ranked<'a> = pool
        .iter()
        .zip(scores)
        .map(|(&i, score)| Candidate {
            word: &words[i],
            score,
        })
        .collect();

    // Stable: ties stay in corpus order
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

/// Filter and rank with the default scorer
///
/// # Examples
/// ```
/// use wordle_sieve::core::ConstraintSet;
/// use wordle_sieve::corpus::Corpus;
/// use wordle_sieve::solver::solve;
///
/// let corpus = Corpus::new(["about", "other", "audio"]);
/// let constraints = ConstraintSet::parse("a....", [], []).unwrap();
///
/// let ranked: Vec<&str> = solve(&corpus, &constraints)
///     .iter()
///     .map(|c| c.word.text())
///     .collect();
/// assert_eq!(ranked, ["about", "audio"]);
/// ```
#[must_use]
pub fn solve<'a>(corpus: &'a Corpus, constraints: &ConstraintSet) -> Ranked<'a> {
    solve_with(corpus, constraints, &ScorerType::default())
}

/// Solve against the provider's corpus
///
/// Used when the caller does not hold a corpus. Returns owned words, best
/// first.
///
/// # Errors
/// Propagates the provider's `CorpusError` unchanged.
pub fn solve_from<P: CorpusProvider + ?Sized>(
    provider: &P,
    constraints: &ConstraintSet,
) -> Result<Vec<Word>, CorpusError> {
    let corpus = provider.load_word_list()?;
    Ok(solve(&corpus, constraints)
        .into_iter()
        .map(|c| c.word.clone())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::scoring::CoverageScorer;
    use std::sync::Arc;

    fn sample() -> Corpus {
        Corpus::new(["about", "other", "audio"])
    }

    fn texts<'a>(ranked: &[Candidate<'a>]) -> Vec<&'a str> {
        ranked.iter().map(|c| c.word.text()).collect()
    }

    fn parse(pattern: &str, present: &str, absent: &str) -> ConstraintSet {
        ConstraintSet::parse(pattern, present.chars(), absent.chars()).unwrap()
    }

    #[test]
    fn empty_constraints_return_whole_corpus() {
        let corpus = sample();
        let ranked = solve(&corpus, &parse(".....", "", ""));
        assert_eq!(ranked.len(), corpus.len());
        // All have 5 distinct letters: corpus order is kept
        assert_eq!(texts(&ranked), vec!["about", "audio", "other"]);
    }

    #[test]
    fn position_constraint() {
        let corpus = sample();
        let ranked = solve(&corpus, &parse("a....", "", ""));
        assert_eq!(texts(&ranked), vec!["about", "audio"]);
    }

    #[test]
    fn presence_and_absence_combined() {
        let corpus = sample();
        let ranked = solve(&corpus, &parse(".....", "o", "t"));
        assert_eq!(texts(&ranked), vec!["audio"]);
    }

    #[test]
    fn total_contradiction_is_empty() {
        let corpus = sample();
        assert!(solve(&corpus, &parse("a....", "", "a")).is_empty());

        let other = Corpus::new(["aaaaa", "abbey", "zebra"]);
        assert!(solve(&other, &parse("a....", "", "a")).is_empty());
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let corpus = sample();
        assert!(solve(&corpus, &parse("zzzzz", "", "")).is_empty());
    }

    #[test]
    fn ranks_by_distinct_letters_without_weights() {
        let corpus = Corpus::new(["eerie", "other", "geese"]);
        let ranked = solve(&corpus, &ConstraintSet::new());
        // other(5) eerie(3) geese(3): ties keep corpus order (eerie < geese)
        assert_eq!(texts(&ranked), vec!["other", "eerie", "geese"]);
    }

    #[test]
    fn ranks_by_weight_when_available() {
        let corpus = Corpus::with_weights([("about", 1.0), ("other", 50.0), ("audio", 7.0)]);
        let ranked = solve(&corpus, &ConstraintSet::new());
        assert_eq!(texts(&ranked), vec!["other", "audio", "about"]);
    }

    #[test]
    fn bonus_breaks_weight_ties() {
        let corpus = Corpus::with_weights([("eerie", 3.0), ("other", 3.0)]);
        let ranked = solve(&corpus, &ConstraintSet::new());
        assert_eq!(texts(&ranked), vec!["other", "eerie"]);
    }

    #[test]
    fn solve_is_idempotent() {
        let corpus = Corpus::new(["about", "other", "audio", "eerie", "geese", "abbey"]);
        let constraints = parse(".....", "e", "");
        assert_eq!(solve(&corpus, &constraints), solve(&corpus, &constraints));
    }

    #[test]
    fn solver_with_coverage_scorer() {
        let corpus = Corpus::new(["eerie", "other"]);
        let solver = Solver::new(CoverageScorer, &corpus);
        let ranked = solver.solve(&ConstraintSet::new());
        assert_eq!(texts(&ranked), vec!["other", "eerie"]);
        assert_eq!(solver.count(&ConstraintSet::new()), 2);
    }

    #[test]
    fn solver_best_and_count() {
        let corpus = sample();
        let solver = Solver::new(ScorerType::default(), &corpus);
        let constraints = parse(".....", "o", "t");
        assert_eq!(solver.best(&constraints).map(Word::text), Some("audio"));
        assert_eq!(solver.count(&constraints), 1);
        assert_eq!(solver.best(&parse("a....", "", "a")), None);
    }

    #[test]
    fn admissible_returns_corpus_indices() {
        let corpus = sample();
        assert_eq!(admissible(&corpus, &parse("a....", "", "")), vec![0, 1]);
        assert!(admissible(&corpus, &parse(".....", "o", "o")).is_empty());
    }

    #[test]
    fn solve_from_provider() {
        let provider = Arc::new(sample());
        let words = solve_from(&provider, &parse("a....", "", "")).unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["about", "audio"]);
    }

    #[test]
    fn concurrent_solves_agree() {
        let corpus = sample();
        let constraints = parse(".....", "o", "");
        let expected = solve(&corpus, &constraints);

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| solve(&corpus, &constraints)))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
