//! One-shot solve command
//!
//! Parses a pattern plus present/absent letters and returns the ranked
//! candidates.

use crate::core::{ConstraintError, ConstraintSet};
use crate::solver::{Scorer, Solver};

/// Input for a one-shot solve
pub struct SolveRequest {
    pub pattern: String,
    pub present: String,
    pub absent: String,
    /// Number of suggestions to keep
    pub limit: usize,
}

impl SolveRequest {
    #[must_use]
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            present: String::new(),
            absent: String::new(),
            limit: 20,
        }
    }
}

/// Result of a one-shot solve
pub struct SolveReport {
    pub constraints: ConstraintSet,
    pub corpus_size: usize,
    /// Number of admissible words
    pub total: usize,
    /// Best candidates, at most `limit`
    pub suggestions: Vec<(String, f64)>,
    pub contradictions: Vec<char>,
}

/// Letters from a command-line list such as "a,e" or "ae"
///
/// Commas and whitespace separate entries and are dropped; anything else is
/// kept so the constraint parser can reject it.
pub fn letters(list: &str) -> impl Iterator<Item = char> + '_ {
    list.chars().filter(|c| *c != ',' && !c.is_whitespace())
}

/// Solve for the given pattern and letter lists
///
/// # Errors
///
/// Returns `ConstraintError` if the pattern or a letter list is malformed.
pub fn solve_pattern<S: Scorer>(
    solver: &Solver<S>,
    request: &SolveRequest,
) -> Result<SolveReport, ConstraintError> {
    let constraints = ConstraintSet::parse(
        &request.pattern,
        letters(&request.present),
        letters(&request.absent),
    )?;

    let ranked = solver.solve(&constraints);

    Ok(SolveReport {
        corpus_size: solver.corpus().len(),
        total: ranked.len(),
        suggestions: ranked
            .iter()
            .take(request.limit)
            .map(|c| (c.word.text().to_string(), c.score))
            .collect(),
        contradictions: constraints.contradictions(),
        constraints,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;
    use crate::solver::ScorerType;

    fn corpus() -> Corpus {
        Corpus::new(["about", "other", "audio"])
    }

    fn request(pattern: &str, present: &str, absent: &str) -> SolveRequest {
        SolveRequest {
            present: present.to_string(),
            absent: absent.to_string(),
            ..SolveRequest::new(pattern)
        }
    }

    #[test]
    fn letters_splits_on_commas_and_spaces() {
        assert_eq!(letters("a, e,x").collect::<String>(), "aex");
        assert_eq!(letters("ae").collect::<String>(), "ae");
        assert_eq!(letters("").count(), 0);
    }

    #[test]
    fn solve_reports_suggestions() {
        let corpus = corpus();
        let solver = Solver::new(ScorerType::default(), &corpus);

        let report = solve_pattern(&solver, &request("^.....$", "o", "t")).unwrap();
        assert_eq!(report.corpus_size, 3);
        assert_eq!(report.total, 1);
        assert_eq!(report.suggestions[0].0, "audio");
        assert!(report.contradictions.is_empty());
    }

    #[test]
    fn solve_respects_limit() {
        let corpus = corpus();
        let solver = Solver::new(ScorerType::default(), &corpus);

        let mut req = request(".....", "", "");
        req.limit = 2;
        let report = solve_pattern(&solver, &req).unwrap();
        assert_eq!(report.total, 3);
        assert_eq!(report.suggestions.len(), 2);
    }

    #[test]
    fn solve_surfaces_contradictions() {
        let corpus = corpus();
        let solver = Solver::new(ScorerType::default(), &corpus);

        let report = solve_pattern(&solver, &request("a....", "", "a")).unwrap();
        assert_eq!(report.total, 0);
        assert_eq!(report.contradictions, vec!['a']);
    }

    #[test]
    fn solve_rejects_malformed_input() {
        let corpus = corpus();
        let solver = Solver::new(ScorerType::default(), &corpus);

        assert!(matches!(
            solve_pattern(&solver, &request("a..", "", "")),
            Err(ConstraintError::PatternLength(3))
        ));
        assert!(matches!(
            solve_pattern(&solver, &request(".....", "a1", "")),
            Err(ConstraintError::InvalidLetter('1'))
        ));
    }
}
