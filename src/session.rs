//! Caller-side round state
//!
//! A `Session` records each guess with its per-letter marks and rebuilds the
//! full constraint set on demand. The solver itself stays stateless; every
//! round is solved from scratch with all constraints so far.
//!
//! Translation rules:
//! - green: letter fixed at that position
//! - yellow: letter required somewhere, and ruled out of that position
//! - gray: letter forbidden everywhere, unless the same letter is green or
//!   yellow somewhere in the session, in which case it is only ruled out of
//!   that position
//!
//! Letter multiplicity is not tracked: two yellow marks for one letter
//! require that letter once.

use crate::core::{ConstraintError, ConstraintSet, Feedback, Mark, Word, letter_bit};
use crate::solver::{Ranked, Scorer, Solver};

/// One guess and the marks it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub guess: Word,
    pub feedback: Feedback,
}

/// Where the session is in the guess loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    AwaitingGuess,
    ConstraintsRecorded,
    Solved { remaining: usize },
}

/// Accumulated guesses for one puzzle
#[derive(Debug, Clone, Default)]
pub struct Session {
    rounds: Vec<Round>,
    phase: Phase,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Record a guess and its marks
    pub fn record(&mut self, guess: Word, feedback: Feedback) {
        self.rounds.push(Round { guess, feedback });
        self.phase = Phase::ConstraintsRecorded;
    }

    /// Remove the last round
    pub fn undo(&mut self) -> Option<Round> {
        let round = self.rounds.pop();
        self.phase = if self.rounds.is_empty() {
            Phase::AwaitingGuess
        } else {
            Phase::ConstraintsRecorded
        };
        round
    }

    /// Start over
    pub fn reset(&mut self) {
        self.rounds.clear();
        self.phase = Phase::AwaitingGuess;
    }

    /// True once the last guess was all green or at most one candidate is left
    #[must_use]
    pub fn is_finished(&self) -> bool {
        let solved = self.rounds.last().is_some_and(|r| r.feedback.is_solved());
        solved || matches!(self.phase, Phase::Solved { remaining } if remaining <= 1)
    }

    /// Build the constraint set implied by every round so far
    ///
    /// # Errors
    /// Returns `ConstraintError::PositionConflict` if two rounds mark
    /// different letters green at the same position.
    pub fn constraints(&self) -> Result<ConstraintSet, ConstraintError> {
        let mut constraints = ConstraintSet::new();
        let mut known = 0u32;
        let mut grays = Vec::new();

        for round in &self.rounds {
            for (position, (&letter, &mark)) in round
                .guess
                .chars()
                .iter()
                .zip(round.feedback.marks())
                .enumerate()
            {
                let ch = char::from(letter);
                match mark {
                    Mark::Correct => {
                        constraints.fix(position, ch)?;
                        known |= letter_bit(letter);
                    }
                    Mark::Present => {
                        constraints.require(ch)?;
                        constraints.exclude_at(position, ch)?;
                        known |= letter_bit(letter);
                    }
                    Mark::Absent => grays.push((position, letter)),
                }
            }
        }

        for (position, letter) in grays {
            let ch = char::from(letter);
            if known & letter_bit(letter) == 0 {
                constraints.forbid(ch)?;
            } else {
                constraints.exclude_at(position, ch)?;
            }
        }

        Ok(constraints)
    }

    /// Solve the current round
    ///
    /// # Errors
    /// See [`constraints`](Self::constraints).
    pub fn solve<'a, S: Scorer>(
        &mut self,
        solver: &Solver<'a, S>,
    ) -> Result<Ranked<'a>, ConstraintError> {
        let ranked = solver.solve(&self.constraints()?);
        self.phase = Phase::Solved {
            remaining: ranked.len(),
        };
        Ok(ranked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;
    use crate::solver::ScorerType;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn marks(s: &str) -> Feedback {
        Feedback::parse(s).unwrap()
    }

    fn texts<'a>(ranked: &Ranked<'a>) -> Vec<&'a str> {
        ranked.iter().map(|c| c.word.text()).collect()
    }

    #[test]
    fn empty_session_is_unconstrained() {
        let session = Session::new();
        assert!(session.constraints().unwrap().is_empty());
        assert_eq!(session.phase(), Phase::AwaitingGuess);
    }

    #[test]
    fn green_yellow_gray_translate() {
        let mut session = Session::new();
        session.record(word("other"), marks("Y--G-"));

        let constraints = session.constraints().unwrap();
        assert_eq!(constraints.position(3), Some('e'));
        assert_eq!(constraints.present_letters(), vec!['o']);
        assert_eq!(constraints.misplaced_at(0), vec!['o']);
        assert_eq!(constraints.absent_letters(), vec!['h', 'r', 't']);
        assert!(!constraints.is_contradictory());
    }

    #[test]
    fn yellow_rules_out_its_position() {
        let mut session = Session::new();
        session.record(word("other"), marks("Y----"));
        let constraints = session.constraints().unwrap();

        assert!(!constraints.admits(&word("oasis")));
        assert!(constraints.admits(&word("audio")));
    }

    #[test]
    fn duplicate_gray_does_not_contradict_green() {
        // SPEED with the first E green and the second E gray
        let mut session = Session::new();
        session.record(word("speed"), marks("--G--"));
        let constraints = session.constraints().unwrap();

        assert!(!constraints.is_contradictory());
        assert!(!constraints.absent_letters().contains(&'e'));
        assert_eq!(constraints.misplaced_at(3), vec!['e']);
        assert!(constraints.admits(&word("wheat")));
        assert!(!constraints.admits(&word("tweet")));
        assert!(!constraints.admits(&word("sheet")));
    }

    #[test]
    fn gray_in_earlier_round_is_relaxed_by_later_yellow() {
        let mut session = Session::new();
        session.record(word("abbey"), marks("-----"));
        session.record(word("crane"), marks("--Y--"));
        let constraints = session.constraints().unwrap();

        assert!(!constraints.absent_letters().contains(&'a'));
        assert_eq!(constraints.misplaced_at(0), vec!['a']);
        assert_eq!(constraints.misplaced_at(2), vec!['a']);
    }

    #[test]
    fn multiplicity_is_not_tracked() {
        // Both E in EERIE marked yellow still only require one E
        let mut session = Session::new();
        session.record(word("eerie"), marks("YY---"));
        let constraints = session.constraints().unwrap();

        assert_eq!(constraints.present_letters(), vec!['e']);
        assert!(constraints.admits(&word("cheap")));
    }

    #[test]
    fn conflicting_greens_are_reported() {
        let mut session = Session::new();
        session.record(word("about"), marks("G----"));
        session.record(word("other"), marks("G----"));

        assert!(matches!(
            session.constraints(),
            Err(ConstraintError::PositionConflict { position: 0, .. })
        ));
    }

    #[test]
    fn phases_follow_the_loop() {
        let corpus = Corpus::new(["about", "other", "amply"]);
        let solver = Solver::new(ScorerType::default(), &corpus);
        let mut session = Session::new();
        assert_eq!(session.phase(), Phase::AwaitingGuess);

        session.record(word("about"), marks("G----"));
        assert_eq!(session.phase(), Phase::ConstraintsRecorded);

        let ranked = session.solve(&solver).unwrap();
        assert_eq!(texts(&ranked), vec!["amply"]);
        assert_eq!(session.phase(), Phase::Solved { remaining: 1 });
        assert!(session.is_finished());

        session.undo();
        assert_eq!(session.phase(), Phase::AwaitingGuess);
        assert!(!session.is_finished());
    }

    #[test]
    fn all_green_finishes() {
        let mut session = Session::new();
        session.record(word("audio"), Feedback::SOLVED);
        assert!(session.is_finished());

        session.reset();
        assert!(session.is_empty());
        assert_eq!(session.phase(), Phase::AwaitingGuess);
    }
}
