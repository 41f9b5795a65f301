//! One game against a hidden equation
//!
//! A session owns the candidate set and the history of rounds, and borrows
//! the universe and feedback lookup shared by every game.

use super::entropy::{GuessMetrics, calculate_metrics};
use super::pruner::prune;
use super::{CandidateSet, Strategy};
use crate::core::{Equation, FeedbackCode};
use crate::error::SolverError;
use crate::universe::{FeedbackLookup, Universe};

/// One guess and the feedback it received
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    /// Universe index of the guess
    pub guess: usize,
    pub code: FeedbackCode,
    /// Candidates before the feedback was applied
    pub before: usize,
    /// Candidates after the feedback was applied
    pub after: usize,
}

/// A recommended guess with its metrics against the current candidates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Suggestion {
    pub guess: usize,
    pub metrics: GuessMetrics,
}

/// Coordinates one game using a given strategy
pub struct Session<'a, S: Strategy> {
    strategy: S,
    universe: &'a Universe,
    lookup: &'a dyn FeedbackLookup,
    candidates: CandidateSet,
    rounds: Vec<Round>,
    previous: Vec<CandidateSet>,
    solved: bool,
}

impl<'a, S: Strategy> Session<'a, S> {
    /// Start a game with every equation of `universe` as a candidate
    ///
    /// # Parameters
    /// - `strategy`: The guess selection strategy to use
    /// - `universe`: All equations of the puzzle's length
    /// - `lookup`: Feedback codes between universe indices (matrix or universe)
    #[must_use]
    pub fn new(strategy: S, universe: &'a Universe, lookup: &'a dyn FeedbackLookup) -> Self {
        Self {
            strategy,
            universe,
            lookup,
            candidates: CandidateSet::full(universe.len()),
            rounds: Vec::new(),
            previous: Vec::new(),
            solved: false,
        }
    }

    /// Universe index of the recommended next guess
    ///
    /// # Errors
    /// Returns `SolverError::NoCandidates` if the candidate set is empty.
    pub fn next_guess(&self) -> Result<usize, SolverError> {
        self.strategy
            .select_guess(self.universe, &self.candidates)
            .ok_or(SolverError::NoCandidates)
    }

    /// Recommended next guess together with its entropy metrics
    ///
    /// # Errors
    /// Returns `SolverError::NoCandidates` if the candidate set is empty.
    pub fn suggest(&self) -> Result<Suggestion, SolverError> {
        let guess = self.next_guess()?;
        Ok(Suggestion {
            guess,
            metrics: calculate_metrics(self.lookup, guess, &self.candidates),
        })
    }

    /// Apply the feedback `code` observed for `guess`
    ///
    /// # Errors
    /// Returns the pruning error; the session is unchanged on error.
    pub fn record(&mut self, guess: &str, code: FeedbackCode) -> Result<Round, SolverError> {
        let mut candidates = self.candidates.clone();
        let report = prune(self.lookup, self.universe, &mut candidates, guess, code)?;

        let round = Round {
            guess: report.guess,
            code,
            before: report.before,
            after: report.after,
        };

        self.previous
            .push(std::mem::replace(&mut self.candidates, candidates));
        self.rounds.push(round);
        self.solved = code.is_perfect(self.universe.length());

        Ok(round)
    }

    /// Apply a `G`/`P`/`B` hint string observed for `guess`
    ///
    /// # Errors
    /// Returns `SolverError::Feedback` for a malformed hint, before anything
    /// is changed, or any error of [`Session::record`].
    pub fn record_hint(&mut self, guess: &str, hint: &str) -> Result<Round, SolverError> {
        let code = FeedbackCode::parse(hint, self.universe.length())?;
        self.record(guess, code)
    }

    /// Revert the most recent round
    ///
    /// Returns the round removed, or `None` if nothing has been recorded.
    pub fn undo(&mut self) -> Option<Round> {
        let candidates = self.previous.pop()?;
        self.candidates = candidates;
        self.solved = false;
        self.rounds.pop()
    }

    /// Start over with every equation as a candidate
    pub fn reset(&mut self) {
        self.candidates = CandidateSet::full(self.universe.len());
        self.rounds.clear();
        self.previous.clear();
        self.solved = false;
    }

    /// Whether the all-green code has been observed
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    /// The hidden equation, once it is the only candidate left
    #[must_use]
    pub fn answer(&self) -> Option<&'a Equation> {
        self.candidates.sole().map(|index| self.universe.equation(index))
    }

    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Number of remaining candidates
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    #[must_use]
    pub const fn universe(&self) -> &'a Universe {
        self.universe
    }

    /// The equation at universe `index`
    ///
    /// # Panics
    /// Panics if `index` is outside the universe
    #[must_use]
    pub fn equation(&self, index: usize) -> &'a Equation {
        self.universe.equation(index)
    }

    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }
}
