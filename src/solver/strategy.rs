//! Guess selection strategies
//!
//! Defines the Strategy trait and its two implementations: exact entropy over
//! feedback codes, and the cheaper positional approximation.

use super::CandidateSet;
use crate::config::SelectionMode;
use crate::universe::{FeedbackLookup, Universe};

/// A strategy for selecting the next guess
pub trait Strategy {
    /// Select the best guess given the current candidates
    ///
    /// Returns a universe index, or `None` if no candidates remain.
    fn select_guess(&self, universe: &Universe, candidates: &CandidateSet) -> Option<usize>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Clone, Copy)]
pub enum StrategyType<'a> {
    /// Full entropy over every universe equation (default)
    Exact(ExactStrategy<'a>),
    /// Positional binary entropy over candidates only
    Approximate(ApproximateStrategy),
}

impl Strategy for StrategyType<'_> {
    fn select_guess(&self, universe: &Universe, candidates: &CandidateSet) -> Option<usize> {
        match self {
            Self::Exact(s) => s.select_guess(universe, candidates),
            Self::Approximate(s) => s.select_guess(universe, candidates),
        }
    }
}

impl<'a> StrategyType<'a> {
    /// Create the strategy configured by `mode`
    ///
    /// `lookup` is only consulted by the exact strategy.
    #[must_use]
    pub fn from_mode(mode: SelectionMode, lookup: &'a dyn FeedbackLookup) -> Self {
        match mode {
            SelectionMode::Exact => Self::Exact(ExactStrategy::new(lookup)),
            SelectionMode::Approximate => Self::Approximate(ApproximateStrategy),
        }
    }

    #[must_use]
    pub const fn mode(&self) -> SelectionMode {
        match self {
            Self::Exact(_) => SelectionMode::Exact,
            Self::Approximate(_) => SelectionMode::Approximate,
        }
    }
}

/// Pure entropy maximization strategy
///
/// Scores every universe equation, so a non-candidate may be played when it
/// splits the candidates better.
#[derive(Clone, Copy)]
pub struct ExactStrategy<'a> {
    lookup: &'a dyn FeedbackLookup,
}

impl<'a> ExactStrategy<'a> {
    #[must_use]
    pub const fn new(lookup: &'a dyn FeedbackLookup) -> Self {
        Self { lookup }
    }
}

impl Strategy for ExactStrategy<'_> {
    fn select_guess(&self, universe: &Universe, candidates: &CandidateSet) -> Option<usize> {
        super::entropy::select_best_guess(self.lookup, universe, candidates).map(|(best, _)| best)
    }
}

/// Positional entropy strategy
///
/// Only ever plays a candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproximateStrategy;

impl Strategy for ApproximateStrategy {
    fn select_guess(&self, universe: &Universe, candidates: &CandidateSet) -> Option<usize> {
        super::positional::select_best_guess(universe, candidates).map(|(best, _)| best)
    }
}
