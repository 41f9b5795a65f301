//! Per-position symbol statistics over the candidate set
//!
//! Treats every position as an independent yes/no question ("is symbol `s`
//! at position `p`?") and scores a guess by the sum of the binary entropies
//! of its questions. Cheaper than the exact entropy and needs no matrix.

use crate::core::{ALPHABET, Equation, symbol_index};
use crate::solver::CandidateSet;
use crate::universe::Universe;

/// How often each symbol occurs at each position among the candidates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionalDistribution {
    counts: Vec<[usize; ALPHABET.len()]>,
    total: usize,
}

impl PositionalDistribution {
    /// Count symbols per position over `candidates`
    #[must_use]
    pub fn from_candidates(universe: &Universe, candidates: &CandidateSet) -> Self {
        let mut counts = vec![[0usize; ALPHABET.len()]; universe.length()];

        for index in candidates.iter() {
            for (position, &symbol) in universe.equation(index).symbols().iter().enumerate() {
                if let Some(slot) = symbol_index(symbol) {
                    counts[position][slot] += 1;
                }
            }
        }

        Self {
            counts,
            total: candidates.len(),
        }
    }

    /// Number of equations counted
    #[inline]
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Counts at every position, each row in `ALPHABET` order
    #[must_use]
    pub fn positions(&self) -> &[[usize; ALPHABET.len()]] {
        &self.counts
    }

    /// Occurrences of `symbol` at `position`
    #[must_use]
    pub fn count(&self, position: usize, symbol: u8) -> usize {
        match (self.counts.get(position), symbol_index(symbol)) {
            (Some(row), Some(slot)) => row[slot],
            _ => 0,
        }
    }

    /// Sum over positions of the binary entropy of the guess's symbol there
    ///
    /// # Examples
    /// ```
    /// use nerdle_solver::core::Equation;
    /// use nerdle_solver::solver::CandidateSet;
    /// use nerdle_solver::solver::positional::PositionalDistribution;
    /// use nerdle_solver::universe::Universe;
    ///
    /// let universe = Universe::from_texts(5, ["1+2=3", "2+1=3"]).unwrap();
    /// let distribution =
    ///     PositionalDistribution::from_candidates(&universe, &CandidateSet::full(2));
    ///
    /// // Positions 0 and 2 split the candidates evenly, the rest are certain
    /// let score = distribution.score(&Equation::new("1+2=3").unwrap());
    /// assert!((score - 2.0).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn score(&self, equation: &Equation) -> f64 {
        if self.total == 0 {
            return 0.0;
        }

        let total = self.total as f64;
        equation
            .symbols()
            .iter()
            .enumerate()
            .map(|(position, &symbol)| binary_entropy(self.count(position, symbol) as f64 / total))
            .sum()
    }
}

/// Entropy in bits of a yes/no outcome with probability `p`
///
/// Zero-probability terms contribute nothing, so `binary_entropy(0.0)` and
/// `binary_entropy(1.0)` are both zero.
#[must_use]
pub fn binary_entropy(p: f64) -> f64 {
    [p, 1.0 - p]
        .into_iter()
        .filter(|&q| q > 0.0)
        .map(|q| -q * q.log2())
        .sum()
}
