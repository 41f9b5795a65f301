//! Symbol statistics command
//!
//! Counts how often each symbol appears at each position of the universe.

use crate::core::{ALPHABET, symbol_index};
use crate::solver::CandidateSet;
use crate::solver::positional::PositionalDistribution;
use crate::universe::Universe;

/// Symbol counts at one position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionStats {
    pub position: usize,
    /// Count per symbol, in `ALPHABET` order
    pub counts: [usize; ALPHABET.len()],
}

impl PositionStats {
    /// Count of `symbol` at this position
    #[must_use]
    pub fn count(&self, symbol: u8) -> usize {
        symbol_index(symbol).map_or(0, |index| self.counts[index])
    }

    /// Symbols that occur here, most frequent first
    #[must_use]
    pub fn ranked(&self) -> Vec<(char, usize)> {
        let mut ranked: Vec<(char, usize)> = ALPHABET
            .iter()
            .zip(self.counts)
            .filter(|&(_, count)| count > 0)
            .map(|(&symbol, count)| (char::from(symbol), count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

/// Per-position symbol frequencies over every equation of `universe`
#[must_use]
pub fn symbol_statistics(universe: &Universe) -> Vec<PositionStats> {
    let everything = CandidateSet::full(universe.len());

    PositionalDistribution::from_candidates(universe, &everything)
        .positions()
        .iter()
        .enumerate()
        .map(|(position, &counts)| PositionStats { position, counts })
        .collect()
}
