//! Precomputed feedback for every (guess, target) pair

use super::{FeedbackLookup, Universe};
use crate::core::FeedbackCode;
use indicatif::ProgressBar;
use rayon::prelude::*;
use std::time::Instant;

/// Row-major N×N table of feedback codes
///
/// Row `g` holds the codes of guess `g` against every target. Read-only once
/// built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackMatrix {
    size: usize,
    codes: Vec<u16>,
}

impl FeedbackMatrix {
    /// Compute the full table for `universe`
    ///
    /// Rows are filled in parallel; each row belongs to exactly one worker.
    ///
    /// # Examples
    /// ```
    /// use nerdle_solver::universe::{FeedbackLookup, FeedbackMatrix, Universe};
    ///
    /// let universe = Universe::generate(5).unwrap();
    /// let matrix = FeedbackMatrix::build(&universe);
    /// assert_eq!(matrix.size(), universe.len());
    /// assert!(matrix.code(3, 3).is_perfect(5));
    /// ```
    #[must_use]
    pub fn build(universe: &Universe) -> Self {
        Self::build_with_progress(universe, &ProgressBar::hidden())
    }

    /// Compute the full table, advancing `progress` once per finished row
    #[must_use]
    pub fn build_with_progress(universe: &Universe, progress: &ProgressBar) -> Self {
        let size = universe.len();
        let start = Instant::now();
        let mut codes = vec![0u16; size * size];

        if size > 0 {
            let equations = universe.equations();
            codes
                .par_chunks_mut(size)
                .enumerate()
                .for_each(|(guess, row)| {
                    let guess_symbols = equations[guess].symbols();
                    for (slot, target) in row.iter_mut().zip(equations) {
                        *slot = FeedbackCode::between(guess_symbols, target.symbols()).value();
                    }
                    progress.inc(1);
                });
        }

        tracing::info!(
            size,
            entries = codes.len(),
            elapsed_ms = start.elapsed().as_millis(),
            "built feedback matrix"
        );

        Self { size, codes }
    }

    /// Wrap codes loaded from storage
    ///
    /// Returns `None` unless `codes` holds exactly `size * size` entries.
    #[must_use]
    pub fn from_codes(size: usize, codes: Vec<u16>) -> Option<Self> {
        (size.checked_mul(size) == Some(codes.len())).then_some(Self { size, codes })
    }

    /// Number of equations on each side
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Code of `guess` against `target`, or `None` when out of range
    #[inline]
    #[must_use]
    pub fn get(&self, guess: usize, target: usize) -> Option<FeedbackCode> {
        if guess >= self.size || target >= self.size {
            return None;
        }
        Some(FeedbackCode::new(self.codes[guess * self.size + target]))
    }

    /// All codes of `guess`, indexed by target
    ///
    /// # Panics
    /// Panics if `guess >= self.size()`
    #[inline]
    #[must_use]
    pub fn row(&self, guess: usize) -> &[u16] {
        &self.codes[guess * self.size..(guess + 1) * self.size]
    }

    /// Raw row-major codes
    #[must_use]
    pub fn codes(&self) -> &[u16] {
        &self.codes
    }
}

impl FeedbackLookup for FeedbackMatrix {
    #[inline]
    fn code(&self, guess: usize, target: usize) -> FeedbackCode {
        FeedbackCode::new(self.codes[guess * self.size + target])
    }
}
