//! Narrowing the candidate set with observed feedback

use super::CandidateSet;
use crate::core::FeedbackCode;
use crate::error::SolverError;
use crate::universe::{FeedbackLookup, Universe};

/// Outcome of a successful prune
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PruneReport {
    /// Universe index of the guess
    pub guess: usize,
    pub code: FeedbackCode,
    /// Candidates before pruning
    pub before: usize,
    /// Candidates after pruning
    pub after: usize,
}

impl PruneReport {
    /// Number of candidates eliminated
    #[inline]
    #[must_use]
    pub const fn eliminated(&self) -> usize {
        self.before - self.after
    }
}

/// Keep only the candidates that would have produced `code` for `guess`
///
/// # Errors
/// - `SolverError::UnknownGuess` if `guess` is not in the universe
/// - `SolverError::CodeOutOfRange` if `code` is not a code for this length
/// - `SolverError::Exhausted` if no candidate would remain
///
/// On error `candidates` is left untouched.
///
/// # Examples
/// ```
/// use nerdle_solver::core::FeedbackCode;
/// use nerdle_solver::solver::{CandidateSet, prune};
/// use nerdle_solver::universe::Universe;
///
/// let universe = Universe::generate(5).unwrap();
/// let mut candidates = CandidateSet::full(universe.len());
/// let perfect = FeedbackCode::perfect(5);
///
/// let report = prune(&universe, &universe, &mut candidates, "1+2=3", perfect).unwrap();
/// assert_eq!(report.after, 1);
/// ```
pub fn prune<L>(
    lookup: &L,
    universe: &Universe,
    candidates: &mut CandidateSet,
    guess: &str,
    code: FeedbackCode,
) -> Result<PruneReport, SolverError>
where
    L: FeedbackLookup + ?Sized,
{
    let guess = universe
        .index_of(guess)
        .ok_or_else(|| SolverError::UnknownGuess(guess.to_string()))?;

    prune_index(lookup, universe, candidates, guess, code)
}

/// As [`prune`], with the guess given by universe index
///
/// # Errors
/// As [`prune`]; an index outside the universe is `UnknownGuess`.
pub fn prune_index<L>(
    lookup: &L,
    universe: &Universe,
    candidates: &mut CandidateSet,
    guess: usize,
    code: FeedbackCode,
) -> Result<PruneReport, SolverError>
where
    L: FeedbackLookup + ?Sized,
{
    let length = universe.length();
    let Some(equation) = universe.get(guess) else {
        return Err(SolverError::UnknownGuess(guess.to_string()));
    };
    if !code.fits(length) {
        return Err(SolverError::CodeOutOfRange {
            code: code.value(),
            length,
        });
    }

    let before = candidates.len();
    let remaining = candidates.filtered(|target| lookup.code(guess, target) == code);

    if remaining.is_empty() {
        return Err(SolverError::Exhausted {
            guess: equation.text().to_string(),
            hint: code.to_hint(length),
        });
    }

    let after = remaining.len();
    *candidates = remaining;

    tracing::debug!(
        guess = %equation,
        hint = %code.to_hint(length),
        before,
        after,
        "pruned candidates"
    );

    Ok(PruneReport {
        guess,
        code,
        before,
        after,
    })
}
