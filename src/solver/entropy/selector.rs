//! Exact entropy-based guess selection
//!
//! Every equation of the universe is scored against the current candidates;
//! the one with the highest Shannon entropy is played.

use super::calculator::entropy_term;
use crate::core::code_space;
use crate::solver::CandidateSet;
use crate::universe::{FeedbackLookup, Universe};
use rayon::prelude::*;

/// Select best guess by maximizing entropy over the whole universe
///
/// Returns the universe index of the best guess and its entropy, or `None`
/// if no candidates remain. With a single candidate that candidate is
/// returned with zero entropy.
///
/// Entropies are computed in parallel, the maximum is then chosen by an
/// ascending scan: on an exact tie a candidate replaces a non-candidate,
/// otherwise the first maximum wins.
///
/// # Examples
/// ```
/// use nerdle_solver::solver::CandidateSet;
/// use nerdle_solver::solver::entropy::select_best_guess;
/// use nerdle_solver::universe::Universe;
///
/// let universe = Universe::generate(5).unwrap();
/// let candidates = CandidateSet::full(universe.len());
///
/// let (best, entropy) = select_best_guess(&universe, &universe, &candidates).unwrap();
/// assert!(best < universe.len());
/// assert!(entropy > 0.0);
/// ```
#[must_use]
pub fn select_best_guess<L>(
    lookup: &L,
    universe: &Universe,
    candidates: &CandidateSet,
) -> Option<(usize, f64)>
where
    L: FeedbackLookup + ?Sized,
{
    if candidates.is_empty() {
        return None;
    }
    if let Some(only) = candidates.sole() {
        return Some((only, 0.0));
    }

    let entropies = universe_entropies(lookup, universe, candidates);
    pick_maximum(&entropies, candidates)
}

/// Entropy of every universe index against `candidates`, in index order
///
/// Each worker reuses one bucket per possible feedback code.
#[must_use]
pub fn universe_entropies<L>(lookup: &L, universe: &Universe, candidates: &CandidateSet) -> Vec<f64>
where
    L: FeedbackLookup + ?Sized,
{
    let buckets = code_space(universe.length());
    let total = candidates.len();
    let members = candidates.indices();

    (0..universe.len())
        .into_par_iter()
        .map_init(
            || vec![0usize; buckets],
            |counts, guess| {
                for &target in members {
                    counts[usize::from(lookup.code(guess, target).value())] += 1;
                }

                // Read each touched bucket once, clearing it for the next guess
                let mut entropy = 0.0;
                for &target in members {
                    let slot = &mut counts[usize::from(lookup.code(guess, target).value())];
                    entropy += entropy_term(*slot, total);
                    *slot = 0;
                }
                entropy
            },
        )
        .collect()
}

// Allow: Ties are defined on the exact computed values
#[allow(clippy::float_cmp)]
fn pick_maximum(entropies: &[f64], candidates: &CandidateSet) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;

    for (index, &entropy) in entropies.iter().enumerate() {
        let better = match best {
            None => true,
            Some((current, score)) => {
                entropy > score
                    || (entropy == score
                        && candidates.contains(index)
                        && !candidates.contains(current))
            }
        };
        if better {
            best = Some((index, entropy));
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::entropy::calculate_entropy;
    use crate::universe::FeedbackMatrix;

    #[test]
    fn parallel_entropies_match_direct_calculation() {
        let universe = Universe::generate(5).unwrap();
        let candidates = CandidateSet::full(universe.len()).filtered(|i| i % 3 != 0);

        let entropies = universe_entropies(&universe, &universe, &candidates);
        for (guess, entropy) in entropies.into_iter().enumerate() {
            let direct = calculate_entropy(&universe, guess, &candidates);
            assert!((entropy - direct).abs() < 1e-9, "guess {guess}");
        }
    }

    #[test]
    fn selects_highest_entropy() {
        let universe = Universe::generate(5).unwrap();
        let candidates = CandidateSet::full(universe.len());

        let (best, entropy) = select_best_guess(&universe, &universe, &candidates).unwrap();
        let max = (0..universe.len())
            .map(|guess| calculate_entropy(&universe, guess, &candidates))
            .fold(0.0, f64::max);

        assert!((entropy - max).abs() < 1e-9);
        assert!((calculate_entropy(&universe, best, &candidates) - max).abs() < 1e-9);
    }

    #[test]
    fn matrix_and_encoder_agree() {
        let universe = Universe::generate(5).unwrap();
        let matrix = FeedbackMatrix::build(&universe);
        let candidates = CandidateSet::full(universe.len()).filtered(|i| i % 2 == 1);

        assert_eq!(
            select_best_guess(&matrix, &universe, &candidates),
            select_best_guess(&universe, &universe, &candidates)
        );
    }

    #[test]
    fn single_candidate_is_returned() {
        let universe = Universe::generate(5).unwrap();
        let candidates = CandidateSet::from_indices(universe.len(), [7]);

        assert_eq!(select_best_guess(&universe, &universe, &candidates), Some((7, 0.0)));
    }

    #[test]
    fn returns_none_without_candidates() {
        let universe = Universe::generate(5).unwrap();
        let candidates = CandidateSet::from_indices(universe.len(), []);

        assert_eq!(select_best_guess(&universe, &universe, &candidates), None);
    }

    #[test]
    fn ties_prefer_candidates() {
        let candidates = CandidateSet::from_indices(4, [2, 3]);

        // 0 and 2 tie; 2 is a candidate
        assert_eq!(pick_maximum(&[1.0, 0.5, 1.0, 1.0], &candidates), Some((2, 1.0)));
        // first maximum wins among non-candidates
        assert_eq!(pick_maximum(&[1.0, 1.0, 0.5, 0.5], &candidates), Some((0, 1.0)));
        // strictly greater always wins
        assert_eq!(pick_maximum(&[1.0, 1.5, 1.0, 1.0], &candidates), Some((1, 1.5)));
    }

    #[test]
    fn selection_is_deterministic() {
        let universe = Universe::generate(6).unwrap();
        let candidates = CandidateSet::full(universe.len()).filtered(|i| i % 5 == 0);

        let first = select_best_guess(&universe, &universe, &candidates);
        let second = select_best_guess(&universe, &universe, &candidates);
        assert_eq!(first, second);
    }
}
