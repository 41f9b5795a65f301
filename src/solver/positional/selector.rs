//! Approximate guess selection by positional entropy

use super::calculator::PositionalDistribution;
use crate::solver::CandidateSet;
use crate::universe::Universe;
use rayon::prelude::*;

/// Select the candidate with the highest positional score
///
/// Only candidates are considered. The first strictly greater score in
/// ascending index order wins. Returns the universe index and its score, or
/// `None` if no candidates remain.
#[must_use]
pub fn select_best_guess(universe: &Universe, candidates: &CandidateSet) -> Option<(usize, f64)> {
    if let Some(only) = candidates.sole() {
        return Some((only, 0.0));
    }

    let distribution = PositionalDistribution::from_candidates(universe, candidates);
    let scores: Vec<f64> = candidates
        .indices()
        .par_iter()
        .map(|&index| distribution.score(universe.equation(index)))
        .collect();

    candidates
        .iter()
        .zip(scores)
        .fold(None, |best: Option<(usize, f64)>, (index, score)| match best {
            Some((_, top)) if score <= top => best,
            _ => Some((index, score)),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_a_candidate() {
        let universe = Universe::generate(5).unwrap();
        let candidates = CandidateSet::full(universe.len()).filtered(|i| i % 4 == 1);

        let (best, score) = select_best_guess(&universe, &candidates).unwrap();
        assert!(candidates.contains(best));
        assert!(score > 0.0);
    }

    #[test]
    fn best_score_is_maximal() {
        let universe = Universe::generate(6).unwrap();
        let candidates = CandidateSet::full(universe.len());
        let distribution = PositionalDistribution::from_candidates(&universe, &candidates);

        let (best, score) = select_best_guess(&universe, &candidates).unwrap();
        for index in candidates.iter() {
            assert!(distribution.score(universe.equation(index)) <= score);
        }
        // First maximum wins
        let first = candidates
            .iter()
            .find(|&i| distribution.score(universe.equation(i)) >= score)
            .unwrap();
        assert_eq!(best, first);
    }

    #[test]
    fn single_and_empty() {
        let universe = Universe::generate(5).unwrap();
        assert_eq!(
            select_best_guess(&universe, &CandidateSet::from_indices(universe.len(), [4])),
            Some((4, 0.0))
        );
        assert_eq!(
            select_best_guess(&universe, &CandidateSet::from_indices(universe.len(), [])),
            None
        );
    }

    #[test]
    fn mirrored_candidates_tie_on_first() {
        let universe = Universe::from_texts(5, ["1+2=3", "2+1=3"]).unwrap();
        let candidates = CandidateSet::full(2);

        assert_eq!(select_best_guess(&universe, &candidates).map(|(i, _)| i), Some(0));
    }
}
