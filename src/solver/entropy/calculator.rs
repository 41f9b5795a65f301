//! Shannon entropy of feedback distributions
//!
//! Given a guess and the candidate set, computes the expected information
//! gain of playing that guess.

use crate::core::FeedbackCode;
use crate::solver::CandidateSet;
use crate::universe::FeedbackLookup;
use rustc_hash::FxHashMap;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Calculate Shannon entropy for a guess against the candidates
///
/// Returns the expected information gain in bits.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of observing feedback code x.
///
/// # Examples
/// ```
/// use nerdle_solver::solver::CandidateSet;
/// use nerdle_solver::solver::entropy::calculate_entropy;
/// use nerdle_solver::universe::Universe;
///
/// let universe = Universe::from_texts(5, ["1+2=3", "2+1=3"]).unwrap();
/// let candidates = CandidateSet::full(universe.len());
///
/// let entropy = calculate_entropy(&universe, 0, &candidates);
/// assert!((entropy - 1.0).abs() < 1e-9); // two equally likely codes
/// ```
#[must_use]
pub fn calculate_entropy<L>(lookup: &L, guess: usize, candidates: &CandidateSet) -> f64
where
    L: FeedbackLookup + ?Sized,
{
    if candidates.is_empty() {
        return 0.0;
    }

    shannon_entropy(&group_by_code(lookup, guess, candidates))
}

/// Group candidates by the code they produce with the guess
fn group_by_code<L>(
    lookup: &L,
    guess: usize,
    candidates: &CandidateSet,
) -> FxHashMap<FeedbackCode, usize>
where
    L: FeedbackLookup + ?Sized,
{
    let mut counts = FxHashMap::default();

    for target in candidates.iter() {
        *counts.entry(lookup.code(guess, target)).or_insert(0) += 1;
    }

    counts
}

/// Contribution `-p·log₂(p)` of one outcome seen `count` times out of `total`
///
/// Empty outcomes contribute nothing.
#[inline]
#[must_use]
pub fn entropy_term(count: usize, total: usize) -> f64 {
    if count == 0 || total == 0 {
        return 0.0;
    }
    let p = count as f64 / total as f64;
    -p * p.log2()
}

/// Calculate Shannon entropy from a code distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for certain outcome (one code with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n codes
///
/// # Examples
/// ```
/// use nerdle_solver::core::FeedbackCode;
/// use nerdle_solver::solver::entropy::shannon_entropy;
/// use rustc_hash::FxHashMap;
///
/// let mut uniform = FxHashMap::default();
/// uniform.insert(FeedbackCode::new(0), 25);
/// uniform.insert(FeedbackCode::new(1), 25);
/// uniform.insert(FeedbackCode::new(2), 25);
/// uniform.insert(FeedbackCode::new(3), 25);
///
/// let entropy = shannon_entropy(&uniform);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy<S>(code_counts: &std::collections::HashMap<FeedbackCode, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = code_counts.values().sum::<usize>();

    code_counts
        .values()
        .map(|&count| entropy_term(count, total))
        .sum()
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining candidates, and max partition size.
#[must_use]
pub fn calculate_metrics<L>(lookup: &L, guess: usize, candidates: &CandidateSet) -> GuessMetrics
where
    L: FeedbackLookup + ?Sized,
{
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let groups = group_by_code(lookup, guess, candidates);
    let total = candidates.len() as f64;

    let entropy = shannon_entropy(&groups);

    // Σ p·|partition|
    let expected_remaining = groups
        .values()
        .map(|&count| count as f64 * count as f64 / total)
        .sum();

    let max_partition = groups.values().copied().max().unwrap_or(0);

    GuessMetrics {
        entropy,
        expected_remaining,
        max_partition,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::universe::Universe;

    #[test]
    fn shannon_entropy_uniform_distribution() {
        // 4 codes, each appears once = log2(4) = 2 bits
        let mut counts = FxHashMap::default();
        counts.insert(FeedbackCode::new(0), 1);
        counts.insert(FeedbackCode::new(1), 1);
        counts.insert(FeedbackCode::new(2), 1);
        counts.insert(FeedbackCode::new(3), 1);

        let entropy = shannon_entropy(&counts);
        assert!((entropy - 2.0).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_certain_outcome() {
        let mut counts = FxHashMap::default();
        counts.insert(FeedbackCode::new(0), 10);

        let entropy = shannon_entropy(&counts);
        assert!(entropy.abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_skewed_distribution() {
        let mut uniform = FxHashMap::default();
        let mut skewed = FxHashMap::default();
        for (code, (u, s)) in [(25, 97), (25, 1), (25, 1), (25, 1)].into_iter().enumerate() {
            uniform.insert(FeedbackCode::new(code as u16), u);
            skewed.insert(FeedbackCode::new(code as u16), s);
        }

        assert!(shannon_entropy(&uniform) > shannon_entropy(&skewed));
    }

    #[test]
    fn shannon_entropy_empty() {
        let counts: FxHashMap<FeedbackCode, usize> = FxHashMap::default();
        assert!(shannon_entropy(&counts).abs() < f64::EPSILON);
    }

    #[test]
    fn entropy_term_ignores_empty_outcomes() {
        assert!(entropy_term(0, 10).abs() < f64::EPSILON);
        assert!(entropy_term(10, 10).abs() < f64::EPSILON);
        assert!((entropy_term(1, 2) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn entropy_bounded_by_candidate_count() {
        let universe = Universe::generate(5).unwrap();
        let candidates = CandidateSet::full(universe.len());

        for guess in 0..universe.len() {
            let entropy = calculate_entropy(&universe, guess, &candidates);
            assert!(entropy >= 0.0);
            assert!(entropy <= (candidates.len() as f64).log2() + 1e-9);
        }
    }

    #[test]
    fn metrics_of_a_perfect_split() {
        // Each candidate answers 1+2=3 with a different code
        let universe = Universe::from_texts(5, ["1+2=3", "2+1=3", "2*3=6"]).unwrap();
        let candidates = CandidateSet::full(universe.len());

        let metrics = calculate_metrics(&universe, 0, &candidates);
        assert!((metrics.entropy - 3f64.log2()).abs() < 1e-9);
        assert!((metrics.expected_remaining - 1.0).abs() < 1e-9);
        assert_eq!(metrics.max_partition, 1);
    }

    #[test]
    fn metrics_empty_candidates() {
        let universe = Universe::from_texts(5, ["1+2=3"]).unwrap();
        let candidates = CandidateSet::from_indices(1, []);

        let metrics = calculate_metrics(&universe, 0, &candidates);
        assert_eq!(metrics.max_partition, 0);
        assert!(metrics.entropy.abs() < f64::EPSILON);
    }

    #[test]
    fn grouping_counts_every_candidate() {
        let universe = Universe::generate(5).unwrap();
        let candidates = CandidateSet::full(universe.len());

        let groups = group_by_code(&universe, 0, &candidates);
        assert_eq!(groups.values().sum::<usize>(), universe.len());
        assert_eq!(groups.get(&FeedbackCode::perfect(5)), Some(&1));
    }
}
