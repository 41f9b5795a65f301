//! Equation analysis command
//!
//! Measures how much information one opening guess reveals.

use crate::error::SolverError;
use crate::solver::CandidateSet;
use crate::solver::entropy::calculate_metrics;
use crate::universe::{FeedbackLookup, Universe};

/// Result of analyzing an equation
pub struct AnalysisResult {
    pub equation: String,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub worst_case: usize,
    pub total_candidates: usize,
}

/// Analyze `text` as a first guess against the whole universe
///
/// # Errors
///
/// Returns `SolverError::UnknownGuess` if `text` is not an equation of the
/// universe.
pub fn analyze_equation(
    text: &str,
    universe: &Universe,
    lookup: &dyn FeedbackLookup,
) -> Result<AnalysisResult, SolverError> {
    let guess = universe
        .index_of(text)
        .ok_or_else(|| SolverError::UnknownGuess(text.to_string()))?;

    let candidates = CandidateSet::full(universe.len());
    let metrics = calculate_metrics(lookup, guess, &candidates);

    Ok(AnalysisResult {
        equation: text.to_string(),
        entropy: metrics.entropy,
        expected_reduction: metrics.entropy.exp2(),
        expected_remaining: metrics.expected_remaining,
        worst_case: metrics.max_partition,
        total_candidates: candidates.len(),
    })
}
