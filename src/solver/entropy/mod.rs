//! Entropy-based guess selection
//!
//! Implements Shannon entropy over feedback code distributions. This is the
//! exact selection mode, backed by the feedback matrix.

mod calculator;
mod selector;

pub use calculator::{
    GuessMetrics, calculate_entropy, calculate_metrics, entropy_term, shannon_entropy,
};
pub use selector::{select_best_guess, universe_entropies};
