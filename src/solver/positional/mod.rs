//! Positional (approximate) guess selection
//!
//! Scores candidates from per-position symbol frequencies instead of full
//! feedback distributions. Works without a feedback matrix.

mod calculator;
mod selector;

pub use calculator::{PositionalDistribution, binary_entropy};
pub use selector::select_best_guess;
