//! Nerdle solving algorithms
//!
//! This module contains the candidate set, pruning, the guess selection
//! strategies and the session that ties them together.

mod candidates;
pub mod entropy;
pub mod positional;
mod pruner;
mod session;
pub mod strategy;

pub use candidates::CandidateSet;
pub use pruner::{PruneReport, prune, prune_index};
pub use session::{Round, Session, Suggestion};
pub use strategy::{ApproximateStrategy, ExactStrategy, Strategy, StrategyType};
