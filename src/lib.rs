//! Nerdle Solver
//!
//! A Nerdle solver that enumerates every valid equation of a given length and
//! picks guesses by the information their feedback is expected to reveal.
//!
//! # Quick Start
//!
//! ```rust
//! use nerdle_solver::core::{Equation, FeedbackCode};
//!
//! let guess = Equation::new("13+59=72").unwrap();
//! let answer = Equation::new("100-1=99").unwrap();
//!
//! let code = FeedbackCode::calculate(&guess, &answer);
//! assert_eq!(code.to_hint(8), "GBBBPGBB");
//! ```

// Core domain types
pub mod core;

// Equation grammar, evaluation and enumeration
pub mod grammar;

// Candidate universe, feedback matrix and snapshots
pub mod universe;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub mod config;
pub mod error;
pub mod logging;

pub use error::SolverError;
