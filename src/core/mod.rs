//! Core domain types for Nerdle
//!
//! This module contains the fundamental domain types: equations and the
//! feedback produced when one equation is guessed against another.

pub mod equation;
mod feedback;

pub use equation::{
    ALPHABET, DEFAULT_LENGTH, Equation, EquationError, MAX_LENGTH, MIN_LENGTH, OPERATORS,
    is_operator, symbol_index,
};
pub use feedback::{Feedback, FeedbackCode, FeedbackError, code_space, compare};
