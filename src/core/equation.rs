//! Nerdle equation representation
//!
//! An Equation is a fixed-length sequence of symbols from `0-9 + - * / =` that
//! satisfies the grammar and is a true arithmetic identity.

use crate::grammar::{self, GrammarViolation};
use std::fmt;
use thiserror::Error;

/// Shortest length that can hold an equation ("1=1")
pub const MIN_LENGTH: usize = 3;

/// Longest supported length; `3^10 - 1` still fits a `u16` feedback code
pub const MAX_LENGTH: usize = 10;

/// Length of the classic puzzle
pub const DEFAULT_LENGTH: usize = 8;

/// Every symbol an equation may contain, in generation order
pub const ALPHABET: [u8; 15] = *b"0123456789=+-*/";

/// Operators in generation order (`=` closes the left-hand side)
pub const OPERATORS: [u8; 5] = *b"=+-*/";

/// Position of `symbol` within [`ALPHABET`]
#[inline]
#[must_use]
pub const fn symbol_index(symbol: u8) -> Option<usize> {
    match symbol {
        b'0'..=b'9' => Some((symbol - b'0') as usize),
        b'=' => Some(10),
        b'+' => Some(11),
        b'-' => Some(12),
        b'*' => Some(13),
        b'/' => Some(14),
        _ => None,
    }
}

#[inline]
#[must_use]
pub const fn is_operator(symbol: u8) -> bool {
    matches!(symbol, b'=' | b'+' | b'-' | b'*' | b'/')
}

/// A valid puzzle equation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Equation {
    text: String,
}

/// Error type for rejected equations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EquationError {
    #[error(
        "Equation must be {min}-{max} symbols long, got {0}",
        min = MIN_LENGTH,
        max = MAX_LENGTH
    )]
    InvalidLength(usize),

    #[error("Invalid equation: {0}")]
    Grammar(#[from] GrammarViolation),
}

impl Equation {
    /// Create a new Equation from a string
    ///
    /// # Errors
    /// Returns `EquationError` if:
    /// - Length is outside `MIN_LENGTH..=MAX_LENGTH`
    /// - A symbol is outside `0-9 + - * / =`
    /// - The structure breaks a grammar rule (leading zero, adjacent operators, ...)
    /// - The left-hand side does not evaluate to the right-hand number
    ///
    /// # Examples
    /// ```
    /// use nerdle_solver::core::Equation;
    ///
    /// let equation = Equation::new("13+59=72").unwrap();
    /// assert_eq!(equation.len(), 8);
    ///
    /// assert!(Equation::new("13+59=71").is_err()); // false identity
    /// assert!(Equation::new("13+59=072").is_err()); // leading zero
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, EquationError> {
        let text: String = text.into();

        let length = text.chars().count();
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(EquationError::InvalidLength(length));
        }

        grammar::check(text.as_bytes())?;

        Ok(Self { text })
    }

    /// Wrap symbols the generator has already proven valid
    pub(crate) fn from_generated(symbols: &[u8]) -> Self {
        Self {
            text: symbols.iter().map(|&symbol| char::from(symbol)).collect(),
        }
    }

    /// Get the equation as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the equation as raw ASCII symbols
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of symbols
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the symbol at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn symbol_at(&self, position: usize) -> u8 {
        self.symbols()[position]
    }

    /// Split into the expression left of `=` and the number right of it
    #[must_use]
    pub fn sides(&self) -> (&str, &str) {
        self.text.split_once('=').unwrap_or((&self.text, ""))
    }

    /// Count occurrences of `symbol`
    #[must_use]
    pub fn count_of(&self, symbol: u8) -> usize {
        self.symbols().iter().filter(|&&s| s == symbol).count()
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
