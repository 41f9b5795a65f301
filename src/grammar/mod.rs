//! Equation grammar
//!
//! Decides which symbol sequences are valid puzzle equations, and enumerates
//! all of them for a given length.
//!
//! Structural rules:
//! - exactly one `=`, followed only by digits
//! - every number starts with a non-zero digit
//! - no operator directly after another, none at either end
//!
//! Semantic rule: the left-hand side, evaluated with the usual precedence,
//! equals the right-hand number.

pub mod evaluator;
pub mod generator;

pub use evaluator::{EvaluationError, Sides, evaluate, holds};
pub use generator::Equations;

use crate::core::{is_operator, symbol_index};
use thiserror::Error;

/// A broken grammar rule
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GrammarViolation {
    #[error("'{symbol}' at position {position} is not one of 0-9 + - * / =")]
    UnknownSymbol { symbol: char, position: usize },

    #[error("equation cannot start with an operator")]
    LeadingOperator,

    #[error("operator at position {position} directly follows another operator")]
    AdjacentOperators { position: usize },

    #[error("number starting at position {position} has a leading zero")]
    LeadingZero { position: usize },

    #[error("operator at position {position} appears after '='")]
    OperatorAfterEquals { position: usize },

    #[error("equation has no '='")]
    MissingEquals,

    #[error("equation cannot end with an operator")]
    TrailingOperator,

    #[error("left-hand side divides by zero")]
    DivisionByZero,

    #[error("left-hand side evaluates to {left}, right-hand side is {right}")]
    NotAnIdentity { left: f64, right: f64 },
}

/// Check both the structural and the arithmetic rules
///
/// # Errors
/// Returns the first `GrammarViolation` found, structural rules first.
///
/// # Examples
/// ```
/// use nerdle_solver::grammar::{GrammarViolation, check};
///
/// assert!(check(b"13+59=72").is_ok());
/// assert_eq!(check(b"13+-9=72"), Err(GrammarViolation::AdjacentOperators { position: 3 }));
/// ```
pub fn check(symbols: &[u8]) -> Result<(), GrammarViolation> {
    check_structure(symbols)?;

    match evaluate(symbols) {
        Ok(sides) if sides.balanced() => Ok(()),
        Ok(sides) => Err(GrammarViolation::NotAnIdentity {
            left: sides.left,
            right: sides.right,
        }),
        Err(EvaluationError::DivisionByZero) => Err(GrammarViolation::DivisionByZero),
        Err(EvaluationError::MissingEquals | EvaluationError::TooLong(_)) => {
            Err(GrammarViolation::MissingEquals)
        }
    }
}

/// Check the structural rules only
///
/// # Errors
/// Returns the first `GrammarViolation` found scanning left to right.
pub fn check_structure(symbols: &[u8]) -> Result<(), GrammarViolation> {
    let mut previous: Option<u8> = None;
    let mut seen_equals = false;

    for (position, &symbol) in symbols.iter().enumerate() {
        if symbol_index(symbol).is_none() {
            return Err(GrammarViolation::UnknownSymbol {
                symbol: char::from(symbol),
                position,
            });
        }

        if is_operator(symbol) {
            match previous {
                None => return Err(GrammarViolation::LeadingOperator),
                Some(p) if is_operator(p) => {
                    return Err(GrammarViolation::AdjacentOperators { position });
                }
                _ => {}
            }
            if seen_equals {
                return Err(GrammarViolation::OperatorAfterEquals { position });
            }
            seen_equals = symbol == b'=';
        } else if symbol == b'0' && previous.is_none_or(is_operator) {
            return Err(GrammarViolation::LeadingZero { position });
        }

        previous = Some(symbol);
    }

    match previous {
        Some(last) if is_operator(last) => Err(GrammarViolation::TrailingOperator),
        _ if !seen_equals => Err(GrammarViolation::MissingEquals),
        _ => Ok(()),
    }
}

/// Whether `symbols` is a valid equation
#[inline]
#[must_use]
pub fn is_valid(symbols: &[u8]) -> bool {
    check(symbols).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_equations() {
        for equation in ["13+59=72", "100-1=99", "12*3=36", "84/4=21", "1=1", "9*9-1=80"] {
            assert_eq!(check(equation.as_bytes()), Ok(()), "{equation}");
        }
    }

    #[test]
    fn exactly_one_equals() {
        // Accepted: a single '='
        assert!(is_valid(b"12+34=46"));
        // Rejected: none at all
        assert_eq!(check(b"12+34+46"), Err(GrammarViolation::MissingEquals));
        // Rejected: a second '='
        assert_eq!(
            check(b"1+1=2=02"),
            Err(GrammarViolation::OperatorAfterEquals { position: 5 })
        );
    }

    #[test]
    fn only_digits_after_equals() {
        assert!(is_valid(b"12+35=47"));
        assert_eq!(
            check(b"12+3=5-0"),
            Err(GrammarViolation::OperatorAfterEquals { position: 6 })
        );
    }

    #[test]
    fn leading_digit_is_non_zero() {
        // Zeros inside numbers are fine
        assert!(is_valid(b"100-1=99"));
        // First symbol
        assert_eq!(
            check(b"01+23=24"),
            Err(GrammarViolation::LeadingZero { position: 0 })
        );
        // After an operator
        assert_eq!(
            check(b"10+09=19"),
            Err(GrammarViolation::LeadingZero { position: 3 })
        );
        // After '='
        assert_eq!(
            check(b"9+9=0018"),
            Err(GrammarViolation::LeadingZero { position: 4 })
        );
    }

    #[test]
    fn no_adjacent_operators() {
        assert!(is_valid(b"7*8-6=50"));
        assert_eq!(
            check(b"7*-8=-56"),
            Err(GrammarViolation::AdjacentOperators { position: 2 })
        );
        assert_eq!(check(b"-7*8=-56"), Err(GrammarViolation::LeadingOperator));
    }

    #[test]
    fn no_trailing_operator() {
        assert!(is_valid(b"12+34=46"));
        assert_eq!(
            check(b"12+34=4+"),
            Err(GrammarViolation::OperatorAfterEquals { position: 7 })
        );
        assert_eq!(check(b"12+34+4+"), Err(GrammarViolation::TrailingOperator));
    }

    #[test]
    fn division_by_zero_is_invalid() {
        // A zero divisor is always a leading zero, so structure catches it first
        assert_eq!(
            check(b"5/0+1=1"),
            Err(GrammarViolation::LeadingZero { position: 2 })
        );
        assert_eq!(evaluate(b"5/0+1=1"), Err(EvaluationError::DivisionByZero));
        assert_eq!(check(b"50/10=5"), Ok(()));
    }

    #[test]
    fn false_identity_is_invalid() {
        assert!(matches!(
            check(b"13+59=71"),
            Err(GrammarViolation::NotAnIdentity { .. })
        ));
    }

    #[test]
    fn unknown_symbols_are_reported() {
        assert_eq!(
            check(b"1+1=2 "),
            Err(GrammarViolation::UnknownSymbol {
                symbol: ' ',
                position: 5
            })
        );
    }

    #[test]
    fn precedence_is_respected() {
        assert!(is_valid(b"2+3*4=14"));
        assert!(!is_valid(b"2+3*4=20"));
        assert!(is_valid(b"20-6/2=17"));
    }
}
