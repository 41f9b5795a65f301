//! Arithmetic evaluation of equation candidates
//!
//! The left-hand side is evaluated with a term stack: `+` and `-` push a new
//! signed term, `*` and `/` combine with the term on top. Terms are summed
//! from the top of the stack down once `=` is reached.

use crate::core::MAX_LENGTH;
use thiserror::Error;

/// Why an expression could not be evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("no '=' separating the two sides")]
    MissingEquals,

    #[error("{0} symbols exceed the supported maximum")]
    TooLong(usize),
}

/// Evaluated left and right side of an equation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sides {
    pub left: f64,
    pub right: f64,
}

impl Sides {
    /// Whether both sides are equal
    ///
    /// Exact comparison: every operand has at most `MAX_LENGTH` digits, so the
    /// only inexact values come from division and must not count as equal.
    #[inline]
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn balanced(self) -> bool {
        self.left == self.right
    }
}

/// Evaluate both sides of a structurally valid equation
///
/// # Errors
/// Returns `EvaluationError::DivisionByZero` if a divisor is zero,
/// `MissingEquals` if the last operator is not `=`, and `TooLong` for
/// sequences longer than `MAX_LENGTH`.
///
/// # Examples
/// ```
/// use nerdle_solver::grammar::evaluate;
///
/// let sides = evaluate(b"20-6/2=17").unwrap();
/// assert!(sides.balanced());
/// assert_eq!(sides.left, 17.0);
/// ```
pub fn evaluate(symbols: &[u8]) -> Result<Sides, EvaluationError> {
    if symbols.len() > MAX_LENGTH {
        return Err(EvaluationError::TooLong(symbols.len()));
    }

    // At most one term per operator, and operators never outnumber digits
    let mut terms = [0.0_f64; MAX_LENGTH];
    let mut depth = 0;
    let mut number = 0.0_f64;
    let mut pending = b'+';

    for &symbol in symbols {
        if symbol.is_ascii_digit() {
            number = number * 10.0 + f64::from(symbol - b'0');
            continue;
        }

        match pending {
            b'+' => {
                terms[depth] = number;
                depth += 1;
            }
            b'-' => {
                terms[depth] = -number;
                depth += 1;
            }
            b'*' if depth > 0 => terms[depth - 1] *= number,
            b'/' if depth > 0 => {
                if number == 0.0 {
                    return Err(EvaluationError::DivisionByZero);
                }
                terms[depth - 1] /= number;
            }
            _ => {}
        }

        number = 0.0;
        pending = symbol;
    }

    if pending != b'=' {
        return Err(EvaluationError::MissingEquals);
    }

    let left = terms[..depth].iter().rev().fold(0.0, |sum, term| sum + term);

    Ok(Sides {
        left,
        right: number,
    })
}

/// Whether a structurally valid sequence is a true identity
#[inline]
#[must_use]
pub fn holds(symbols: &[u8]) -> bool {
    evaluate(symbols).is_ok_and(Sides::balanced)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addition_and_subtraction() {
        let sides = evaluate(b"13+59=72").unwrap();
        assert_eq!(sides.left, 72.0);
        assert_eq!(sides.right, 72.0);
        assert!(holds(b"100-1=99"));
    }

    #[test]
    fn multiplication_binds_tighter() {
        assert_eq!(evaluate(b"2+3*4=14").unwrap().left, 14.0);
        assert_eq!(evaluate(b"2-3*4=1").unwrap().left, -10.0);
    }

    #[test]
    fn division_binds_tighter() {
        assert_eq!(evaluate(b"9-8/4=7").unwrap().left, 7.0);
        assert!(holds(b"9-8/4=7"));
    }

    #[test]
    fn fractional_intermediates_are_kept() {
        // 3/2 = 1.5, times 4 is exactly 6
        assert!(holds(b"3/2*4=6"));
        // 7/3 is not an integer, so no integer right side matches
        assert!(!holds(b"7/3+1=3"));
    }

    #[test]
    fn left_side_without_operator() {
        assert!(holds(b"12=12"));
        assert!(!holds(b"12=21"));
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(evaluate(b"8/0=1"), Err(EvaluationError::DivisionByZero));
        assert!(!holds(b"8/0=1"));
    }

    #[test]
    fn missing_equals() {
        assert_eq!(evaluate(b"1+2+3"), Err(EvaluationError::MissingEquals));
    }

    #[test]
    fn too_long() {
        assert_eq!(
            evaluate(b"1+1+1+1+1=5"),
            Err(EvaluationError::TooLong(11))
        );
    }
}
