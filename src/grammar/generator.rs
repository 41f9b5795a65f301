//! Enumeration of every valid equation of a given length
//!
//! Equations are built symbol by symbol, left to right. After an operator (or
//! at the start) only a non-zero digit may follow; after `=` only digits; any
//! other position may continue the current number or close it with an
//! operator. Complete sequences are kept if they evaluate to a true identity.

use super::evaluator::holds;
use crate::core::{Equation, is_operator};

const DIGITS: &[u8] = b"0123456789";
const NON_ZERO_DIGITS: &[u8] = b"123456789";
const DIGITS_AND_OPERATORS: &[u8] = b"0123456789=+-*/";
const EQUALS: &[u8] = b"=";

/// Choices still to try at one position
#[derive(Debug, Clone, Copy)]
struct Frame {
    options: &'static [u8],
    cursor: usize,
    after_equals: bool,
}

/// Lazy iterator over all valid equations of one length
///
/// Uses an explicit stack of frames instead of recursion. Order is stable:
/// at each position digits are tried in ascending order, then `= + - * /`.
/// Create a new iterator to restart the enumeration.
///
/// # Examples
/// ```
/// use nerdle_solver::grammar::Equations;
///
/// let mut equations = Equations::new(5);
/// assert_eq!(equations.next().unwrap().text(), "10=10");
/// assert!(Equations::new(5).any(|e| e.text() == "1+2=3"));
/// ```
#[derive(Debug, Clone)]
pub struct Equations {
    length: usize,
    symbols: Vec<u8>,
    frames: Vec<Frame>,
}

impl Equations {
    #[must_use]
    pub fn new(length: usize) -> Self {
        let mut frames = Vec::with_capacity(length);
        if length > 0 {
            frames.push(Frame {
                options: options_for(0, length, true, false),
                cursor: 0,
                after_equals: false,
            });
        }

        Self {
            length,
            symbols: Vec::with_capacity(length),
            frames,
        }
    }

    /// Length of the equations produced
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }
}

impl Iterator for Equations {
    type Item = Equation;

    fn next(&mut self) -> Option<Equation> {
        while let Some(frame) = self.frames.last_mut() {
            let Some(&symbol) = frame.options.get(frame.cursor) else {
                self.frames.pop();
                continue;
            };
            frame.cursor += 1;
            let after_equals = frame.after_equals || symbol == b'=';

            let position = self.frames.len() - 1;
            self.symbols.truncate(position);
            self.symbols.push(symbol);

            if position + 1 == self.length {
                if holds(&self.symbols) {
                    return Some(Equation::from_generated(&self.symbols));
                }
                continue;
            }

            self.frames.push(Frame {
                options: options_for(position + 1, self.length, is_operator(symbol), after_equals),
                cursor: 0,
                after_equals,
            });
        }

        None
    }
}

/// Symbols allowed at `position` given what precedes it
///
/// Branches that can no longer fit `=` followed by a digit are cut here; they
/// would never produce an equation, so the output order is unaffected.
fn options_for(
    position: usize,
    length: usize,
    previous_was_operator: bool,
    after_equals: bool,
) -> &'static [u8] {
    if previous_was_operator {
        NON_ZERO_DIGITS
    } else if after_equals {
        DIGITS
    } else if position + 1 >= length {
        &[]
    } else if position + 2 == length {
        EQUALS
    } else {
        DIGITS_AND_OPERATORS
    }
}
