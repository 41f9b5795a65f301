//! The candidate universe and its precomputed feedback tables
//!
//! A `Universe` is the ordered list of every valid equation of one length.
//! Within a session equations are referred to by their index into it.

mod matrix;
pub mod snapshot;

pub use matrix::FeedbackMatrix;

use crate::core::{Equation, EquationError, FeedbackCode, MAX_LENGTH, MIN_LENGTH};
use crate::grammar::Equations;
use rustc_hash::FxHashMap;
use std::time::Instant;
use thiserror::Error;

/// Answers "which feedback code does guess `i` produce against target `j`"
///
/// Implemented by the precomputed [`FeedbackMatrix`] and by [`Universe`]
/// itself, which encodes on demand.
pub trait FeedbackLookup: Sync {
    fn code(&self, guess: usize, target: usize) -> FeedbackCode;
}

/// Error type for universe construction
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UniverseError {
    #[error("Equation length must be {min}-{max}, got {0}", min = MIN_LENGTH, max = MAX_LENGTH)]
    InvalidLength(usize),

    #[error("Equation '{equation}' has length {actual}, expected {expected}")]
    LengthMismatch {
        equation: String,
        expected: usize,
        actual: usize,
    },

    #[error("Equation '{0}' appears more than once")]
    Duplicate(String),

    #[error("Invalid equation '{text}': {source}")]
    Equation {
        text: String,
        source: EquationError,
    },
}

/// Ordered set of all candidate equations of one length
///
/// Never mutated after construction.
#[derive(Debug, Clone)]
pub struct Universe {
    length: usize,
    equations: Vec<Equation>,
    index: FxHashMap<String, usize>,
}

impl Universe {
    /// Enumerate every valid equation of `length`
    ///
    /// # Errors
    /// Returns `UniverseError::InvalidLength` if `length` is outside
    /// `MIN_LENGTH..=MAX_LENGTH`.
    ///
    /// # Examples
    /// ```
    /// use nerdle_solver::universe::Universe;
    ///
    /// let universe = Universe::generate(5).unwrap();
    /// assert!(universe.index_of("1+2=3").is_some());
    /// assert!(Universe::generate(11).is_err());
    /// ```
    pub fn generate(length: usize) -> Result<Self, UniverseError> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(UniverseError::InvalidLength(length));
        }

        let start = Instant::now();
        let universe = Self::from_valid(length, Equations::new(length).collect());
        tracing::info!(
            length,
            equations = universe.len(),
            elapsed_ms = start.elapsed().as_millis(),
            "generated equation universe"
        );

        Ok(universe)
    }

    /// Build a universe from already validated equations
    ///
    /// Order is preserved.
    ///
    /// # Errors
    /// Returns `UniverseError` on an invalid length, an equation of another
    /// length, or a duplicate.
    pub fn from_equations<I>(length: usize, equations: I) -> Result<Self, UniverseError>
    where
        I: IntoIterator<Item = Equation>,
    {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(UniverseError::InvalidLength(length));
        }

        let equations: Vec<Equation> = equations.into_iter().collect();
        let mut index = FxHashMap::default();
        index.reserve(equations.len());

        for (i, equation) in equations.iter().enumerate() {
            if equation.len() != length {
                return Err(UniverseError::LengthMismatch {
                    equation: equation.text().to_string(),
                    expected: length,
                    actual: equation.len(),
                });
            }
            if index.insert(equation.text().to_string(), i).is_some() {
                return Err(UniverseError::Duplicate(equation.text().to_string()));
            }
        }

        Ok(Self {
            length,
            equations,
            index,
        })
    }

    /// Parse and validate each text, then build as [`Universe::from_equations`]
    ///
    /// Blank lines are skipped.
    ///
    /// # Errors
    /// Returns `UniverseError::Equation` for the first text that is not a
    /// valid equation, or any error of [`Universe::from_equations`].
    pub fn from_texts<'t, I>(length: usize, texts: I) -> Result<Self, UniverseError>
    where
        I: IntoIterator<Item = &'t str>,
    {
        let equations = texts
            .into_iter()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(|text| {
                Equation::new(text).map_err(|source| UniverseError::Equation {
                    text: text.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_equations(length, equations)
    }

    fn from_valid(length: usize, equations: Vec<Equation>) -> Self {
        let index = equations
            .iter()
            .enumerate()
            .map(|(i, equation)| (equation.text().to_string(), i))
            .collect();

        Self {
            length,
            equations,
            index,
        }
    }

    /// Length shared by every equation
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.equations.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.equations.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Equation> {
        self.equations.get(index)
    }

    /// Get the equation at `index`
    ///
    /// # Panics
    /// Panics if `index >= self.len()`
    #[inline]
    #[must_use]
    pub fn equation(&self, index: usize) -> &Equation {
        &self.equations[index]
    }

    /// Index of `text`, if it is part of the universe
    #[inline]
    #[must_use]
    pub fn index_of(&self, text: &str) -> Option<usize> {
        self.index.get(text).copied()
    }

    #[must_use]
    pub fn equations(&self) -> &[Equation] {
        &self.equations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Equation> {
        self.equations.iter()
    }
}

impl FeedbackLookup for Universe {
    #[inline]
    fn code(&self, guess: usize, target: usize) -> FeedbackCode {
        FeedbackCode::between(
            self.equations[guess].symbols(),
            self.equations[target].symbols(),
        )
    }
}

impl<'a> IntoIterator for &'a Universe {
    type Item = &'a Equation;
    type IntoIter = std::slice::Iter<'a, Equation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
