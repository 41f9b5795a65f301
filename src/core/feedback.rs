//! Feedback calculation and packing
//!
//! A guess is graded position by position against the hidden equation:
//! - 2 = Green (symbol in the correct position)
//! - 1 = Purple (symbol present elsewhere)
//! - 0 = Black (symbol absent, or every occurrence already accounted for)
//!
//! The grades are packed into a base-3 number whose most significant digit is
//! position 0, so an equation of length `n` has `3^n` possible codes and the
//! all-green code is `3^n - 1`.

use super::Equation;
use super::equation::MAX_LENGTH;
use thiserror::Error;

/// Per-position feedback grade
///
/// The discriminants are the base-3 digits used for packing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feedback {
    Black = 0,
    Purple = 1,
    Green = 2,
}

impl Feedback {
    /// Base-3 digit of this grade
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u16 {
        self as u16
    }

    /// Decode a base-3 digit; anything above 2 is not a grade
    #[inline]
    #[must_use]
    pub const fn from_digit(digit: u16) -> Option<Self> {
        match digit {
            0 => Some(Self::Black),
            1 => Some(Self::Purple),
            2 => Some(Self::Green),
            _ => None,
        }
    }

    /// Parse a hint character (case-sensitive)
    #[inline]
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' => Some(Self::Green),
            'P' => Some(Self::Purple),
            'B' => Some(Self::Black),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Green => 'G',
            Self::Purple => 'P',
            Self::Black => 'B',
        }
    }
}

/// Error type for malformed hint strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("Hint must be exactly {expected} symbols long, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error(
        "Hint may only contain G (green), P (purple) or B (black), found '{found}' at position {position}"
    )]
    InvalidSymbol { found: char, position: usize },
}

/// Packed feedback for a whole equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeedbackCode(u16);

/// Number of distinct feedback codes for equations of `length` symbols
///
/// # Panics
/// Panics in debug mode if `length > MAX_LENGTH`
#[inline]
#[must_use]
pub const fn code_space(length: usize) -> usize {
    debug_assert!(length <= MAX_LENGTH, "length exceeds MAX_LENGTH");
    3_usize.pow(length as u32)
}

impl FeedbackCode {
    /// Create a code from a raw value
    #[inline]
    #[must_use]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Get the raw code value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// The all-green code for equations of `length` symbols
    #[inline]
    #[must_use]
    pub const fn perfect(length: usize) -> Self {
        Self((code_space(length) - 1) as u16)
    }

    /// Check if this is the all-green code for `length` symbols
    #[inline]
    #[must_use]
    pub const fn is_perfect(self, length: usize) -> bool {
        self.0 == Self::perfect(length).0
    }

    /// Whether the value is a possible code for `length` symbols
    #[inline]
    #[must_use]
    pub const fn fits(self, length: usize) -> bool {
        (self.0 as usize) < code_space(length)
    }

    /// Calculate the code when `guess` is played against hidden `target`
    ///
    /// # Examples
    /// ```
    /// use nerdle_solver::core::{Equation, FeedbackCode};
    ///
    /// let guess = Equation::new("13+59=72").unwrap();
    /// let target = Equation::new("100-1=99").unwrap();
    /// let code = FeedbackCode::calculate(&guess, &target);
    ///
    /// assert_eq!(code.to_hint(8), "GBBBPGBB");
    /// ```
    #[inline]
    #[must_use]
    pub fn calculate(guess: &Equation, target: &Equation) -> Self {
        Self::between(guess.symbols(), target.symbols())
    }

    /// Calculate the code between two raw symbol sequences of equal length
    ///
    /// Allocation-free; this is the hot path of the feedback matrix build.
    ///
    /// # Panics
    /// Panics in debug mode if the lengths differ or exceed `MAX_LENGTH`
    #[must_use]
    pub fn between(guess: &[u8], target: &[u8]) -> Self {
        let mut grades = [Feedback::Black; MAX_LENGTH];
        let length = grade(guess, target, &mut grades);
        Self::pack(&grades[..length])
    }

    /// Pack per-position grades, position 0 most significant
    #[must_use]
    pub fn pack(grades: &[Feedback]) -> Self {
        debug_assert!(grades.len() <= MAX_LENGTH);
        Self(
            grades
                .iter()
                .fold(0u16, |code, grade| code * 3 + grade.digit()),
        )
    }

    /// Unpack into per-position grades for an equation of `length` symbols
    #[must_use]
    pub fn unpack(self, length: usize) -> Vec<Feedback> {
        let mut grades = vec![Feedback::Black; length];
        let mut value = self.0;

        for grade in grades.iter_mut().rev() {
            *grade = Feedback::from_digit(value % 3).unwrap_or(Feedback::Black);
            value /= 3;
        }

        grades
    }

    /// Parse a hint such as `"GPBBGGBP"`
    ///
    /// # Errors
    /// Returns `FeedbackError` if the hint is not exactly `length` characters
    /// or contains anything other than `G`, `P` or `B`.
    ///
    /// # Examples
    /// ```
    /// use nerdle_solver::core::FeedbackCode;
    ///
    /// let code = FeedbackCode::parse("GGGGGGGG", 8).unwrap();
    /// assert!(code.is_perfect(8));
    ///
    /// assert!(FeedbackCode::parse("GGGG", 8).is_err());
    /// assert!(FeedbackCode::parse("ggggpppp", 8).is_err());
    /// ```
    pub fn parse(hint: &str, length: usize) -> Result<Self, FeedbackError> {
        let actual = hint.chars().count();
        if actual != length {
            return Err(FeedbackError::InvalidLength {
                expected: length,
                actual,
            });
        }

        let grades = hint
            .chars()
            .enumerate()
            .map(|(position, found)| {
                Feedback::from_char(found).ok_or(FeedbackError::InvalidSymbol { found, position })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::pack(&grades))
    }

    /// Render as a hint string such as `"GPBBGGBP"`
    #[must_use]
    pub fn to_hint(self, length: usize) -> String {
        self.unpack(length).into_iter().map(Feedback::to_char).collect()
    }

    /// Count the number of green positions
    #[must_use]
    pub fn count_greens(self, length: usize) -> usize {
        self.count(length, Feedback::Green)
    }

    /// Count the number of purple positions
    #[must_use]
    pub fn count_purples(self, length: usize) -> usize {
        self.count(length, Feedback::Purple)
    }

    fn count(self, length: usize, wanted: Feedback) -> usize {
        self.unpack(length)
            .into_iter()
            .filter(|&grade| grade == wanted)
            .count()
    }
}

/// Grade `guess` against `target` position by position
///
/// # Examples
/// ```
/// use nerdle_solver::core::{Feedback, compare};
///
/// let grades = compare(b"81/9=9", b"9+9=18");
/// assert_eq!(grades[2], Feedback::Black);
/// assert_eq!(grades[5], Feedback::Purple);
/// ```
#[must_use]
pub fn compare(guess: &[u8], target: &[u8]) -> Vec<Feedback> {
    let mut grades = [Feedback::Black; MAX_LENGTH];
    let length = grade(guess, target, &mut grades);
    grades[..length].to_vec()
}

/// Two-pass grading shared by every entry point; returns the graded length
///
/// Each target position is consumed at most once: by a green in the first
/// pass, or by the first unconsumed match found for a purple in the second.
// Allow: Index needed to access guess[i], target[i], grades[i] and consumed[i] together
#[allow(clippy::needless_range_loop)]
fn grade(guess: &[u8], target: &[u8], grades: &mut [Feedback; MAX_LENGTH]) -> usize {
    debug_assert_eq!(guess.len(), target.len(), "equations must have equal length");
    let length = guess.len().min(target.len()).min(MAX_LENGTH);
    let mut consumed = [false; MAX_LENGTH];

    // First pass: greens
    for i in 0..length {
        if guess[i] == target[i] {
            grades[i] = Feedback::Green;
            consumed[i] = true;
        }
    }

    // Second pass: purples from whatever the greens left over
    for i in 0..length {
        if grades[i] == Feedback::Green {
            continue;
        }

        if let Some(j) = (0..length).find(|&j| !consumed[j] && target[j] == guess[i]) {
            grades[i] = Feedback::Purple;
            consumed[j] = true;
        }
    }

    length
}
