//! Errors raised while playing a game

use crate::core::FeedbackError;
use thiserror::Error;

/// Error type for session and pruning operations
///
/// Every variant leaves the candidate set exactly as it was before the
/// failing call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error(transparent)]
    Feedback(#[from] FeedbackError),

    #[error("'{0}' is not a valid equation of this puzzle")]
    UnknownGuess(String),

    #[error("Feedback code {code} is out of range for {length}-symbol equations")]
    CodeOutOfRange { code: u16, length: usize },

    #[error("No equation is consistent with hint {hint} for '{guess}'; undo or start a new game")]
    Exhausted { guess: String, hint: String },

    #[error("No candidates remain")]
    NoCandidates,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_errors_convert() {
        let error: SolverError = FeedbackError::InvalidLength {
            expected: 8,
            actual: 3,
        }
        .into();
        assert!(matches!(error, SolverError::Feedback(_)));
        assert_eq!(error.to_string(), "Hint must be exactly 8 symbols long, got 3");
    }

    #[test]
    fn exhausted_mentions_recovery() {
        let error = SolverError::Exhausted {
            guess: "9+9=18".to_string(),
            hint: "GGGGGB".to_string(),
        };
        assert!(error.to_string().contains("undo"));
    }
}
