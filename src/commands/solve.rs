//! Self-play solving command
//!
//! Plays a game against a known hidden equation and records every step.

use crate::core::FeedbackCode;
use crate::error::SolverError;
use crate::solver::{Session, Strategy};

/// Configuration for solving an equation
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 6,
        }
    }
}

/// Result of solving an equation
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub equation: String,
    pub code: FeedbackCode,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: Option<f64>,
    pub expected_remaining: Option<f64>,
}

/// Solve `config.target` with the session's strategy
///
/// The session is reset first and holds the final state afterwards.
///
/// # Errors
///
/// Returns `SolverError::UnknownGuess` if the target is not an equation of
/// the session's universe, or any error raised while recording feedback.
pub fn solve_equation<S: Strategy>(
    config: SolveConfig,
    session: &mut Session<'_, S>,
) -> Result<SolveResult, SolverError> {
    let universe = session.universe();
    let target = universe
        .index_of(&config.target)
        .ok_or_else(|| SolverError::UnknownGuess(config.target.clone()))?;
    let hidden = universe.equation(target);

    session.reset();
    let mut guesses: Vec<GuessStep> = Vec::new();

    for _ in 0..config.max_guesses {
        let candidates_before = session.remaining();
        let suggestion = session.suggest()?;
        let guess = universe.equation(suggestion.guess);

        // Metrics only mean something while there is a choice left
        let (entropy, expected_remaining) = if candidates_before > 1 {
            (
                Some(suggestion.metrics.entropy),
                Some(suggestion.metrics.expected_remaining),
            )
        } else {
            (None, None)
        };

        let code = FeedbackCode::calculate(guess, hidden);
        let round = session.record(guess.text(), code)?;

        guesses.push(GuessStep {
            equation: guess.text().to_string(),
            code,
            candidates_before,
            candidates_after: round.after,
            entropy,
            expected_remaining,
        });

        if session.is_solved() {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: config.target,
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target: config.target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{ApproximateStrategy, ExactStrategy};
    use crate::universe::Universe;

    #[test]
    fn solve_equation_succeeds() {
        let universe = Universe::generate(5).unwrap();
        let mut session = Session::new(ExactStrategy::new(&universe), &universe, &universe);

        let result = solve_equation(SolveConfig::new("2*3=6".to_string()), &mut session).unwrap();

        assert!(result.success);
        assert_eq!(result.guesses.last().map(|step| step.equation.as_str()), Some("2*3=6"));
        assert!(session.is_solved());
    }

    #[test]
    fn solve_records_history() {
        let universe = Universe::generate(5).unwrap();
        let mut session = Session::new(ApproximateStrategy, &universe, &universe);

        let result = solve_equation(SolveConfig::new("8-5=3".to_string()), &mut session).unwrap();

        assert!(!result.guesses.is_empty());
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
        }
        assert!(result.guesses[0].entropy.is_some());
    }

    #[test]
    fn solve_unknown_target_returns_error() {
        let universe = Universe::generate(5).unwrap();
        let mut session = Session::new(ApproximateStrategy, &universe, &universe);

        let result = solve_equation(SolveConfig::new("1+1=3".to_string()), &mut session);
        assert!(matches!(result, Err(SolverError::UnknownGuess(_))));
    }

    #[test]
    fn solve_with_max_guesses_limit() {
        let universe = Universe::generate(5).unwrap();
        let mut session = Session::new(ApproximateStrategy, &universe, &universe);
        let mut config = SolveConfig::new("9-8=1".to_string());
        config.max_guesses = 1;

        let result = solve_equation(config, &mut session).unwrap();
        assert_eq!(result.guesses.len(), 1);
    }

    #[test]
    fn solve_resets_previous_game() {
        let universe = Universe::generate(5).unwrap();
        let mut session = Session::new(ApproximateStrategy, &universe, &universe);
        session.record_hint("1+2=3", "GGGGG").unwrap();

        let result = solve_equation(SolveConfig::new("4/2=2".to_string()), &mut session).unwrap();
        assert_eq!(result.guesses[0].candidates_before, universe.len());
    }
}
