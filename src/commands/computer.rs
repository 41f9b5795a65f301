//! Computer-hosted game
//!
//! The program hides a random equation and grades the user's guesses,
//! showing the suggestion it would play next after each one.

use super::Console;
use crate::core::FeedbackCode;
use crate::output::formatters::{code_to_emoji, colored_equation};
use crate::solver::{Session, Strategy};
use crate::universe::Universe;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};

/// How a computer-hosted game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComputerOutcome {
    Won { guesses: usize },
    Quit { answer: String },
}

/// Pick a uniformly random hidden equation
///
/// Returns `None` for an empty universe.
#[must_use]
pub fn random_answer(universe: &Universe) -> Option<usize> {
    if universe.is_empty() {
        return None;
    }
    Some(rand::rng().random_range(0..universe.len()))
}

/// Host a game with the equation at universe index `answer` hidden
///
/// # Errors
/// Returns an error on I/O failure, or if grading the answer's own
/// feedback fails to keep it a candidate.
///
/// # Panics
/// Panics if `answer` is outside the session's universe
pub fn run_computer<S, R, W>(
    session: &mut Session<'_, S>,
    answer: usize,
    console: &mut Console<R, W>,
) -> Result<ComputerOutcome>
where
    S: Strategy,
    R: BufRead,
    W: Write,
{
    let universe = session.universe();
    let length = universe.length();
    let hidden = universe.equation(answer);

    writeln!(
        console.out(),
        "I'm thinking of a {length}-symbol equation. Type 'quit' to give up."
    )?;

    loop {
        if let Ok(suggestion) = session.suggest() {
            writeln!(
                console.out(),
                "\n{} possible answers, I would guess {}",
                session.remaining(),
                session.equation(suggestion.guess).text().bright_yellow()
            )?;
        }

        let Some(input) = console.ask("Your guess")? else {
            return Ok(ComputerOutcome::Quit {
                answer: hidden.text().to_string(),
            });
        };

        if matches!(input.as_str(), "quit" | "q" | "exit") {
            writeln!(console.out(), "The answer was {}", hidden.text().bold())?;
            return Ok(ComputerOutcome::Quit {
                answer: hidden.text().to_string(),
            });
        }

        let Some(guess) = universe.index_of(&input) else {
            writeln!(
                console.out(),
                "{}",
                format!("'{input}' is not a valid {length}-symbol equation").red()
            )?;
            continue;
        };

        let code = FeedbackCode::calculate(universe.equation(guess), hidden);
        if guess == answer {
            let guesses = session.rounds().len() + 1;
            writeln!(
                console.out(),
                "{} {}",
                colored_equation(&input, code, length),
                format!("Correct in {guesses}!").green().bold()
            )?;
            return Ok(ComputerOutcome::Won { guesses });
        }

        let round = session.record(&input, code)?;
        writeln!(
            console.out(),
            "{}  {}  ({} → {} candidates)",
            code_to_emoji(code, length),
            code.to_hint(length),
            round.before,
            round.after
        )?;
    }
}
