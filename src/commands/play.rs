//! Interactive assistant mode
//!
//! The user plays the real game elsewhere; each round we suggest a guess,
//! then read the guess actually played and the hint it received.

use super::Console;
use crate::output::formatters::{code_to_emoji, colored_equation};
use crate::solver::{Session, Strategy};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// How an interactive game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Solved { guesses: usize },
    Quit,
}

/// Run the interactive assistant until solved, quit or end of input
///
/// A blank guess plays the suggestion. `undo`, `new` and `quit` are
/// accepted at the guess prompt.
///
/// # Errors
/// Returns an error only on I/O failure; invalid input is reported and
/// asked for again.
pub fn run_play<S, R, W>(
    session: &mut Session<'_, S>,
    console: &mut Console<R, W>,
) -> Result<PlayOutcome>
where
    S: Strategy,
    R: BufRead,
    W: Write,
{
    let length = session.universe().length();

    writeln!(console.out(), "Enter each guess you play (blank = suggestion) and its hint.")?;
    writeln!(console.out(), "Hints use G (green), P (purple) and B (black).")?;
    writeln!(console.out(), "Commands: 'undo', 'new', 'quit'")?;

    loop {
        let remaining = session.remaining();
        writeln!(console.out(), "\n{}", "─".repeat(60).cyan())?;
        writeln!(
            console.out(),
            "Turn {}: {remaining} possible answers",
            session.rounds().len() + 1
        )?;

        let suggestion = match session.suggest() {
            Ok(suggestion) => {
                let text = session.equation(suggestion.guess).text();
                writeln!(console.out(), "Suggested guess: {}", text.bright_yellow().bold())?;
                writeln!(
                    console.out(),
                    "   Entropy: {:.3} bits, expected remaining {:.1}, worst case {}",
                    suggestion.metrics.entropy,
                    suggestion.metrics.expected_remaining,
                    suggestion.metrics.max_partition
                )?;
                Some(text)
            }
            Err(error) => {
                writeln!(console.out(), "{}", error.to_string().red())?;
                None
            }
        };

        if (2..=10).contains(&remaining) {
            let listed: Vec<&str> = session
                .candidates()
                .iter()
                .map(|index| session.equation(index).text())
                .collect();
            writeln!(console.out(), "Remaining: {}", listed.join(", "))?;
        }

        let Some(input) = console.ask("Guess")? else {
            return Ok(PlayOutcome::Quit);
        };

        let guess = match input.as_str() {
            "quit" | "q" | "exit" => return Ok(PlayOutcome::Quit),
            "undo" | "u" => {
                match session.undo() {
                    Some(round) => writeln!(
                        console.out(),
                        "Undid {}",
                        session.equation(round.guess)
                    )?,
                    None => writeln!(console.out(), "Nothing to undo")?,
                }
                continue;
            }
            "new" | "n" => {
                session.reset();
                writeln!(console.out(), "New game started")?;
                continue;
            }
            "" => match suggestion {
                Some(text) => text.to_string(),
                None => continue,
            },
            other => other.to_string(),
        };

        let Some(hint) = console.ask("Hint")? else {
            return Ok(PlayOutcome::Quit);
        };

        match session.record_hint(&guess, &hint) {
            Ok(round) if session.is_solved() => {
                let guesses = session.rounds().len();
                let noun = if guesses == 1 { "guess" } else { "guesses" };
                writeln!(
                    console.out(),
                    "\n{} {}",
                    colored_equation(&guess, round.code, length),
                    format!("Solved in {guesses} {noun}!").green().bold()
                )?;
                return Ok(PlayOutcome::Solved { guesses });
            }
            Ok(round) => {
                writeln!(
                    console.out(),
                    "{guess} {}  {} → {} candidates",
                    code_to_emoji(round.code, length),
                    round.before,
                    round.after
                )?;
            }
            Err(error) => writeln!(console.out(), "{}", error.to_string().red())?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::ApproximateStrategy;
    use crate::universe::{FeedbackLookup, Universe};

    fn play(universe: &Universe, script: &str) -> (PlayOutcome, String) {
        let mut session = Session::new(ApproximateStrategy, universe, universe);
        let mut console = Console::new(script.as_bytes(), Vec::new());
        let outcome = run_play(&mut session, &mut console).unwrap();
        (outcome, String::from_utf8(console.into_output()).unwrap())
    }

    #[test]
    fn blank_guess_plays_suggestion() {
        let universe = Universe::generate(5).unwrap();
        let (outcome, _) = play(&universe, "\nGGGGG\n");
        assert_eq!(outcome, PlayOutcome::Solved { guesses: 1 });
    }

    #[test]
    fn two_round_game() {
        let universe = Universe::generate(5).unwrap();
        let guess = universe.index_of("1+2=3").unwrap();
        let target = universe.index_of("2+1=3").unwrap();
        let hint = universe.code(guess, target).to_hint(5);

        let (outcome, output) = play(&universe, &format!("1+2=3\n{hint}\n2+1=3\nGGGGG\n"));
        assert_eq!(outcome, PlayOutcome::Solved { guesses: 2 });
        assert!(output.contains("Turn 2"));
    }

    #[test]
    fn bad_input_is_reported_and_game_continues() {
        let universe = Universe::generate(5).unwrap();
        let (outcome, output) = play(&universe, "1+2=3\nGGG\n1+2=4\nGGGGG\n1+2=3\nBBBBB\nquit\n");

        assert_eq!(outcome, PlayOutcome::Quit);
        assert!(output.contains("Hint must be exactly 5 symbols long"));
        assert!(output.contains("not a valid equation"));
        assert!(output.contains("No equation is consistent"));
    }

    #[test]
    fn undo_and_new() {
        let universe = Universe::generate(5).unwrap();
        let (outcome, output) = play(&universe, "undo\n1+2=3\nPGPGG\nundo\nnew\n");

        assert_eq!(outcome, PlayOutcome::Quit);
        assert!(output.contains("Nothing to undo"));
        assert!(output.contains("Undid 1+2=3"));
        assert!(output.contains("New game started"));
    }
}
