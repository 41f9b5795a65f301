//! Benchmark command
//!
//! Plays a sample of hidden equations and reports the guess distribution.

use super::solve::{SolveConfig, solve_equation};
use crate::solver::{Session, Strategy};
use crate::universe::{FeedbackLookup, Universe};
use indicatif::ProgressBar;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_equations: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Games solved in each number of guesses
    pub distribution: HashMap<usize, usize>,
    /// Equations not solved within the guess limit
    pub failures: Vec<String>,
    pub duration: Duration,
    pub equations_per_second: f64,
}

/// Pick `count` distinct universe indices at random
///
/// A `seed` makes the sample reproducible. Asking for more than the
/// universe holds returns every index.
#[must_use]
pub fn sample_targets(universe_len: usize, count: usize, seed: Option<u64>) -> Vec<usize> {
    let amount = count.min(universe_len);
    match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            rand::seq::index::sample(&mut rng, universe_len, amount).into_vec()
        }
        None => rand::seq::index::sample(&mut rand::rng(), universe_len, amount).into_vec(),
    }
}

/// Solve every target in turn, resetting one session between games
///
/// `progress` is advanced once per target.
pub fn run_benchmark<S: Strategy>(
    strategy: S,
    universe: &Universe,
    lookup: &dyn FeedbackLookup,
    targets: &[usize],
    progress: &ProgressBar,
) -> BenchmarkResult {
    let start = Instant::now();
    let mut session = Session::new(strategy, universe, lookup);
    let mut total_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut failures = Vec::new();

    for &target in targets {
        let text = universe.equation(target).text().to_string();

        match solve_equation(SolveConfig::new(text.clone()), &mut session) {
            Ok(result) if result.success => {
                let guesses = result.guesses.len();
                total_guesses += guesses;
                *distribution.entry(guesses).or_insert(0) += 1;
            }
            Ok(_) => failures.push(text),
            Err(error) => {
                tracing::warn!(equation = %text, %error, "benchmark game aborted");
                failures.push(text);
            }
        }

        progress.inc(1);
    }

    let duration = start.elapsed();
    let total_equations = targets.len();
    let solved = total_equations - failures.len();

    BenchmarkResult {
        total_equations,
        solved,
        total_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: distribution.keys().copied().min().unwrap_or(0),
        max_guesses: distribution.keys().copied().max().unwrap_or(0),
        distribution,
        failures,
        duration,
        equations_per_second: total_equations as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
