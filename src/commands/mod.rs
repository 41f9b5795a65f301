//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod computer;
pub mod console;
pub mod generate;
pub mod play;
pub mod solve;
pub mod stats;

pub use analyze::{AnalysisResult, analyze_equation};
pub use benchmark::{BenchmarkResult, run_benchmark, sample_targets};
pub use computer::{ComputerOutcome, run_computer};
pub use console::Console;
pub use generate::{GenerateSummary, run_generate};
pub use play::{PlayOutcome, run_play};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_equation};
pub use stats::{PositionStats, symbol_statistics};

use crate::config::{SelectionMode, SolverConfig};
use crate::solver::{Session, StrategyType};
use crate::universe::{FeedbackLookup, FeedbackMatrix, Universe, snapshot};
use anyhow::{Context, Result};

/// Universe and, when available, the feedback matrix a command plays with
pub struct Tables {
    universe: Universe,
    matrix: Option<FeedbackMatrix>,
}

impl Tables {
    /// Load the tables `config` asks for from its snapshot directory
    ///
    /// Exact mode needs the saved matrix. Approximate mode only needs the
    /// equations and generates them when no snapshot exists.
    ///
    /// # Errors
    /// Returns an error if a required snapshot is missing or corrupt.
    pub fn load(config: &SolverConfig) -> Result<Self> {
        let dir = &config.snapshot_dir;
        let length = config.length;

        if config.mode.needs_matrix() {
            let loaded = snapshot::load(dir, length).with_context(|| {
                format!(
                    "Exact mode needs the {length}-symbol snapshot in {} \
                     (or use --mode approximate)",
                    dir.display()
                )
            })?;
            return Ok(Self::from_parts(loaded.universe, Some(loaded.matrix)));
        }

        let universe = if snapshot::exists(dir, length) {
            snapshot::load_universe(dir, length)
                .with_context(|| format!("Could not read equations from {}", dir.display()))?
        } else {
            tracing::info!(length, "no snapshot found, generating equations");
            Universe::generate(length)?
        };

        Ok(Self::from_parts(universe, None))
    }

    /// Compute the tables in memory without touching the disk
    ///
    /// # Errors
    /// Returns an error if `length` is not supported.
    pub fn compute(length: usize, mode: SelectionMode) -> Result<Self> {
        let universe = Universe::generate(length)?;
        let matrix = mode.needs_matrix().then(|| FeedbackMatrix::build(&universe));
        Ok(Self::from_parts(universe, matrix))
    }

    #[must_use]
    pub const fn from_parts(universe: Universe, matrix: Option<FeedbackMatrix>) -> Self {
        Self { universe, matrix }
    }

    #[must_use]
    pub const fn universe(&self) -> &Universe {
        &self.universe
    }

    #[must_use]
    pub const fn matrix(&self) -> Option<&FeedbackMatrix> {
        self.matrix.as_ref()
    }

    /// The matrix if loaded, otherwise on-the-fly encoding
    #[must_use]
    pub fn lookup(&self) -> &dyn FeedbackLookup {
        match &self.matrix {
            Some(matrix) => matrix,
            None => &self.universe,
        }
    }

    #[must_use]
    pub fn strategy(&self, mode: SelectionMode) -> StrategyType<'_> {
        StrategyType::from_mode(mode, self.lookup())
    }

    /// A fresh game over these tables
    #[must_use]
    pub fn session(&self, mode: SelectionMode) -> Session<'_, StrategyType<'_>> {
        Session::new(self.strategy(mode), &self.universe, self.lookup())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approximate_mode_generates_without_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let config = SolverConfig::new(5, SelectionMode::Approximate, dir.path()).unwrap();

        let tables = Tables::load(&config).unwrap();
        assert!(tables.matrix().is_none());
        assert!(!tables.universe().is_empty());
    }

    #[test]
    fn exact_mode_requires_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let config = SolverConfig::new(5, SelectionMode::Exact, dir.path()).unwrap();

        let error = Tables::load(&config).err().unwrap();
        assert!(error.to_string().contains("Exact mode needs"));
    }

    #[test]
    fn exact_mode_loads_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let computed = Tables::compute(5, SelectionMode::Exact).unwrap();
        let matrix = computed.matrix().unwrap();
        snapshot::save(dir.path(), computed.universe(), matrix).unwrap();

        let config = SolverConfig::new(5, SelectionMode::Exact, dir.path()).unwrap();
        let loaded = Tables::load(&config).unwrap();
        assert_eq!(loaded.matrix(), Some(matrix));
    }

    #[test]
    fn sessions_start_full() {
        let tables = Tables::compute(5, SelectionMode::Approximate).unwrap();
        let session = tables.session(SelectionMode::Approximate);
        assert_eq!(session.remaining(), tables.universe().len());
    }
}
