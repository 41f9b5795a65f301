//! Runtime configuration shared by every command

use crate::core::{DEFAULT_LENGTH, MAX_LENGTH, MIN_LENGTH};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// How the next guess is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum SelectionMode {
    /// Exact entropy over the feedback matrix
    #[default]
    Exact,
    /// Positional entropy over the candidates, no matrix needed
    Approximate,
}

impl SelectionMode {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Approximate => "approximate",
        }
    }

    /// Whether this mode needs the precomputed feedback matrix
    #[must_use]
    pub const fn needs_matrix(self) -> bool {
        matches!(self, Self::Exact)
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SelectionMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" | "entropy" => Ok(Self::Exact),
            "approximate" | "approx" | "positional" => Ok(Self::Approximate),
            other => Err(ConfigError::UnknownMode(other.to_string())),
        }
    }
}

/// Error type for invalid configuration values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Equation length must be {min}-{max}, got {0}", min = MIN_LENGTH, max = MAX_LENGTH)]
    InvalidLength(usize),

    #[error("Unknown selection mode '{0}' (expected 'exact' or 'approximate')")]
    UnknownMode(String),
}

/// Settings every command runs with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Number of symbols per equation
    pub length: usize,
    pub mode: SelectionMode,
    /// Where snapshots are read from and written to
    pub snapshot_dir: PathBuf,
}

impl SolverConfig {
    /// Create a validated configuration
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidLength` if `length` is outside
    /// `MIN_LENGTH..=MAX_LENGTH`.
    ///
    /// # Examples
    /// ```
    /// use nerdle_solver::config::{SelectionMode, SolverConfig};
    ///
    /// let config = SolverConfig::new(6, SelectionMode::Approximate, "snapshots").unwrap();
    /// assert_eq!(config.length, 6);
    /// assert!(SolverConfig::new(12, SelectionMode::Exact, ".").is_err());
    /// ```
    pub fn new(
        length: usize,
        mode: SelectionMode,
        snapshot_dir: impl Into<PathBuf>,
    ) -> Result<Self, ConfigError> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(ConfigError::InvalidLength(length));
        }

        Ok(Self {
            length,
            mode,
            snapshot_dir: snapshot_dir.into(),
        })
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            mode: SelectionMode::default(),
            snapshot_dir: PathBuf::from("."),
        }
    }
}
