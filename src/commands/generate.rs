//! Snapshot generation command
//!
//! Enumerates the universe, builds the feedback matrix and saves both.

use crate::output::formatters::progress_bar;
use crate::universe::{FeedbackMatrix, Universe, snapshot};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// What a generation run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    pub length: usize,
    pub equations: usize,
    pub directory: PathBuf,
    pub duration: Duration,
}

/// Generate and save the snapshot for `length` in `dir`
///
/// Shows a progress bar while the matrix is built unless `quiet`.
///
/// # Errors
/// Returns an error for an unsupported length or if saving fails.
pub fn run_generate(length: usize, dir: &Path, quiet: bool) -> Result<GenerateSummary> {
    let start = Instant::now();
    let universe = Universe::generate(length)?;

    let progress = if quiet {
        indicatif::ProgressBar::hidden()
    } else {
        progress_bar(universe.len() as u64, "Feedback matrix")
    };
    let matrix = FeedbackMatrix::build_with_progress(&universe, &progress);
    progress.finish_and_clear();

    snapshot::save(dir, &universe, &matrix)
        .with_context(|| format!("Could not save snapshot to {}", dir.display()))?;

    Ok(GenerateSummary {
        length,
        equations: universe.len(),
        directory: dir.to_path_buf(),
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_writes_loadable_snapshot() {
        let dir = tempfile::tempdir().unwrap();

        let summary = run_generate(5, dir.path(), true).unwrap();
        assert!(snapshot::exists(dir.path(), 5));

        let loaded = snapshot::load(dir.path(), 5).unwrap();
        assert_eq!(loaded.universe.len(), summary.equations);
    }

    #[test]
    fn generate_rejects_bad_length() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run_generate(11, dir.path(), true).is_err());
        assert!(!snapshot::exists(dir.path(), 11));
    }
}
