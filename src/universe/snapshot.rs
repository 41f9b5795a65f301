//! On-disk snapshots of a universe and its feedback matrix
//!
//! A snapshot directory holds three files per equation length `L`:
//! - `equations-L.txt`: one equation per line, in universe order
//! - `matrix-L.bin.gz`: gzip-compressed row-major little-endian `u16` codes
//! - `manifest-L.json`: format version, length, equation count, feedback rule
//!
//! Loading checks every file against the manifest, so a loaded snapshot
//! behaves exactly like freshly computed tables.

use super::{FeedbackLookup, FeedbackMatrix, Universe, UniverseError};
use crate::core::{FeedbackCode, code_space};
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Version written to new manifests; older or newer versions are rejected
pub const FORMAT_VERSION: u32 = 1;

/// Name of the duplicate-handling rule the stored codes were computed with
pub const FEEDBACK_RULE: &str = "strict-single-consumption";

/// Error type for snapshot I/O
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("Manifest could not be read or written: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot file {} not found; run `generate` first", .0.display())]
    Missing(PathBuf),

    #[error("Corrupt snapshot: {0}")]
    Corrupt(String),

    #[error("Invalid equation list: {0}")]
    Universe(#[from] UniverseError),
}

/// Describes the contents of one snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub format_version: u32,
    pub length: usize,
    pub equations: usize,
    pub feedback_rule: String,
}

impl Manifest {
    fn describe(universe: &Universe) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            length: universe.length(),
            equations: universe.len(),
            feedback_rule: FEEDBACK_RULE.to_string(),
        }
    }
}

/// Universe and matrix loaded together
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub universe: Universe,
    pub matrix: FeedbackMatrix,
}

/// File locations of the snapshot for one length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotPaths {
    pub equations: PathBuf,
    pub matrix: PathBuf,
    pub manifest: PathBuf,
}

impl SnapshotPaths {
    #[must_use]
    pub fn new(dir: &Path, length: usize) -> Self {
        Self {
            equations: dir.join(format!("equations-{length}.txt")),
            matrix: dir.join(format!("matrix-{length}.bin.gz")),
            manifest: dir.join(format!("manifest-{length}.json")),
        }
    }
}

/// Whether a complete snapshot for `length` is present in `dir`
#[must_use]
pub fn exists(dir: &Path, length: usize) -> bool {
    let paths = SnapshotPaths::new(dir, length);
    paths.equations.is_file() && paths.matrix.is_file() && paths.manifest.is_file()
}

/// Write `universe` and `matrix` to `dir`, creating it if needed
///
/// # Errors
/// Returns `SnapshotError::Corrupt` if the matrix does not belong to the
/// universe, or `SnapshotError::Io` if any file cannot be written.
pub fn save(dir: &Path, universe: &Universe, matrix: &FeedbackMatrix) -> Result<(), SnapshotError> {
    if matrix.size() != universe.len() {
        return Err(SnapshotError::Corrupt(format!(
            "matrix covers {} equations, universe has {}",
            matrix.size(),
            universe.len()
        )));
    }

    fs::create_dir_all(dir).map_err(|source| io_error(dir, source))?;
    let paths = SnapshotPaths::new(dir, universe.length());

    write_equations(&paths.equations, universe)?;
    write_matrix(&paths.matrix, matrix)?;

    let file = File::create(&paths.manifest).map_err(|source| io_error(&paths.manifest, source))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &Manifest::describe(universe))?;

    tracing::info!(
        dir = %dir.display(),
        length = universe.length(),
        equations = universe.len(),
        "saved snapshot"
    );

    Ok(())
}

/// Load the universe and matrix for `length` from `dir`
///
/// # Errors
/// Returns `SnapshotError::Missing` if a file is absent, and
/// `SnapshotError::Corrupt` if the files disagree with the manifest or
/// each other.
pub fn load(dir: &Path, length: usize) -> Result<Snapshot, SnapshotError> {
    let paths = SnapshotPaths::new(dir, length);
    let universe = load_checked_universe(&paths, length)?;
    let matrix = read_matrix(&paths.matrix, universe.len(), length)?;

    // Spot check the diagonal against the stored equations
    if let Some(i) = (0..universe.len()).find(|&i| !matrix.code(i, i).is_perfect(length)) {
        return Err(SnapshotError::Corrupt(format!(
            "matrix entry for '{}' against itself is not all green",
            universe.equation(i)
        )));
    }

    tracing::info!(
        dir = %dir.display(),
        length,
        equations = universe.len(),
        "loaded snapshot"
    );

    Ok(Snapshot { universe, matrix })
}

/// Load only the equation list for `length` from `dir`
///
/// # Errors
/// As [`load`], without touching the matrix file.
pub fn load_universe(dir: &Path, length: usize) -> Result<Universe, SnapshotError> {
    load_checked_universe(&SnapshotPaths::new(dir, length), length)
}

fn load_checked_universe(paths: &SnapshotPaths, length: usize) -> Result<Universe, SnapshotError> {
    let manifest = read_manifest(&paths.manifest)?;
    if manifest.format_version != FORMAT_VERSION {
        return Err(SnapshotError::Corrupt(format!(
            "format version {} is not supported (expected {FORMAT_VERSION})",
            manifest.format_version
        )));
    }
    if manifest.length != length {
        return Err(SnapshotError::Corrupt(format!(
            "manifest is for length {}, expected {length}",
            manifest.length
        )));
    }
    if manifest.feedback_rule != FEEDBACK_RULE {
        return Err(SnapshotError::Corrupt(format!(
            "feedback rule '{}' is not supported",
            manifest.feedback_rule
        )));
    }

    let text = fs::read_to_string(require(&paths.equations)?)
        .map_err(|source| io_error(&paths.equations, source))?;
    let universe = Universe::from_texts(length, text.lines())?;

    if universe.len() != manifest.equations {
        return Err(SnapshotError::Corrupt(format!(
            "manifest lists {} equations, file has {}",
            manifest.equations,
            universe.len()
        )));
    }

    Ok(universe)
}

fn read_manifest(path: &Path) -> Result<Manifest, SnapshotError> {
    let file = File::open(require(path)?).map_err(|source| io_error(path, source))?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

fn write_equations(path: &Path, universe: &Universe) -> Result<(), SnapshotError> {
    let file = File::create(path).map_err(|source| io_error(path, source))?;
    let mut writer = BufWriter::new(file);

    for equation in universe {
        writeln!(writer, "{equation}").map_err(|source| io_error(path, source))?;
    }

    writer.flush().map_err(|source| io_error(path, source))
}

fn write_matrix(path: &Path, matrix: &FeedbackMatrix) -> Result<(), SnapshotError> {
    let file = File::create(path).map_err(|source| io_error(path, source))?;
    let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
    let mut bytes = Vec::with_capacity(matrix.size() * 2);

    for guess in 0..matrix.size() {
        bytes.clear();
        bytes.extend(matrix.row(guess).iter().flat_map(|code| code.to_le_bytes()));
        encoder
            .write_all(&bytes)
            .map_err(|source| io_error(path, source))?;
    }

    encoder
        .finish()
        .and_then(|mut writer| writer.flush())
        .map_err(|source| io_error(path, source))
}

fn read_matrix(path: &Path, size: usize, length: usize) -> Result<FeedbackMatrix, SnapshotError> {
    let file = File::open(require(path)?).map_err(|source| io_error(path, source))?;
    let mut decoder = GzDecoder::new(BufReader::new(file));

    let limit = code_space(length);
    let mut codes = Vec::with_capacity(size * size);
    let mut row = vec![0u8; size * 2];

    for guess in 0..size {
        decoder.read_exact(&mut row).map_err(|source| match source.kind() {
            io::ErrorKind::UnexpectedEof => {
                SnapshotError::Corrupt(format!("matrix ends after {guess} of {size} rows"))
            }
            _ => io_error(path, source),
        })?;

        for pair in row.chunks_exact(2) {
            let code = u16::from_le_bytes([pair[0], pair[1]]);
            if !FeedbackCode::new(code).fits(length) {
                return Err(SnapshotError::Corrupt(format!(
                    "code {code} in row {guess} exceeds {}",
                    limit - 1
                )));
            }
            codes.push(code);
        }
    }

    let mut trailing = [0u8; 1];
    if decoder
        .read(&mut trailing)
        .map_err(|source| io_error(path, source))?
        != 0
    {
        return Err(SnapshotError::Corrupt(format!(
            "matrix holds more than {size} rows"
        )));
    }

    FeedbackMatrix::from_codes(size, codes)
        .ok_or_else(|| SnapshotError::Corrupt("matrix is not square".to_string()))
}

fn require(path: &Path) -> Result<&Path, SnapshotError> {
    if path.is_file() {
        Ok(path)
    } else {
        Err(SnapshotError::Missing(path.to_path_buf()))
    }
}

fn io_error(path: &Path, source: io::Error) -> SnapshotError {
    SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_tables() -> (Universe, FeedbackMatrix) {
        let universe = Universe::generate(5).unwrap();
        let matrix = FeedbackMatrix::build(&universe);
        (universe, matrix)
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let (universe, matrix) = small_tables();

        assert!(!exists(dir.path(), 5));
        save(dir.path(), &universe, &matrix).unwrap();
        assert!(exists(dir.path(), 5));

        let snapshot = load(dir.path(), 5).unwrap();
        assert_eq!(snapshot.universe.equations(), universe.equations());
        assert_eq!(snapshot.matrix, matrix);
    }

    #[test]
    fn load_universe_skips_matrix() {
        let dir = tempfile::tempdir().unwrap();
        let (universe, matrix) = small_tables();
        save(dir.path(), &universe, &matrix).unwrap();

        fs::remove_file(SnapshotPaths::new(dir.path(), 5).matrix).unwrap();
        let loaded = load_universe(dir.path(), 5).unwrap();
        assert_eq!(loaded.len(), universe.len());
        assert!(matches!(load(dir.path(), 5), Err(SnapshotError::Missing(_))));
    }

    #[test]
    fn missing_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(load(dir.path(), 8), Err(SnapshotError::Missing(_))));
    }

    #[test]
    fn manifest_length_must_match() {
        let dir = tempfile::tempdir().unwrap();
        let (universe, matrix) = small_tables();
        save(dir.path(), &universe, &matrix).unwrap();

        let paths = SnapshotPaths::new(dir.path(), 5);
        let manifest = fs::read_to_string(&paths.manifest).unwrap();
        fs::write(&paths.manifest, manifest.replace("\"length\": 5", "\"length\": 6")).unwrap();

        assert!(matches!(load(dir.path(), 5), Err(SnapshotError::Corrupt(_))));
    }

    #[test]
    fn truncated_equation_list() {
        let dir = tempfile::tempdir().unwrap();
        let (universe, matrix) = small_tables();
        save(dir.path(), &universe, &matrix).unwrap();

        let paths = SnapshotPaths::new(dir.path(), 5);
        let text = fs::read_to_string(&paths.equations).unwrap();
        let shorter: Vec<&str> = text.lines().skip(1).collect();
        fs::write(&paths.equations, shorter.join("\n")).unwrap();

        assert!(matches!(load(dir.path(), 5), Err(SnapshotError::Corrupt(_))));
    }

    #[test]
    fn mismatched_matrix_is_rejected_on_save() {
        let dir = tempfile::tempdir().unwrap();
        let universe = Universe::generate(5).unwrap();
        let other = FeedbackMatrix::build(&Universe::from_texts(5, ["1+2=3"]).unwrap());

        assert!(matches!(
            save(dir.path(), &universe, &other),
            Err(SnapshotError::Corrupt(_))
        ));
    }

    #[test]
    fn truncated_matrix_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let (universe, matrix) = small_tables();
        save(dir.path(), &universe, &matrix).unwrap();

        let paths = SnapshotPaths::new(dir.path(), 5);
        let half = FeedbackMatrix::from_codes(1, vec![FeedbackCode::perfect(5).value()]).unwrap();
        write_matrix(&paths.matrix, &half).unwrap();

        assert!(matches!(load(dir.path(), 5), Err(SnapshotError::Corrupt(_))));
    }
}
