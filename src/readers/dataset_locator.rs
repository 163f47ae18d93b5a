use crate::error::{ProcessingError, Result};
use crate::utils::constants::DATASET_EXTENSION;
use std::fs;
use std::path::{Path, PathBuf};

/// Selects a single dataset file from a directory of candidates.
///
/// Candidates are files with the tabular-data extension; exactly one is
/// chosen by the lexicographically smallest file name (byte-wise), so the
/// selection is stable across runs and platforms. Multi-file merging is out
/// of scope.
pub struct DatasetLocator;

impl DatasetLocator {
    pub fn new() -> Self {
        Self
    }

    /// Locate the dataset file, or fail if the directory holds no candidate.
    pub fn locate(&self, dir: &Path) -> Result<PathBuf> {
        let mut candidates: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path
                        .extension()
                        .and_then(|ext| ext.to_str())
                        .is_some_and(|ext| ext == DATASET_EXTENSION)
            })
            .collect();

        candidates.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        candidates
            .into_iter()
            .next()
            .ok_or_else(|| ProcessingError::NoDatasetFound {
                dir: dir.display().to_string(),
            })
    }
}

impl Default for DatasetLocator {
    fn default() -> Self {
        Self::new()
    }
}
