//! FILENAME: dataset/src/error.rs

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("dataset file not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl DatasetError {
    /// True when the error is the absent-file case, which callers treat as
    /// "render the empty state" rather than as a failure.
    pub fn is_missing(&self) -> bool {
        matches!(self, DatasetError::Missing(_))
    }
}
