//! FILENAME: dataset/src/lib.rs
//! Shopping dataset loading.
//!
//! Reads the source CSV into the immutable `BaseTable` and caches the result
//! for the lifetime of the process: the parse and bucket derivation run at
//! most once no matter how many times the table is requested.

mod error;
mod reader;

pub use error::DatasetError;
pub use reader::{load_from, read_transactions};

use std::path::Path;

use engine::BaseTable;
use once_cell::sync::OnceCell;

/// Conventional dataset file name, expected next to the executable.
pub const DEFAULT_DATASET_FILE: &str = "shopping_behavior_updated.csv";

/// Process-wide cached load result. Holds the error too, so a failed load is
/// not retried on every access.
static BASE_TABLE: OnceCell<Result<BaseTable, DatasetError>> = OnceCell::new();

/// Returns the process-wide base table, loading [`DEFAULT_DATASET_FILE`] on
/// the first call.
///
/// Every later call returns the same cached outcome, success or failure;
/// no I/O happens after the first call. A [`DatasetError::Missing`] result
/// means the caller should present the empty state, not abort.
pub fn base_table() -> Result<&'static BaseTable, &'static DatasetError> {
    BASE_TABLE
        .get_or_init(|| {
            let result = load_from(Path::new(DEFAULT_DATASET_FILE));
            if let Err(err) = &result {
                log::warn!("dataset unavailable: {}", err);
            }
            result
        })
        .as_ref()
}

/// [`base_table`] for callers that only care whether data is available.
pub fn try_base_table() -> Option<&'static BaseTable> {
    base_table().ok()
}
