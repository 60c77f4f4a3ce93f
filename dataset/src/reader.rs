//! FILENAME: dataset/src/reader.rs

use std::path::Path;

use engine::{BaseTable, Transaction};

use crate::DatasetError;

/// Reads every transaction from a comma-delimited file with a header row.
///
/// Columns are matched by header name; columns the `Transaction` type does
/// not know are skipped. A missing file is reported as
/// [`DatasetError::Missing`] so callers can distinguish "not there yet"
/// from a malformed file.
pub fn read_transactions(path: &Path) -> Result<Vec<Transaction>, DatasetError> {
    if !path.exists() {
        return Err(DatasetError::Missing(path.to_path_buf()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut transactions = Vec::new();
    for row in reader.deserialize() {
        let transaction: Transaction = row?;
        transactions.push(transaction);
    }
    Ok(transactions)
}

/// Loads the dataset at `path` and builds the base table, deriving both age
/// buckets for every row.
pub fn load_from(path: &Path) -> Result<BaseTable, DatasetError> {
    let transactions = read_transactions(path)?;
    let table = BaseTable::from_transactions(transactions);
    log::info!(
        "loaded {} transactions from {} (ages {}-{})",
        table.len(),
        path.display(),
        table.min_age(),
        table.max_age()
    );
    Ok(table)
}
