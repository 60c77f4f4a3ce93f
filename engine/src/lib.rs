//! FILENAME: engine/src/lib.rs
//! PURPOSE: Main library entry point for the shopping-behavior engine.
//! CONTEXT: Re-exports public types and modules for use by other crates.

pub mod buckets;
pub mod filter;
pub mod record;
pub mod table;

// Re-export commonly used types at the crate root
pub use buckets::{Decade, LifeStage};
pub use filter::{FilterSelection, FilteredView};
pub use record::{Record, Transaction};
pub use table::BaseTable;
