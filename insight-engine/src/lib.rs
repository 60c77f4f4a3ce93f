//! FILENAME: insight-engine/src/lib.rs
//! Aggregation and insight subsystem for the shopping-behavior dashboard.
//!
//! This crate turns a filtered view of purchase transactions into the typed
//! tables and conclusion sentences the dashboard displays. It depends on
//! `engine` only for shared types (Record, BaseTable, FilteredView).
//!
//! Layers:
//! - `aggregate`: Typed group-by results (WHAT each chart plots)
//! - `summary`: Conclusion sentences derived from those results
//! - `geo`: US state reference tables and the map projection
//! - `view`: Renderer-facing (table, summary) pairs
//! - `dashboard`: Runs the whole pipeline for one filter selection

pub mod aggregate;
pub mod dashboard;
pub mod geo;
pub mod summary;
pub mod view;

pub use aggregate::*;
pub use dashboard::render_dashboard;
pub use geo::{
    state_abbr, state_centroid, state_transaction_map, StateCount, StateMarker,
    StateTransactionMap, MAP_MARKER_COUNT, STATE_CENTROIDS, US_STATE_ABBR,
};
pub use summary::{
    age_summary, life_stage_summary, location_summary, map_summary, payment_summary,
    quick_insight, seasonal_summary,
};
pub use view::{DashboardSnapshot, InsightView};
