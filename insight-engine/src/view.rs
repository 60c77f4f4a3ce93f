//! FILENAME: insight-engine/src/view.rs
//! PURPOSE: Renderer-facing output types for the dashboard.
//! CONTEXT: The boundary between computation and presentation. Every chart is
//! delivered as an `InsightView`: the typed table a renderer draws from plus
//! the finished conclusion sentence shown beside it. `DashboardSnapshot`
//! bundles one of each view together with the headline KPI numbers.

use serde::Serialize;

use crate::aggregate::{
    AgeDistribution, CategoryLocationRanking, LifeStageMatrix, PaymentShare, SeasonalSpend,
};
use crate::geo::StateTransactionMap;

/// One chart's worth of output: the aggregated table and its summary line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightView<T> {
    pub table: T,
    pub summary: String,
}

impl<T> InsightView<T> {
    pub fn new(table: T, summary: String) -> Self {
        InsightView { table, summary }
    }
}

/// Everything the dashboard shows for one filter selection.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    /// How many rows passed the filter.
    pub filtered_rows: usize,
    /// How many rows the full dataset holds.
    pub base_rows: usize,
    /// Distinct categories among the filtered rows.
    pub active_categories: usize,
    /// Distinct locations among the filtered rows.
    pub active_locations: usize,
    /// Headline sentence combining age, location and category leaders.
    pub quick_insight: String,

    pub age: InsightView<AgeDistribution>,
    pub locations_by_category: InsightView<CategoryLocationRanking>,
    pub state_map: InsightView<StateTransactionMap>,
    pub payment: InsightView<PaymentShare>,
    pub seasonal: InsightView<SeasonalSpend>,
    pub life_stages: InsightView<LifeStageMatrix>,
}
