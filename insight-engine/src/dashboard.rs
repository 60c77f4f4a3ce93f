//! FILENAME: insight-engine/src/dashboard.rs
//! PURPOSE: Builds a complete `DashboardSnapshot` from a table and a filter.
//! CONTEXT: The single entry point callers use. Applies the filter once, runs
//! every aggregation over the same filtered view, attaches the summary
//! sentence to each table, and bundles the result with the KPI counters.

use engine::{BaseTable, FilterSelection, FilteredView};

use crate::aggregate;
use crate::geo;
use crate::summary;
use crate::view::{DashboardSnapshot, InsightView};

/// Runs the whole pipeline for one filter selection.
///
/// Each aggregation sees the identical filtered view, so the KPI numbers and
/// every chart agree with each other. The ranking view reuses the overall
/// location leader as its summary; the map view summarizes all locations even
/// when some of them cannot be drawn.
pub fn render_dashboard(table: &BaseTable, selection: &FilterSelection) -> DashboardSnapshot {
    let view = FilteredView::new(table, selection);
    log::debug!(
        "rebuilding dashboard: {} of {} rows pass the filter",
        view.len(),
        view.base_len()
    );

    let age = aggregate::age_distribution(&view);
    let ranking = aggregate::location_ranking(&view);
    let locations = aggregate::location_totals(&view);
    let categories = aggregate::category_totals(&view);
    let payment = aggregate::payment_share(&view);
    let seasonal = aggregate::seasonal_spend(&view);
    let life_stages = aggregate::life_stage_matrix(&view);
    let state_map = geo::state_transaction_map(&locations);

    let quick_insight = summary::quick_insight(&age, &locations, &categories);
    let age_text = summary::age_summary(&age);
    let ranking_text = summary::location_summary(&locations);
    let map_text = summary::map_summary(&locations);
    let payment_text = summary::payment_summary(&payment);
    let seasonal_text = summary::seasonal_summary(&seasonal);
    let life_stage_text = summary::life_stage_summary(&life_stages);

    DashboardSnapshot {
        filtered_rows: view.len(),
        base_rows: view.base_len(),
        active_categories: categories.rows.len(),
        active_locations: locations.rows.len(),
        quick_insight,
        age: InsightView::new(age, age_text),
        locations_by_category: InsightView::new(ranking, ranking_text),
        state_map: InsightView::new(state_map, map_text),
        payment: InsightView::new(payment, payment_text),
        seasonal: InsightView::new(seasonal, seasonal_text),
        life_stages: InsightView::new(life_stages, life_stage_text),
    }
}
