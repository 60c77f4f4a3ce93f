//! FILENAME: insight-engine/src/aggregate.rs
//! Aggregation operations - typed group-by computations over a filtered view.
//!
//! Each analytical question gets its own function returning its own result
//! struct; there is no generic pivot machinery. All of them recompute from
//! scratch on every call and return an empty result (never an error) when
//! the view has no rows.
//!
//! Ordering rules:
//! - Count maps store groups in first-encounter order, which is what makes
//!   "dominant = first maximum in stored order" a deterministic tie-break.
//! - The age distribution is sorted by bucket; the two 2D tables sort their
//!   axes ascending.

use engine::{Decade, FilteredView, LifeStage};
use rustc_hash::FxHashMap;
use serde::Serialize;
use smallvec::SmallVec;

/// Cap on ranked locations kept per category.
pub const TOP_LOCATIONS_PER_CATEGORY: usize = 5;

// ============================================================================
// RESULT TYPES
// ============================================================================

/// One decade bucket and its purchase count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecadeCount {
    pub decade: Decade,
    pub count: u64,
}

/// Purchases per decade bucket, buckets ascending. Only observed buckets
/// appear; `total` is the filtered row count every percentage divides by.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeDistribution {
    pub rows: Vec<DecadeCount>,
    pub total: u64,
}

impl AgeDistribution {
    /// Highest-count bucket; the lowest such bucket wins ties.
    pub fn dominant(&self) -> Option<&DecadeCount> {
        self.rows
            .iter()
            .reduce(|best, row| if row.count > best.count { row } else { best })
    }
}

/// One location and its purchase count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationCount {
    pub location: String,
    pub count: u64,
}

/// Purchases per location, in first-encounter order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationTotals {
    pub rows: Vec<LocationCount>,
}

impl LocationTotals {
    /// Highest-count location; the first-encountered one wins ties.
    pub fn dominant(&self) -> Option<&LocationCount> {
        self.rows
            .iter()
            .reduce(|best, row| if row.count > best.count { row } else { best })
    }

    /// The `n` highest-count locations, descending; equal counts keep their
    /// stored order.
    pub fn top(&self, n: usize) -> Vec<&LocationCount> {
        let mut ranked: Vec<&LocationCount> = self.rows.iter().collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(n);
        ranked
    }
}

/// The ranked locations for one category, at most
/// [`TOP_LOCATIONS_PER_CATEGORY`] of them, counts non-increasing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRanking {
    pub category: String,
    pub locations: SmallVec<[LocationCount; TOP_LOCATIONS_PER_CATEGORY]>,
}

/// Per-category location rankings, categories ascending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryLocationRanking {
    pub groups: Vec<CategoryRanking>,
}

/// One payment method and its transaction count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentCount {
    pub payment_method: String,
    pub count: u64,
}

/// Transactions per payment method, in first-encounter order; `total` is
/// the percentage denominator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentShare {
    pub rows: Vec<PaymentCount>,
    pub total: u64,
}

impl PaymentShare {
    /// Most used method; the first-encountered one wins ties.
    pub fn dominant(&self) -> Option<&PaymentCount> {
        self.rows
            .iter()
            .reduce(|best, row| if row.count > best.count { row } else { best })
    }

    /// Percentage of the filtered rows a method accounts for.
    pub fn share(&self, row: &PaymentCount) -> f64 {
        if self.total > 0 {
            (row.count as f64 / self.total as f64) * 100.0
        } else {
            0.0
        }
    }
}

/// One product category and its purchase count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

/// Purchases per category, in first-encounter order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotals {
    pub rows: Vec<CategoryCount>,
}

impl CategoryTotals {
    /// Most purchased category; the first-encountered one wins ties.
    pub fn dominant(&self) -> Option<&CategoryCount> {
        self.rows
            .iter()
            .reduce(|best, row| if row.count > best.count { row } else { best })
    }
}

/// Mean purchase amount per (category, season), both axes ascending.
///
/// A cell is `None` when no filtered row matched that pair; absence is
/// meaningful and never coerced to 0.0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalSpend {
    pub categories: Vec<String>,
    pub seasons: Vec<String>,
    pub cells: Vec<Vec<Option<f64>>>,
}

impl SeasonalSpend {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// The (category, season) pair with the globally highest mean spend.
    /// Scans categories then seasons in stored order, so the first peak
    /// wins ties.
    pub fn dominant(&self) -> Option<(&str, &str, f64)> {
        let mut best: Option<(&str, &str, f64)> = None;
        for (r, category) in self.categories.iter().enumerate() {
            for (c, season) in self.seasons.iter().enumerate() {
                if let Some(mean) = self.cells[r][c] {
                    let better = match best {
                        Some((_, _, best_mean)) => mean > best_mean,
                        None => true,
                    };
                    if better {
                        best = Some((category, season, mean));
                    }
                }
            }
        }
        best
    }
}

/// Purchase counts per (life stage, category).
///
/// All six stages are always present as rows, zero-filled where nothing
/// matched; columns are the categories observed among stage-classified rows,
/// ascending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LifeStageMatrix {
    pub stages: Vec<LifeStage>,
    pub categories: Vec<String>,
    pub counts: Vec<Vec<u64>>,
}

impl LifeStageMatrix {
    /// The (stage, category) cell with the highest count, scanning stages
    /// then categories so the first maximum wins ties. `None` when every
    /// cell is zero.
    pub fn dominant(&self) -> Option<(LifeStage, &str, u64)> {
        let mut best: Option<(LifeStage, &str, u64)> = None;
        for (r, stage) in self.stages.iter().enumerate() {
            for (c, category) in self.categories.iter().enumerate() {
                let count = self.counts[r][c];
                if count == 0 {
                    continue;
                }
                let better = match best {
                    Some((_, _, best_count)) => count > best_count,
                    None => true,
                };
                if better {
                    best = Some((*stage, category, count));
                }
            }
        }
        best
    }
}

// ============================================================================
// ACCUMULATION HELPERS
// ============================================================================

/// Accumulator holding the pieces of a mean.
#[derive(Debug, Clone, Copy, Default)]
struct MeanAccumulator {
    sum: f64,
    count: u64,
}

impl MeanAccumulator {
    fn add(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    fn mean(&self) -> f64 {
        if self.count > 0 {
            self.sum / self.count as f64
        } else {
            0.0
        }
    }
}

/// Counts values preserving the order they first appear in.
fn counts_in_encounter_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, u64)> {
    let mut index: FxHashMap<&'a str, usize> = FxHashMap::default();
    let mut rows: Vec<(String, u64)> = Vec::new();
    for value in values {
        match index.get(value) {
            Some(&slot) => rows[slot].1 += 1,
            None => {
                index.insert(value, rows.len());
                rows.push((value.to_string(), 1));
            }
        }
    }
    rows
}

// ============================================================================
// AGGREGATION OPERATIONS
// ============================================================================

/// Purchases per decade bucket, buckets ascending.
pub fn age_distribution(view: &FilteredView<'_>) -> AgeDistribution {
    let mut counts: FxHashMap<Decade, u64> = FxHashMap::default();
    for record in view.records() {
        *counts.entry(record.decade).or_insert(0) += 1;
    }

    let mut rows: Vec<DecadeCount> = counts
        .into_iter()
        .map(|(decade, count)| DecadeCount { decade, count })
        .collect();
    rows.sort_unstable_by_key(|row| row.decade);

    AgeDistribution {
        rows,
        total: view.len() as u64,
    }
}

/// The five busiest locations per category: categories ascending, counts
/// descending within a category, equal counts in first-encounter order.
pub fn location_ranking(view: &FilteredView<'_>) -> CategoryLocationRanking {
    let mut index: FxHashMap<(&str, &str), usize> = FxHashMap::default();
    let mut pairs: Vec<(String, String, u64)> = Vec::new();
    for record in view.records() {
        let key = (record.category.as_str(), record.location.as_str());
        match index.get(&key) {
            Some(&slot) => pairs[slot].2 += 1,
            None => {
                index.insert(key, pairs.len());
                pairs.push((record.category.clone(), record.location.clone(), 1));
            }
        }
    }

    // Stable sort: equal (category, count) pairs keep encounter order.
    pairs.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| b.2.cmp(&a.2)));

    let mut groups: Vec<CategoryRanking> = Vec::new();
    for (category, location, count) in pairs {
        match groups.last_mut() {
            Some(group) if group.category == category => {
                if group.locations.len() < TOP_LOCATIONS_PER_CATEGORY {
                    group.locations.push(LocationCount { location, count });
                }
            }
            _ => {
                let mut locations = SmallVec::new();
                locations.push(LocationCount { location, count });
                groups.push(CategoryRanking {
                    category,
                    locations,
                });
            }
        }
    }

    CategoryLocationRanking { groups }
}

/// Purchases per location, in first-encounter order.
pub fn location_totals(view: &FilteredView<'_>) -> LocationTotals {
    let rows = counts_in_encounter_order(view.records().iter().map(|r| r.location.as_str()))
        .into_iter()
        .map(|(location, count)| LocationCount { location, count })
        .collect();
    LocationTotals { rows }
}

/// Transactions per payment method, in first-encounter order.
pub fn payment_share(view: &FilteredView<'_>) -> PaymentShare {
    let rows = counts_in_encounter_order(view.records().iter().map(|r| r.payment_method.as_str()))
        .into_iter()
        .map(|(payment_method, count)| PaymentCount {
            payment_method,
            count,
        })
        .collect();
    PaymentShare {
        rows,
        total: view.len() as u64,
    }
}

/// Purchases per category, in first-encounter order.
pub fn category_totals(view: &FilteredView<'_>) -> CategoryTotals {
    let rows = counts_in_encounter_order(view.records().iter().map(|r| r.category.as_str()))
        .into_iter()
        .map(|(category, count)| CategoryCount { category, count })
        .collect();
    CategoryTotals { rows }
}

/// Mean purchase amount per (category, season).
pub fn seasonal_spend(view: &FilteredView<'_>) -> SeasonalSpend {
    let mut accumulators: FxHashMap<(&str, &str), MeanAccumulator> = FxHashMap::default();
    for record in view.records() {
        accumulators
            .entry((record.category.as_str(), record.season.as_str()))
            .or_default()
            .add(record.purchase_amount);
    }

    let mut categories: Vec<String> = accumulators.keys().map(|(c, _)| c.to_string()).collect();
    categories.sort_unstable();
    categories.dedup();
    let mut seasons: Vec<String> = accumulators.keys().map(|(_, s)| s.to_string()).collect();
    seasons.sort_unstable();
    seasons.dedup();

    let cells = categories
        .iter()
        .map(|category| {
            seasons
                .iter()
                .map(|season| {
                    accumulators
                        .get(&(category.as_str(), season.as_str()))
                        .map(MeanAccumulator::mean)
                })
                .collect()
        })
        .collect();

    SeasonalSpend {
        categories,
        seasons,
        cells,
    }
}

/// Purchase counts per (life stage, category), zero-filled.
///
/// Rows without a life stage neither count into any cell nor contribute
/// their category as a column.
pub fn life_stage_matrix(view: &FilteredView<'_>) -> LifeStageMatrix {
    let mut observed: Vec<&str> = view
        .records()
        .iter()
        .filter(|r| r.life_stage.is_some())
        .map(|r| r.category.as_str())
        .collect();
    observed.sort_unstable();
    observed.dedup();
    let categories: Vec<String> = observed.iter().map(|c| c.to_string()).collect();

    let column: FxHashMap<&str, usize> = observed
        .iter()
        .enumerate()
        .map(|(i, category)| (*category, i))
        .collect();

    let mut counts = vec![vec![0u64; categories.len()]; LifeStage::ALL.len()];
    for record in view.records() {
        if let Some(stage) = record.life_stage {
            if let Some(&col) = column.get(record.category.as_str()) {
                counts[stage.index()][col] += 1;
            }
        }
    }

    LifeStageMatrix {
        stages: LifeStage::ALL.to_vec(),
        categories,
        counts,
    }
}
