//! FILENAME: insight-engine/src/summary.rs
//! PURPOSE: Natural-language conclusions for each aggregated view.
//! CONTEXT: One pure formatting function per view. Each returns a fixed
//! fallback sentence when its aggregation came out empty, and otherwise names
//! the dominant group with its count and, where meaningful, its share of the
//! filtered rows (one decimal place) or its mean spend (two decimal places,
//! dollar-prefixed).

use crate::aggregate::{
    AgeDistribution, CategoryTotals, LifeStageMatrix, LocationTotals, PaymentShare, SeasonalSpend,
};

fn percent_of(count: u64, total: u64) -> f64 {
    (count as f64 / total as f64) * 100.0
}

/// Names the dominant decade bucket and its share of the filtered rows.
pub fn age_summary(distribution: &AgeDistribution) -> String {
    let top = match distribution.dominant() {
        Some(top) => top,
        None => return "Not enough age data to analyze.".to_string(),
    };
    let percent = percent_of(top.count, distribution.total);
    format!(
        "The {} age group dominates with {} purchases ({:.1}%), making it the most active customer segment under the current filter.",
        top.decade, top.count, percent
    )
}

/// Names the single busiest location across the whole filtered view.
pub fn location_summary(totals: &LocationTotals) -> String {
    let top = match totals.dominant() {
        Some(top) => top,
        None => return "No location data to analyze.".to_string(),
    };
    format!(
        "The location with the most transactions is {} with {} purchases, making it the prime target for marketing activity.",
        top.location, top.count
    )
}

/// Lists the three highest-count locations as "name (count)" entries.
/// Fewer than three distinct locations list only what exists.
pub fn map_summary(totals: &LocationTotals) -> String {
    if totals.rows.is_empty() {
        return "Not enough location data to analyze on the map.".to_string();
    }
    let listed: Vec<String> = totals
        .top(3)
        .iter()
        .map(|row| format!("{} ({})", row.location, row.count))
        .collect();
    format!(
        "The three states with the most transactions are: {}. Shopping activity is strongly concentrated in those regions.",
        listed.join(", ")
    )
}

/// Names the most used payment method and its share of the filtered rows.
pub fn payment_summary(share: &PaymentShare) -> String {
    let top = match share.dominant() {
        Some(top) => top,
        None => return "No payment method data to analyze.".to_string(),
    };
    let percent = share.share(top);
    format!(
        "The most used payment method is {} with {} transactions ({:.1}%), showing a strong customer preference for that method.",
        top.payment_method, top.count, percent
    )
}

/// Names the (category, season) pair with the globally highest mean spend.
pub fn seasonal_summary(spend: &SeasonalSpend) -> String {
    let (category, season, mean) = match spend.dominant() {
        Some(peak) => peak,
        None => return "Not enough data to analyze seasonal patterns.".to_string(),
    };
    format!(
        "The {} category reaches its highest average spend in {}, at about ${:.2}, pointing to a clear seasonal pattern for that category.",
        category, season, mean
    )
}

/// Names the (life stage, category) cell with the most purchases.
pub fn life_stage_summary(matrix: &LifeStageMatrix) -> String {
    let (stage, category, count) = match matrix.dominant() {
        Some(top) => top,
        None => return "Not enough data to analyze products by age group.".to_string(),
    };
    format!(
        "The {} age group buys {} most often, with {} purchases, showing a clear product preference by age segment.",
        stage, category, count
    )
}

/// The headline above the charts: dominant age share, busiest location,
/// most purchased category, in one breath.
pub fn quick_insight(
    age: &AgeDistribution,
    locations: &LocationTotals,
    categories: &CategoryTotals,
) -> String {
    let (top_age, top_location, top_category) =
        match (age.dominant(), locations.dominant(), categories.dominant()) {
            (Some(a), Some(l), Some(c)) => (a, l, c),
            _ => return "Not enough data after filtering to produce a quick insight.".to_string(),
        };
    let age_percent = percent_of(top_age.count, age.total);
    format!(
        "The dominant age group right now is {} with about {:.1}% of filtered transactions. The location with the most transactions is {} ({} transactions), and the most purchased category is {} ({} transactions).",
        top_age.decade,
        age_percent,
        top_location.location,
        top_location.count,
        top_category.category,
        top_category.count
    )
}
