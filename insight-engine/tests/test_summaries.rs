//! FILENAME: tests/test_summaries.rs
//! Integration tests for the conclusion sentences attached to each view.

mod common;

use common::{empty_view, full_view, ShoppingFixture};
use engine::{BaseTable, Transaction};
use insight_engine::{
    age_distribution, age_summary, category_totals, life_stage_matrix, life_stage_summary,
    location_ranking, location_summary, location_totals, map_summary, payment_share,
    payment_summary, quick_insight, seasonal_spend, seasonal_summary,
};

// ============================================================================
// DOMINANT-GROUP SENTENCES
// ============================================================================

#[test]
fn test_age_summary_names_share_to_one_decimal() {
    let table = BaseTable::from_transactions(vec![
        Transaction::new(20, "Female", "Clothing", 30.0, "Ohio", "Winter", "Cash"),
        Transaction::new(22, "Male", "Clothing", 35.0, "Ohio", "Winter", "Cash"),
        Transaction::new(40, "Female", "Shoes", 50.0, "Ohio", "Winter", "Cash"),
    ]);
    let summary = age_summary(&age_distribution(&full_view(&table)));
    assert_eq!(
        summary,
        "The 20-29 age group dominates with 2 purchases (66.7%), \
         making it the most active customer segment under the current filter."
    );
}

#[test]
fn test_location_summary_names_the_overall_leader() {
    let table = ShoppingFixture::table();
    let summary = location_summary(&location_totals(&full_view(&table)));
    assert_eq!(
        summary,
        "The location with the most transactions is Montana with 3 purchases, \
         making it the prime target for marketing activity."
    );
}

#[test]
fn test_map_summary_lists_the_top_three_locations() {
    let table = ShoppingFixture::table();
    let summary = map_summary(&location_totals(&full_view(&table)));
    assert_eq!(
        summary,
        "The three states with the most transactions are: Montana (3), Ohio (3), Texas (3). \
         Shopping activity is strongly concentrated in those regions."
    );
}

#[test]
fn test_map_summary_with_fewer_than_three_locations() {
    let table = BaseTable::from_transactions(vec![
        Transaction::new(30, "Female", "Clothing", 20.0, "Vermont", "Fall", "Cash"),
        Transaction::new(31, "Male", "Clothing", 25.0, "Vermont", "Fall", "Cash"),
        Transaction::new(40, "Female", "Footwear", 30.0, "Maine", "Fall", "Cash"),
    ]);
    let summary = map_summary(&location_totals(&full_view(&table)));
    assert_eq!(
        summary,
        "The three states with the most transactions are: Vermont (2), Maine (1). \
         Shopping activity is strongly concentrated in those regions."
    );
}

#[test]
fn test_payment_summary_names_share_to_one_decimal() {
    let mut transactions = Vec::new();
    for _ in 0..3 {
        transactions.push(Transaction::new(
            30, "Male", "Clothing", 20.0, "Ohio", "Fall", "Cash",
        ));
    }
    for _ in 0..7 {
        transactions.push(Transaction::new(
            30, "Male", "Clothing", 20.0, "Ohio", "Fall", "Credit Card",
        ));
    }
    let table = BaseTable::from_transactions(transactions);
    let summary = payment_summary(&payment_share(&full_view(&table)));
    assert_eq!(
        summary,
        "The most used payment method is Credit Card with 7 transactions (70.0%), \
         showing a strong customer preference for that method."
    );
}

#[test]
fn test_seasonal_summary_formats_spend_as_currency() {
    let table = ShoppingFixture::table();
    let summary = seasonal_summary(&seasonal_spend(&full_view(&table)));
    assert_eq!(
        summary,
        "The Accessories category reaches its highest average spend in Spring, \
         at about $120.00, pointing to a clear seasonal pattern for that category."
    );
}

#[test]
fn test_life_stage_summary_names_stage_and_category() {
    let table = ShoppingFixture::table();
    let summary = life_stage_summary(&life_stage_matrix(&full_view(&table)));
    assert_eq!(
        summary,
        "The 26-35 age group buys Clothing most often, with 2 purchases, \
         showing a clear product preference by age segment."
    );
}

#[test]
fn test_quick_insight_combines_the_three_leaders() {
    let table = ShoppingFixture::table();
    let view = full_view(&table);
    let summary = quick_insight(
        &age_distribution(&view),
        &location_totals(&view),
        &category_totals(&view),
    );
    assert_eq!(
        summary,
        "The dominant age group right now is 20-29 with about 40.0% of filtered transactions. \
         The location with the most transactions is Montana (3 transactions), \
         and the most purchased category is Clothing (5 transactions)."
    );
}

// ============================================================================
// FALLBACKS ON EMPTY VIEWS
// ============================================================================

#[test]
fn test_every_summary_falls_back_when_the_view_is_empty() {
    let table = ShoppingFixture::table();
    let view = empty_view(&table);

    let age = age_distribution(&view);
    let locations = location_totals(&view);
    let categories = category_totals(&view);
    // The ranking view reuses the location summary, so it falls back too.
    assert!(location_ranking(&view).groups.is_empty());

    assert_eq!(age_summary(&age), "Not enough age data to analyze.");
    assert_eq!(location_summary(&locations), "No location data to analyze.");
    assert_eq!(
        map_summary(&locations),
        "Not enough location data to analyze on the map."
    );
    assert_eq!(
        payment_summary(&payment_share(&view)),
        "No payment method data to analyze."
    );
    assert_eq!(
        seasonal_summary(&seasonal_spend(&view)),
        "Not enough data to analyze seasonal patterns."
    );
    assert_eq!(
        life_stage_summary(&life_stage_matrix(&view)),
        "Not enough data to analyze products by age group."
    );
    assert_eq!(
        quick_insight(&age, &locations, &categories),
        "Not enough data after filtering to produce a quick insight."
    );
}
