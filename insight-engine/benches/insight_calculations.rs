//! FILENAME: benches/insight_calculations.rs
//! Criterion benchmarks for the aggregation pipeline on a synthetic table.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use engine::{BaseTable, FilterSelection, FilteredView, Transaction};
use insight_engine::{age_distribution, location_ranking, render_dashboard, seasonal_spend};

/// Builds a deterministic table by cycling through fixed value pools.
fn synthetic_table(rows: usize) -> BaseTable {
    const GENDERS: [&str; 2] = ["Female", "Male"];
    const CATEGORIES: [&str; 4] = ["Clothing", "Footwear", "Outerwear", "Accessories"];
    const LOCATIONS: [&str; 6] = ["Montana", "Ohio", "Texas", "California", "Maine", "Nevada"];
    const SEASONS: [&str; 4] = ["Winter", "Spring", "Summer", "Fall"];
    const PAYMENTS: [&str; 5] = ["Cash", "Credit Card", "PayPal", "Venmo", "Debit Card"];

    let transactions = (0..rows)
        .map(|i| {
            Transaction::new(
                18 + (i % 60) as u32,
                GENDERS[i % GENDERS.len()],
                CATEGORIES[i % CATEGORIES.len()],
                20.0 + (i % 90) as f64,
                LOCATIONS[i % LOCATIONS.len()],
                SEASONS[i % SEASONS.len()],
                PAYMENTS[i % PAYMENTS.len()],
            )
        })
        .collect();
    BaseTable::from_transactions(transactions)
}

fn bench_insight_pipeline(c: &mut Criterion) {
    let table = synthetic_table(100_000);
    let selection = FilterSelection::all_of(&table);

    let mut group = c.benchmark_group("insight_pipeline");

    group.bench_function("filter_pass", |b| {
        b.iter(|| black_box(FilteredView::new(&table, &selection).len()))
    });

    let view = FilteredView::new(&table, &selection);
    group.bench_function("age_distribution", |b| {
        b.iter(|| black_box(age_distribution(&view)))
    });
    group.bench_function("location_ranking", |b| {
        b.iter(|| black_box(location_ranking(&view)))
    });
    group.bench_function("seasonal_spend", |b| {
        b.iter(|| black_box(seasonal_spend(&view)))
    });
    group.bench_function("full_dashboard", |b| {
        b.iter(|| black_box(render_dashboard(&table, &selection)))
    });

    group.finish();
}

criterion_group!(benches, bench_insight_pipeline);
criterion_main!(benches);
