//! FILENAME: engine/src/table.rs
//! PURPOSE: Manages the collection of purchase records (the base table).
//! CONTEXT: This file defines the `BaseTable` struct, built once from the
//! loaded transactions and never mutated afterwards. Alongside the records it
//! holds the observed age range, the decade span list, and the distinct values
//! of each categorical column in first-encounter order (the order filter
//! widgets present them in).

use std::collections::HashSet;

use crate::buckets::Decade;
use crate::record::{Record, Transaction};

/// The immutable store of purchase records with derived buckets attached.
#[derive(Debug, Clone)]
pub struct BaseTable {
    records: Vec<Record>,
    min_age: u32,
    max_age: u32,
    decades: Vec<Decade>,
    genders: Vec<String>,
    categories: Vec<String>,
    locations: Vec<String>,
    seasons: Vec<String>,
    payment_methods: Vec<String>,
}

impl BaseTable {
    /// Builds the table: derives both buckets per row, the decade span list
    /// for the observed age range, and the distinct value lists.
    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        let records: Vec<Record> = transactions.into_iter().map(Record::from).collect();

        let min_age = records.iter().map(|r| r.age).min().unwrap_or(0);
        let max_age = records.iter().map(|r| r.age).max().unwrap_or(0);
        let decades = if records.is_empty() {
            Vec::new()
        } else {
            Decade::spans_to(max_age)
        };

        let genders = distinct_in_order(records.iter().map(|r| r.gender.as_str()));
        let categories = distinct_in_order(records.iter().map(|r| r.category.as_str()));
        let locations = distinct_in_order(records.iter().map(|r| r.location.as_str()));
        let seasons = distinct_in_order(records.iter().map(|r| r.season.as_str()));
        let payment_methods =
            distinct_in_order(records.iter().map(|r| r.payment_method.as_str()));

        BaseTable {
            records,
            min_age,
            max_age,
            decades,
            genders,
            categories,
            locations,
            seasons,
            payment_methods,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Total row count.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Youngest observed age (0 for an empty table).
    pub fn min_age(&self) -> u32 {
        self.min_age
    }

    /// Oldest observed age (0 for an empty table).
    pub fn max_age(&self) -> u32 {
        self.max_age
    }

    /// The decade spans covering `[0, max_age]`, ascending. Empty when the
    /// table has no rows.
    pub fn decades(&self) -> &[Decade] {
        &self.decades
    }

    /// Distinct genders in first-encounter order.
    pub fn genders(&self) -> &[String] {
        &self.genders
    }

    /// Distinct product categories in first-encounter order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Distinct locations in first-encounter order.
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    /// Distinct seasons in first-encounter order.
    pub fn seasons(&self) -> &[String] {
        &self.seasons
    }

    /// Distinct payment methods in first-encounter order.
    pub fn payment_methods(&self) -> &[String] {
        &self.payment_methods
    }
}

/// Collects distinct values preserving the order they first appear in.
fn distinct_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::new();
    for value in values {
        if seen.insert(value) {
            out.push(value.to_string());
        }
    }
    out
}
