//! FILENAME: engine/src/filter.rs
//! PURPOSE: Conjunctive filtering of the base table.
//! CONTEXT: Implements `FilterSelection` (the user's current choice on every
//! filterable dimension) and `FilteredView` (the read-only subset of the base
//! table matching it). A row survives only if every dimension accepts it; the
//! base table is never mutated and the view is rebuilt from scratch on each
//! selection change.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::record::Record;
use crate::table::BaseTable;

/// The user's filter choices: one selected-value set per categorical
/// dimension plus an inclusive age range.
///
/// An empty set on any dimension matches nothing; "select all" is an
/// explicit selection of every distinct value, not an implicit fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub genders: HashSet<String>,
    pub categories: HashSet<String>,
    pub seasons: HashSet<String>,
    pub locations: HashSet<String>,
    pub payment_methods: HashSet<String>,
    pub age_min: u32,
    pub age_max: u32,
}

impl FilterSelection {
    /// The unrestricted default: every distinct value of every dimension
    /// selected and the full observed age range.
    pub fn all_of(table: &BaseTable) -> Self {
        FilterSelection {
            genders: table.genders().iter().cloned().collect(),
            categories: table.categories().iter().cloned().collect(),
            seasons: table.seasons().iter().cloned().collect(),
            locations: table.locations().iter().cloned().collect(),
            payment_methods: table.payment_methods().iter().cloned().collect(),
            age_min: table.min_age(),
            age_max: table.max_age(),
        }
    }

    /// True when every dimension accepts the record. Age bounds are
    /// inclusive on both ends.
    pub fn matches(&self, record: &Record) -> bool {
        self.genders.contains(&record.gender)
            && self.categories.contains(&record.category)
            && self.seasons.contains(&record.season)
            && self.locations.contains(&record.location)
            && self.payment_methods.contains(&record.payment_method)
            && record.age >= self.age_min
            && record.age <= self.age_max
    }
}

/// The subset of a base table matching one `FilterSelection`.
///
/// Borrows the table; dropping the view leaves the table untouched.
#[derive(Debug)]
pub struct FilteredView<'a> {
    table: &'a BaseTable,
    records: Vec<&'a Record>,
}

impl<'a> FilteredView<'a> {
    /// Runs the filter pass over the whole table.
    pub fn new(table: &'a BaseTable, selection: &FilterSelection) -> Self {
        let records = table
            .records()
            .iter()
            .filter(|record| selection.matches(record))
            .collect();
        FilteredView { table, records }
    }

    /// The surviving records, in base-table order.
    pub fn records(&self) -> &[&'a Record] {
        &self.records
    }

    /// Number of rows that passed the filter.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of rows in the underlying base table.
    pub fn base_len(&self) -> usize {
        self.table.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Transaction;

    fn sample_table() -> BaseTable {
        BaseTable::from_transactions(vec![
            Transaction::new(23, "Female", "Clothing", 40.0, "Montana", "Winter", "Cash"),
            Transaction::new(27, "Male", "Footwear", 65.0, "Ohio", "Summer", "Credit Card"),
            Transaction::new(41, "Female", "Clothing", 80.0, "Montana", "Winter", "Venmo"),
            Transaction::new(60, "Male", "Outerwear", 30.0, "Texas", "Fall", "Cash"),
        ])
    }

    #[test]
    fn test_default_selection_returns_whole_table() {
        let table = sample_table();
        let selection = FilterSelection::all_of(&table);
        let view = FilteredView::new(&table, &selection);

        assert_eq!(view.len(), table.len());
        assert_eq!(view.base_len(), table.len());
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let table = sample_table();
        let mut selection = FilterSelection::all_of(&table);
        selection.categories.remove("Footwear");

        let first = FilteredView::new(&table, &selection);
        let second = FilteredView::new(&table, &selection);

        assert_eq!(first.len(), 3);
        assert_eq!(first.records(), second.records());
    }

    #[test]
    fn test_empty_set_on_one_dimension_matches_nothing() {
        let table = sample_table();
        let mut selection = FilterSelection::all_of(&table);
        selection.seasons.clear();

        let view = FilteredView::new(&table, &selection);
        assert!(view.is_empty());
    }

    #[test]
    fn test_age_bounds_are_inclusive() {
        let table = sample_table();
        let mut selection = FilterSelection::all_of(&table);
        selection.age_min = 27;
        selection.age_max = 41;

        let view = FilteredView::new(&table, &selection);
        let ages: Vec<u32> = view.records().iter().map(|r| r.age).collect();
        assert_eq!(ages, [27, 41]);
    }

    #[test]
    fn test_all_dimensions_must_accept() {
        let table = sample_table();
        let mut selection = FilterSelection::all_of(&table);
        // Montana rows are all Winter; excluding Winter must also drop them.
        selection.seasons.remove("Winter");

        let view = FilteredView::new(&table, &selection);
        assert!(view.records().iter().all(|r| r.location != "Montana"));
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn test_view_does_not_mutate_table() {
        let table = sample_table();
        let before = table.records().to_vec();

        let mut selection = FilterSelection::all_of(&table);
        selection.locations.clear();
        let _ = FilteredView::new(&table, &selection);

        assert_eq!(table.records(), before.as_slice());
    }
}
