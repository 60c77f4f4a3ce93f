//! FILENAME: tests/common/mod.rs
//! Shared fixture data for insight-engine integration tests.

use engine::{BaseTable, FilterSelection, FilteredView, Transaction};

/// Ten hand-picked purchases covering every decade bucket in 10-69, all six
/// life stages except 36-45's neighbor gaps, one underage customer and one
/// location ("Narnia") that no state table knows about.
pub struct ShoppingFixture;

impl ShoppingFixture {
    /// (age, gender, category, amount, location, season, payment method)
    pub fn data() -> Vec<(u32, &'static str, &'static str, f64, &'static str, &'static str, &'static str)> {
        vec![
            (23, "Female", "Clothing", 40.0, "Montana", "Winter", "Cash"),
            (27, "Male", "Footwear", 60.0, "Ohio", "Summer", "Credit Card"),
            (41, "Female", "Clothing", 80.0, "Montana", "Winter", "Venmo"),
            (52, "Male", "Outerwear", 30.0, "Texas", "Fall", "Cash"),
            (25, "Female", "Clothing", 55.0, "Ohio", "Spring", "Credit Card"),
            (68, "Male", "Accessories", 22.0, "Montana", "Summer", "Cash"),
            (35, "Female", "Footwear", 90.0, "Texas", "Winter", "Credit Card"),
            (29, "Male", "Clothing", 45.0, "Ohio", "Summer", "Credit Card"),
            (47, "Female", "Accessories", 120.0, "Narnia", "Spring", "PayPal"),
            (16, "Male", "Clothing", 15.0, "Texas", "Fall", "Cash"),
        ]
    }

    pub fn transactions() -> Vec<Transaction> {
        Self::data()
            .into_iter()
            .map(|(age, gender, category, amount, location, season, payment)| {
                Transaction::new(age, gender, category, amount, location, season, payment)
            })
            .collect()
    }

    pub fn table() -> BaseTable {
        BaseTable::from_transactions(Self::transactions())
    }
}

/// A view that lets every fixture row through.
pub fn full_view(table: &BaseTable) -> FilteredView<'_> {
    FilteredView::new(table, &FilterSelection::all_of(table))
}

/// A selection no fixture row can satisfy (the oldest customer is 68).
pub fn empty_selection(table: &BaseTable) -> FilterSelection {
    let mut selection = FilterSelection::all_of(table);
    selection.age_min = 90;
    selection.age_max = 95;
    selection
}

/// A view with every fixture row filtered out.
pub fn empty_view(table: &BaseTable) -> FilteredView<'_> {
    FilteredView::new(table, &empty_selection(table))
}
