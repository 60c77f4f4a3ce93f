//! FILENAME: engine/src/record.rs
//! PURPOSE: Defines the fundamental data structures for a single purchase.
//! CONTEXT: This file contains the `Transaction` struct (one row of the source
//! file, field names matching the CSV headers) and the `Record` struct (the
//! same data at runtime with the derived age buckets attached). Rows are
//! immutable once loaded.

use serde::{Deserialize, Serialize};

use crate::buckets::{Decade, LifeStage};

/// One row of the source dataset, as read from the file.
///
/// The source carries more columns than these; extra columns are ignored
/// during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "Age")]
    pub age: u32,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Purchase Amount (USD)")]
    pub purchase_amount: f64,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Season")]
    pub season: String,
    #[serde(rename = "Payment Method")]
    pub payment_method: String,
}

impl Transaction {
    pub fn new(
        age: u32,
        gender: &str,
        category: &str,
        purchase_amount: f64,
        location: &str,
        season: &str,
        payment_method: &str,
    ) -> Self {
        Transaction {
            age,
            gender: gender.to_string(),
            category: category.to_string(),
            purchase_amount,
            location: location.to_string(),
            season: season.to_string(),
            payment_method: payment_method.to_string(),
        }
    }
}

/// A base-table row: the transaction fields plus both derived buckets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub age: u32,
    pub gender: String,
    pub category: String,
    pub purchase_amount: f64,
    pub location: String,
    pub season: String,
    pub payment_method: String,
    /// Ten-year age bucket; every age has one.
    pub decade: Decade,
    /// Fixed lifecycle bucket; `None` for ages outside `[18, 100)`.
    pub life_stage: Option<LifeStage>,
}

impl From<Transaction> for Record {
    fn from(tx: Transaction) -> Self {
        let decade = Decade::of(tx.age);
        let life_stage = LifeStage::from_age(tx.age);
        Record {
            age: tx.age,
            gender: tx.gender,
            category: tx.category,
            purchase_amount: tx.purchase_amount,
            location: tx.location,
            season: tx.season,
            payment_method: tx.payment_method,
            decade,
            life_stage,
        }
    }
}
