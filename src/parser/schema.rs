//! Typed catalog records and the report JSON schema.
//!
//! `Transaction` is what the rest of the crate sees after the parser has made
//! every coercion explicit. `Report` is the structure of the JSON files we
//! write to disk; it is versioned to allow future evolution.

use crate::aggregator::{PriceBucketCount, SalesSummary};
use chrono::{DateTime, Datelike, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: u64,
    pub title: String,
    pub description: String,

    /// Exact amount; negative values are kept here and excluded by the aggregator
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    pub category: String,
    pub sold: bool,

    /// Sale timestamp in the offset it was recorded with
    pub date_of_sale: DateTime<FixedOffset>,

    /// Display asset, unused by the aggregator
    pub image: String,
}

impl Transaction {
    /// Calendar month of the sale (1-12), taken from the date as written
    pub fn sale_month(&self) -> u32 {
        self.date_of_sale.month()
    }
}

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Schema version for compatibility checking
    pub version: String,

    /// Catalog URL or file the report was computed from
    pub source: String,

    /// Selected month (1-12), absent when no month was selected
    pub month: Option<u32>,

    /// English month name for display
    pub month_name: Option<String>,

    /// Price buckets in threshold order
    pub histogram: Vec<PriceBucketCount>,

    /// Sales totals for the selected month
    pub summary: SalesSummary,

    /// Transactions that matched the month filter
    pub matched: usize,

    /// Matching transactions left out because of a negative price
    pub excluded: usize,

    /// Raw records the parser could not coerce
    pub skipped_records: usize,

    /// Timestamp when the report was generated
    pub generated_at: String,
}
