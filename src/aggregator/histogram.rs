//! Price histogram over fixed, ordered buckets.
//!
//! Buckets are lower-inclusive half-open ranges `[b_i, b_{i+1})`, with the last
//! one open-ended `[b_last, +inf)`. A price sitting on a boundary belongs to
//! the upper bucket.

use super::filter::MonthFilter;
use crate::parser::catalog::parse_decimal;
use crate::parser::Transaction;
use crate::utils::config::DEFAULT_PRICE_THRESHOLDS;
use crate::utils::error::ChartError;
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Ordered lower bounds of the price buckets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceBuckets {
    thresholds: Vec<Decimal>,
}

impl PriceBuckets {
    /// Create buckets from ascending, non-negative thresholds
    ///
    /// # Errors
    /// * `ChartError::InvalidThresholds` - empty, negative, or not strictly ascending
    pub fn new(thresholds: Vec<Decimal>) -> Result<Self, ChartError> {
        if thresholds.is_empty() {
            return Err(ChartError::InvalidThresholds(
                "at least one threshold is required".to_string(),
            ));
        }

        if let Some(negative) = thresholds.iter().find(|t| t.is_sign_negative() && !t.is_zero()) {
            return Err(ChartError::InvalidThresholds(format!(
                "thresholds must be non-negative, got {}",
                negative
            )));
        }

        if let Some(pair) = thresholds.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(ChartError::InvalidThresholds(format!(
                "thresholds must be strictly ascending ({} then {})",
                pair[0], pair[1]
            )));
        }

        Ok(Self { thresholds })
    }

    /// Parse a comma-separated list such as `0,100,200`
    pub fn parse_list(list: &str) -> Result<Self, ChartError> {
        let thresholds = list
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                parse_decimal(part).ok_or_else(|| {
                    ChartError::InvalidThresholds(format!("not a number: {}", part))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(thresholds)
    }

    /// Display label of bucket `index`: `"100-200"`, or `"900+"` for the last one
    pub fn label(&self, index: usize) -> String {
        let lower = self.thresholds[index].normalize();
        match self.thresholds.get(index + 1) {
            Some(upper) => format!("{}-{}", lower, upper.normalize()),
            None => format!("{}+", lower),
        }
    }

    pub fn labels(&self) -> Vec<String> {
        (0..self.thresholds.len()).map(|i| self.label(i)).collect()
    }

    /// Bucket holding `price`
    ///
    /// Returns `None` for negative prices and for prices below the first
    /// threshold.
    pub fn bucket_index(&self, price: Decimal) -> Option<usize> {
        if price.is_sign_negative() && !price.is_zero() {
            return None;
        }

        // Number of thresholds <= price; the bucket is the last of those
        let at_or_below = self.thresholds.partition_point(|t| *t <= price);
        at_or_below.checked_sub(1)
    }

    /// Zero-count histogram with one entry per bucket
    pub fn empty_histogram(&self) -> Vec<PriceBucketCount> {
        self.labels()
            .into_iter()
            .map(|range_label| PriceBucketCount {
                range_label,
                count: 0,
            })
            .collect()
    }
}

impl Default for PriceBuckets {
    fn default() -> Self {
        Self {
            thresholds: DEFAULT_PRICE_THRESHOLDS
                .iter()
                .map(|t| Decimal::from(*t))
                .collect(),
        }
    }
}

/// One bar of the chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBucketCount {
    pub range_label: String,
    pub count: u64,
}

/// Count matching transactions per price bucket
///
/// **Public** - standalone entry point; shares the exclusion rules of
/// [`super::aggregate`] (negative prices, overflowing totals)
///
/// # Arguments
/// * `transactions` - Catalog snapshot (not modified)
/// * `filter` - Selected month; `Unselected` yields all-zero counts
/// * `buckets` - Price bucket configuration
///
/// # Returns
/// One entry per bucket, in threshold order, zero counts included
pub fn build_histogram(
    transactions: &[Transaction],
    filter: MonthFilter,
    buckets: &PriceBuckets,
) -> Vec<PriceBucketCount> {
    let histogram = super::aggregate(transactions, filter, buckets).histogram;

    debug!(
        "Histogram for {}: {:?}",
        filter,
        histogram.iter().map(|b| b.count).collect::<Vec<_>>()
    );

    histogram
}
