//! Aggregation of the transaction catalog for one selected month.
//!
//! This module turns a catalog snapshot into:
//! - A fixed-bucket price histogram
//! - Sales totals (revenue from sold items, sold and unsold counts)
//!
//! Everything here is pure: inputs are borrowed immutably and every call
//! allocates fresh output, so equal inputs always give equal results.

pub mod filter;
pub mod histogram;
pub mod summary;

// Re-export main types and functions
pub use filter::MonthFilter;
pub use histogram::{build_histogram, PriceBucketCount, PriceBuckets};
pub use summary::{calculate_sales_summary, SalesSummary};

use crate::parser::Transaction;
use log::{debug, warn};

/// Histogram and totals computed from the same filtered set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyReport {
    pub filter: MonthFilter,
    pub histogram: Vec<PriceBucketCount>,
    pub summary: SalesSummary,

    /// Transactions whose month matched the filter
    pub matched: usize,

    /// Matching transactions dropped for a negative price or an overflowing total
    pub excluded: usize,
}

/// Aggregate a catalog snapshot for one month
///
/// **Public** - main entry point for the dashboard
///
/// # Arguments
/// * `transactions` - Catalog snapshot (not modified)
/// * `filter` - Selected month; `Unselected` yields an empty report
/// * `buckets` - Price bucket configuration
///
/// # Returns
/// Histogram and summary built in a single pass over the matching records
pub fn aggregate(
    transactions: &[Transaction],
    filter: MonthFilter,
    buckets: &PriceBuckets,
) -> MonthlyReport {
    let mut report = MonthlyReport {
        filter,
        histogram: buckets.empty_histogram(),
        summary: SalesSummary::default(),
        matched: 0,
        excluded: 0,
    };

    for transaction in transactions.iter().filter(|t| filter.matches_transaction(t)) {
        report.matched += 1;

        if summary::is_negative(transaction.price) {
            report.excluded += 1;
            continue;
        }

        if !report.summary.record(transaction) {
            warn!(
                "Excluding transaction {}: total sale would overflow",
                transaction.id
            );
            report.excluded += 1;
            continue;
        }

        if let Some(index) = buckets.bucket_index(transaction.price) {
            report.histogram[index].count += 1;
        }
    }

    debug!(
        "Aggregated {}: {} matched, {} excluded, {} sold",
        filter, report.matched, report.excluded, report.summary.total_sold
    );

    report
}

impl MonthlyReport {
    /// Sum of all bucket counts
    pub fn bucketed(&self) -> u64 {
        self.histogram.iter().map(|b| b.count).sum()
    }

    /// Largest bucket count, used to scale charts
    pub fn max_count(&self) -> u64 {
        self.histogram.iter().map(|b| b.count).max().unwrap_or(0)
    }
}
