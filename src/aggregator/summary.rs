//! Sales totals for the selected month.

use super::filter::MonthFilter;
use crate::parser::Transaction;
use log::warn;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Revenue and item counts for one filtered set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummary {
    /// Sum of prices of sold items only, at full precision
    #[serde(with = "rust_decimal::serde::float")]
    pub total_sale: Decimal,

    pub total_sold: u64,
    pub total_not_sold: u64,
}

impl SalesSummary {
    /// Fold one matching transaction into the totals
    ///
    /// Returns `false` and leaves the totals untouched when the revenue
    /// would overflow `Decimal`.
    pub fn record(&mut self, transaction: &Transaction) -> bool {
        if !transaction.sold {
            self.total_not_sold += 1;
            return true;
        }

        match self.total_sale.checked_add(transaction.price) {
            Some(total) => {
                self.total_sale = total;
                self.total_sold += 1;
                true
            }
            None => false,
        }
    }

    pub fn total_items(&self) -> u64 {
        self.total_sold + self.total_not_sold
    }

    /// Revenue rounded to cents, for display only
    pub fn display_total_sale(&self) -> String {
        let cents = self
            .total_sale
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("${:.2}", cents)
    }
}

/// Compute the sales summary for `filter`
///
/// **Public** - standalone entry point; [`super::aggregate`] computes the same
/// summary together with the histogram in one pass
///
/// Transactions with a negative price, or whose price would overflow the
/// running total, are left out, the same as in the histogram.
pub fn calculate_sales_summary(transactions: &[Transaction], filter: MonthFilter) -> SalesSummary {
    transactions
        .iter()
        .filter(|t| filter.matches_transaction(t))
        .filter(|t| !is_negative(t.price))
        .fold(SalesSummary::default(), |mut summary, t| {
            if !summary.record(t) {
                warn!("Excluding transaction {}: total sale would overflow", t.id);
            }
            summary
        })
}

pub(crate) fn is_negative(price: Decimal) -> bool {
    price.is_sign_negative() && !price.is_zero()
}
