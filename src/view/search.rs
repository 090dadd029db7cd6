//! Free-text search and the listing filter.

use crate::aggregator::MonthFilter;
use crate::parser::Transaction;

/// Case-insensitive substring match on title, description, or price text
///
/// The price is matched without trailing zeros, so `150.0` reads as `150`.
///
/// An empty query matches everything.
pub fn matches_search(transaction: &Transaction, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }

    transaction.title.to_lowercase().contains(&query)
        || transaction.description.to_lowercase().contains(&query)
        || transaction.price.normalize().to_string().contains(&query)
}

/// Rows for the listing: search match AND (no month, or same month)
pub fn filter_listing<'a>(
    transactions: &'a [Transaction],
    query: &str,
    month: MonthFilter,
) -> Vec<&'a Transaction> {
    transactions
        .iter()
        .filter(|t| matches_search(t, query) && month.allows(t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::catalog::parse_sale_date;
    use chrono::Month;
    use rust_decimal::Decimal;

    fn transaction(id: u64, title: &str, price: Decimal, date: &str) -> Transaction {
        Transaction {
            id,
            title: title.to_string(),
            description: format!("{} description", title),
            price,
            category: "electronics".to_string(),
            sold: false,
            date_of_sale: parse_sale_date(date).unwrap(),
            image: String::new(),
        }
    }

    #[test]
    fn test_search_fields() {
        let tx = transaction(1, "Mens Cotton Jacket", Decimal::new(5599, 2), "2024-03-01");

        assert!(matches_search(&tx, ""));
        assert!(matches_search(&tx, "cotton"));
        assert!(matches_search(&tx, "JACKET DESC"));
        assert!(matches_search(&tx, "55.9"));
        assert!(!matches_search(&tx, "monitor"));
    }

    #[test]
    fn test_search_price_without_trailing_zeros() {
        let tx = transaction(1, "Ring", Decimal::new(1500, 1), "2024-03-01");

        assert!(matches_search(&tx, "150"));
        assert!(!matches_search(&tx, "150.0"));
    }

    #[test]
    fn test_filter_listing_unselected_shows_all_months() {
        let transactions = vec![
            transaction(1, "Ring", Decimal::from(10), "2024-03-01"),
            transaction(2, "Ring Box", Decimal::from(20), "2024-04-01"),
            transaction(3, "Monitor", Decimal::from(300), "2024-03-15"),
        ];

        let all = filter_listing(&transactions, "ring", MonthFilter::Unselected);
        assert_eq!(all.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2]);

        let march = filter_listing(&transactions, "", MonthFilter::Selected(Month::March));
        assert_eq!(march.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 3]);
    }
}
