use chrono::Month;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use transaction_dashboard::aggregator::{
    aggregate, build_histogram, calculate_sales_summary, MonthFilter, PriceBucketCount,
    PriceBuckets,
};
use transaction_dashboard::parser::catalog::parse_sale_date;
use transaction_dashboard::parser::{parse_catalog_str, Transaction};

fn tx(id: u64, price: Decimal, date: &str, sold: bool) -> Transaction {
    Transaction {
        id,
        title: format!("Item {}", id),
        description: String::new(),
        price,
        category: "electronics".to_string(),
        sold,
        date_of_sale: parse_sale_date(date).unwrap(),
        image: String::new(),
    }
}

fn march() -> MonthFilter {
    MonthFilter::Selected(Month::March)
}

fn sample_catalog() -> Vec<Transaction> {
    vec![
        tx(1, Decimal::new(4999, 2), "2024-03-01", true),
        tx(2, Decimal::from(150), "2024-03-02", false),
        tx(3, Decimal::from(500), "2024-03-03", true),
        tx(4, Decimal::new(99999, 2), "2024-03-04", false),
        tx(5, Decimal::from(1200), "2024-03-05", true),
        tx(6, Decimal::from(300), "2024-04-01", true),
        tx(7, Decimal::from(250), "2023-03-20", true),
    ]
}

fn counts(histogram: &[PriceBucketCount]) -> Vec<u64> {
    histogram.iter().map(|b| b.count).collect()
}

#[test]
fn test_two_items_same_bucket_scenario() {
    let transactions = vec![
        tx(1, Decimal::from(150), "2024-03-10", true),
        tx(2, Decimal::from(150), "2024-03-12", false),
    ];

    let report = aggregate(&transactions, march(), &PriceBuckets::default());

    assert_eq!(report.histogram[1].range_label, "100-200");
    assert_eq!(report.histogram[1].count, 2);
    assert_eq!(report.bucketed(), 2);
    assert_eq!(report.summary.total_sale, Decimal::from(150));
    assert_eq!(report.summary.total_sold, 1);
    assert_eq!(report.summary.total_not_sold, 1);
}

#[test]
fn test_empty_catalog_scenario() {
    let buckets = PriceBuckets::default();

    for month in 1..=12 {
        let filter = MonthFilter::from_number(month).unwrap();
        let report = aggregate(&[], filter, &buckets);

        assert_eq!(report.histogram.len(), 10);
        assert!(report.histogram.iter().all(|b| b.count == 0));
        assert_eq!(report.summary.total_sale, Decimal::ZERO);
        assert_eq!(report.summary.total_sold, 0);
        assert_eq!(report.summary.total_not_sold, 0);
    }
}

#[test]
fn test_only_selected_month_counts() {
    let transactions = vec![
        tx(1, Decimal::from(50), "2024-03-10", true),
        tx(2, Decimal::from(750), "2024-04-10", true),
    ];

    let report = aggregate(&transactions, march(), &PriceBuckets::default());

    assert_eq!(counts(&report.histogram), vec![1, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(report.summary.total_sale, Decimal::from(50));
    assert_eq!(report.summary.total_sold, 1);
    assert_eq!(report.summary.total_not_sold, 0);
    assert_eq!(report.matched, 1);
}

#[test]
fn test_boundary_price_lands_in_upper_bucket() {
    let transactions = vec![tx(1, Decimal::from(500), "2024-03-10", false)];

    let histogram = build_histogram(&transactions, march(), &PriceBuckets::default());

    assert_eq!(histogram[5].range_label, "500-600");
    assert_eq!(histogram[5].count, 1);
    assert_eq!(histogram[4].count, 0);
}

#[test]
fn test_aggregation_is_idempotent() {
    let transactions = sample_catalog();
    let buckets = PriceBuckets::default();

    let first = aggregate(&transactions, march(), &buckets);
    let second = aggregate(&transactions, march(), &buckets);

    assert_eq!(first, second);
}

#[test]
fn test_input_is_not_modified() {
    let transactions = sample_catalog();
    let before = transactions.clone();

    let _ = aggregate(&transactions, march(), &PriceBuckets::default());

    assert_eq!(transactions, before);
}

#[test]
fn test_bucket_counts_partition_month() {
    let transactions = sample_catalog();
    let buckets = PriceBuckets::default();

    for month in 1..=12 {
        let filter = MonthFilter::from_number(month).unwrap();
        let report = aggregate(&transactions, filter, &buckets);
        let in_month = transactions.iter().filter(|t| t.sale_month() == month).count();

        assert_eq!(report.bucketed() as usize, in_month, "month {}", month);
        assert_eq!(report.summary.total_items() as usize, in_month, "month {}", month);
    }
}

#[test]
fn test_total_sale_ignores_unsold_items() {
    let transactions = sample_catalog();
    let summary = calculate_sales_summary(&transactions, march());

    // 49.99 + 500 + 1200 + 250: sold items from March of any year
    assert_eq!(summary.total_sale, Decimal::new(199999, 2));
    assert_eq!(summary.total_sold, 4);
    assert_eq!(summary.total_not_sold, 2);
}

#[test]
fn test_total_sale_is_order_independent() {
    let transactions = sample_catalog();
    let mut reversed = transactions.clone();
    reversed.reverse();

    assert_eq!(
        calculate_sales_summary(&transactions, march()),
        calculate_sales_summary(&reversed, march())
    );
}

#[test]
fn test_total_sale_zero_when_nothing_sold() {
    let transactions = vec![
        tx(1, Decimal::from(100), "2024-03-10", false),
        tx(2, Decimal::from(200), "2024-05-10", true),
    ];

    let summary = calculate_sales_summary(&transactions, march());

    assert_eq!(summary.total_sale, Decimal::ZERO);
    assert_eq!(summary.display_total_sale(), "$0.00");
}

#[test]
fn test_unselected_month_yields_empty_report() {
    let transactions = sample_catalog();
    let report = aggregate(&transactions, MonthFilter::Unselected, &PriceBuckets::default());

    assert_eq!(report.bucketed(), 0);
    assert_eq!(report.summary.total_items(), 0);
    assert_eq!(report.matched, 0);
}

#[test]
fn test_negative_price_is_excluded_everywhere() {
    let transactions = vec![
        tx(1, Decimal::from(-20), "2024-03-10", true),
        tx(2, Decimal::from(20), "2024-03-10", true),
    ];

    let report = aggregate(&transactions, march(), &PriceBuckets::default());

    assert_eq!(report.matched, 2);
    assert_eq!(report.excluded, 1);
    assert_eq!(report.bucketed(), 1);
    assert_eq!(report.summary.total_sold, 1);
    assert_eq!(report.summary.total_sale, Decimal::from(20));
}

#[test]
fn test_single_pass_matches_standalone_functions() {
    let transactions = sample_catalog();
    let buckets = PriceBuckets::default();

    let report = aggregate(&transactions, march(), &buckets);

    assert_eq!(report.histogram, build_histogram(&transactions, march(), &buckets));
    assert_eq!(report.summary, calculate_sales_summary(&transactions, march()));
}

#[test]
fn test_custom_thresholds_with_upper_sentinel() {
    let transactions = sample_catalog();
    let buckets = PriceBuckets::parse_list("0,250,500,1000").unwrap();

    let report = aggregate(&transactions, march(), &buckets);

    let labels: Vec<&str> = report.histogram.iter().map(|b| b.range_label.as_str()).collect();
    assert_eq!(labels, vec!["0-250", "250-500", "500-1000", "1000+"]);
    assert_eq!(counts(&report.histogram), vec![2, 1, 2, 1]);
}

#[test]
fn test_total_sale_keeps_cents_exact() {
    let transactions: Vec<Transaction> = (0..10)
        .map(|i| tx(i, Decimal::new(10, 2), "2024-03-10", true))
        .collect();

    let summary = calculate_sales_summary(&transactions, march());

    assert_eq!(summary.total_sale, Decimal::ONE);
    assert_eq!(summary.display_total_sale(), "$1.00");
}

#[test]
fn test_overflowing_total_sale_is_excluded() {
    let huge = Decimal::from_scientific("5e28").unwrap();
    let transactions = vec![
        tx(1, huge, "2024-03-10", true),
        tx(2, huge, "2024-03-11", true),
        tx(3, Decimal::from(40), "2024-03-12", false),
    ];
    let buckets = PriceBuckets::default();

    let report = aggregate(&transactions, march(), &buckets);

    assert_eq!(report.matched, 3);
    assert_eq!(report.excluded, 1);
    assert_eq!(report.summary.total_sale, huge);
    assert_eq!(report.summary.total_sold, 1);
    assert_eq!(report.summary.total_not_sold, 1);
    assert_eq!(report.bucketed(), 2);
    assert_eq!(report.histogram[9].count, 1);

    assert_eq!(report.histogram, build_histogram(&transactions, march(), &buckets));
    assert_eq!(report.summary, calculate_sales_summary(&transactions, march()));
}

#[test]
fn test_overflowing_prices_from_catalog_do_not_abort() {
    let body = r#"[
        {"id": 1, "price": 5e28, "sold": true, "dateOfSale": "2024-03-10"},
        {"id": 2, "price": 5e28, "sold": true, "dateOfSale": "2024-03-11"}
    ]"#;
    let catalog = parse_catalog_str(body).unwrap();
    assert_eq!(catalog.transactions.len(), 2);

    let report = aggregate(&catalog.transactions, march(), &PriceBuckets::default());

    assert_eq!(report.excluded, 1);
    assert_eq!(report.summary.total_sold, 1);
}
