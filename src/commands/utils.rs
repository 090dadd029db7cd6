use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Validate a report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;
    let bucketed: u64 = report.histogram.iter().map(|b| b.count).sum();

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Source: {}", report.source);
    println!("  Month: {}", report.month_name.as_deref().unwrap_or("(none selected)"));
    println!("  Buckets: {} ({} transactions)", report.histogram.len(), bucketed);
    println!("  Total Sale: {}", report.summary.display_total_sale());
    println!("  Sold / Not Sold: {} / {}", report.summary.total_sold, report.summary.total_not_sold);

    if report.version != SCHEMA_VERSION {
        println!("  ⚠ Schema v{} differs from current v{}", report.version, SCHEMA_VERSION);
    }

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Transaction Dashboard Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string          - Schema version (e.g., '1.0.0')");
        println!("  source: string           - Catalog URL or file");
        println!("  month: number?           - Selected month (1-12)");
        println!("  monthName: string?       - Selected month name");
        println!("  histogram: array         - Price buckets in threshold order");
        println!("    rangeLabel: string     - e.g. '100-200' or '900+'");
        println!("    count: number          - Matching transactions in range");
        println!("  summary: object          - Sales totals");
        println!("    totalSale: number      - Revenue from sold items");
        println!("    totalSold: number      - Items sold");
        println!("    totalNotSold: number   - Items not sold");
        println!("  matched: number          - Transactions in the month");
        println!("  excluded: number         - Left out for a negative price");
        println!("  skippedRecords: number   - Unparsable catalog records");
        println!("  generatedAt: string      - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Transaction Dashboard v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Search, filter and chart a transaction catalog by month.");
}
