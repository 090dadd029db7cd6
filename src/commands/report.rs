//! Report command implementation.
//!
//! The report command:
//! 1. Loads the catalog (fetch + parse)
//! 2. Aggregates the selected month
//! 3. Renders the bar chart
//! 4. Writes output files

use super::models::ReportArgs;
use crate::aggregator::{aggregate, MonthFilter, MonthlyReport, PriceBuckets};
use crate::chart::{generate_bar_chart, generate_text_summary};
use crate::output::{to_report, write_report, write_svg};
use crate::provider::{CatalogSource, DataProvider, LoadState};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::time::Instant;

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The aggregation result, after all requested outputs were written
///
/// # Errors
/// * Catalog fetch or parse failures
/// * Invalid bucket thresholds
/// * Chart or file write errors
pub fn execute_report(args: ReportArgs) -> Result<MonthlyReport> {
    let start_time = Instant::now();

    info!("Starting report for: {}", args.month);
    info!("Catalog source: {}", args.source);

    let buckets = resolve_buckets(args.thresholds.as_deref())?;

    // Step 1: Load catalog
    info!("Step 1/4: Loading catalog...");
    let source = CatalogSource::parse(&args.source).context("Invalid catalog source")?;
    let mut provider = DataProvider::new(source);

    if let LoadState::Failed(message) = provider.load() {
        anyhow::bail!("Failed to load catalog: {}", message);
    }

    debug!(
        "Catalog: {} transactions, {} skipped",
        provider.transactions().len(),
        provider.skipped()
    );

    // Step 2: Aggregate
    info!("Step 2/4: Aggregating {}...", args.month);
    if args.month == MonthFilter::Unselected {
        warn!("No month selected; the report will be empty");
    }
    let monthly = aggregate(provider.transactions(), args.month, &buckets);

    info!(
        "{} matching transactions, total sale {}",
        monthly.matched,
        monthly.summary.display_total_sale()
    );

    // Step 3: Render chart (if requested)
    let svg_content = if args.output_svg.is_some() {
        info!("Step 3/4: Generating bar chart...");
        let svg = generate_bar_chart(&monthly, Some(&args.chart_config))
            .context("Failed to generate bar chart")?;
        Some(svg)
    } else {
        info!("Step 3/4: Skipping chart generation (not requested)");
        None
    };

    // Step 4: Write outputs
    info!("Step 4/4: Writing output files...");

    if let Some(json_path) = &args.output_json {
        let report = to_report(&provider.source().to_string(), &monthly, provider.skipped());
        write_report(&report, json_path).context("Failed to write report JSON")?;
        info!("✓ Report written to: {}", json_path.display());
    }

    if let (Some(svg), Some(svg_path)) = (svg_content, &args.output_svg) {
        write_svg(&svg, svg_path).context("Failed to write chart SVG")?;
        info!("✓ Chart written to: {}", svg_path.display());
    }

    if args.print_summary {
        println!("\n{}", "=".repeat(60));
        println!("TRANSACTION REPORT");
        println!("{}", "=".repeat(60));
        println!("Source:       {}", provider.source());
        println!("Transactions: {}", provider.transactions().len());
        println!("Matched:      {}", monthly.matched);
        println!("\n{}", generate_text_summary(&monthly, 40));
        println!("{}", "=".repeat(60));
    }

    let elapsed = start_time.elapsed();
    info!("Report completed in {:.2}s", elapsed.as_secs_f64());

    Ok(monthly)
}

/// Bucket configuration from the optional CLI list
///
/// **Private** - internal helper for execute_report and validate_report_args
fn resolve_buckets(thresholds: Option<&str>) -> Result<PriceBuckets> {
    match thresholds {
        Some(list) => PriceBuckets::parse_list(list).context("Invalid --thresholds"),
        None => Ok(PriceBuckets::default()),
    }
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_report_args(args: &ReportArgs) -> Result<()> {
    CatalogSource::parse(&args.source).context("Invalid catalog source")?;

    resolve_buckets(args.thresholds.as_deref())?;

    args.chart_config
        .validate()
        .context("Invalid chart configuration")?;

    if args.output_json.is_none() && args.output_svg.is_none() && !args.print_summary {
        anyhow::bail!("Nothing to do: pass --output, --chart or --summary");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartConfig;
    use std::path::PathBuf;

    #[test]
    fn test_validate_args_default() {
        assert!(validate_report_args(&ReportArgs::default()).is_ok());
    }

    #[test]
    fn test_validate_args_empty_source() {
        let args = ReportArgs {
            source: String::new(),
            ..Default::default()
        };

        assert!(validate_report_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_invalid_scheme() {
        let args = ReportArgs {
            source: "ftp://example.com/catalog.json".to_string(),
            ..Default::default()
        };

        assert!(validate_report_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_bad_thresholds() {
        let args = ReportArgs {
            thresholds: Some("0,300,200".to_string()),
            ..Default::default()
        };

        assert!(validate_report_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_tiny_chart() {
        let args = ReportArgs {
            output_svg: Some(PathBuf::from("chart.svg")),
            chart_config: ChartConfig::new().with_size(10, 10),
            ..Default::default()
        };

        assert!(validate_report_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_nothing_to_do() {
        let args = ReportArgs {
            output_json: None,
            output_svg: None,
            print_summary: false,
            ..Default::default()
        };

        assert!(validate_report_args(&args).is_err());
    }
}
