//! Transaction Dashboard CLI
//!
//! Fetches a transaction catalog and reports, per month, a price histogram
//! and sales totals. Also lists the catalog with search and pagination.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use transaction_dashboard::aggregator::MonthFilter;
use transaction_dashboard::chart::ChartConfig;
use transaction_dashboard::commands::{
    display_schema, display_version, execute_list, execute_report, validate_list_args,
    validate_report_args, validate_report_file, ListArgs, ReportArgs,
};
use transaction_dashboard::utils::config::{
    DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH, DEFAULT_PAGE_SIZE, DEFAULT_SOURCE_URL,
};
use transaction_dashboard::view::ViewState;

/// Transaction Dashboard - monthly price histogram and sales totals
#[derive(Parser, Debug)]
#[command(name = "txdash")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Aggregate one month into a histogram and sales summary
    Report {
        /// Catalog URL or local JSON file
        #[arg(short, long, env = "TXDASH_SOURCE", default_value = DEFAULT_SOURCE_URL)]
        source: String,

        /// Month to report on (1-12 or name); omitted = no month selected
        #[arg(short, long, default_value = "none")]
        month: MonthFilter,

        /// Output path for JSON report
        #[arg(short, long, default_value = "report.json")]
        output: PathBuf,

        /// Skip writing the JSON report
        #[arg(long)]
        no_output: bool,

        /// Output path for SVG bar chart (optional)
        #[arg(short, long)]
        chart: Option<PathBuf>,

        /// Comma-separated bucket lower bounds (default 0,100,...,900)
        #[arg(long)]
        thresholds: Option<String>,

        /// Chart title
        #[arg(long)]
        title: Option<String>,

        /// Chart width in pixels
        #[arg(long, default_value_t = DEFAULT_CHART_WIDTH)]
        width: usize,

        /// Chart height in pixels
        #[arg(long, default_value_t = DEFAULT_CHART_HEIGHT)]
        height: usize,

        /// Leave the floating stats box out of the chart
        #[arg(long)]
        hide_stats: bool,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// List transactions with search, month filter and pagination
    List {
        /// Catalog URL or local JSON file
        #[arg(short, long, env = "TXDASH_SOURCE", default_value = DEFAULT_SOURCE_URL)]
        source: String,

        /// Month filter (1-12 or name); omitted = all months
        #[arg(short, long, default_value = "none")]
        month: MonthFilter,

        /// Search title, description or price
        #[arg(short = 'q', long, default_value = "")]
        search: String,

        /// Page to show (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Rows per page
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: usize,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Report {
            source,
            month,
            output,
            no_output,
            chart,
            thresholds,
            title,
            width,
            height,
            hide_stats,
            summary,
        } => {
            let mut view = ViewState::default().with_month(month);
            if hide_stats {
                view = view.hide_stats_box();
            }

            let mut chart_config = ChartConfig::new()
                .with_size(width, height)
                .with_stats_box(view.stats_box);
            if let Some(title_str) = title {
                chart_config = chart_config.with_title(title_str);
            }

            let args = ReportArgs {
                source,
                month: view.month,
                output_json: (!no_output).then_some(output),
                output_svg: chart,
                thresholds,
                chart_config,
                print_summary: summary,
            };

            // Validate args first
            validate_report_args(&args)?;

            execute_report(args)?;
        }

        Commands::List {
            source,
            month,
            search,
            page,
            page_size,
        } => {
            let args = ListArgs {
                source,
                month,
                search,
                page,
                page_size,
            };

            validate_list_args(&args)?;

            execute_list(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
