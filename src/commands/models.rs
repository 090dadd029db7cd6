use crate::aggregator::MonthFilter;
use crate::chart::ChartConfig;
use crate::utils::config::{DEFAULT_PAGE_SIZE, DEFAULT_SOURCE_URL};
use std::path::PathBuf;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Catalog URL or local JSON path
    pub source: String,

    /// Month to aggregate
    pub month: MonthFilter,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Output path for the SVG chart (optional)
    pub output_svg: Option<PathBuf>,

    /// Comma-separated bucket thresholds; None = default 0..900
    pub thresholds: Option<String>,

    /// Chart configuration
    pub chart_config: ChartConfig,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE_URL.to_string(),
            month: MonthFilter::Unselected,
            output_json: Some(PathBuf::from("report.json")),
            output_svg: None,
            thresholds: None,
            chart_config: ChartConfig::default(),
            print_summary: false,
        }
    }
}

/// Arguments for the list command
#[derive(Debug, Clone)]
pub struct ListArgs {
    /// Catalog URL or local JSON path
    pub source: String,

    /// Month filter; unselected lists every month
    pub month: MonthFilter,

    /// Case-insensitive search text
    pub search: String,

    /// 1-based page to show
    pub page: usize,

    /// Rows per page
    pub page_size: usize,
}

impl Default for ListArgs {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE_URL.to_string(),
            month: MonthFilter::Unselected,
            search: String::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
