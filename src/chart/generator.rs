//! SVG bar chart and terminal summary for a monthly report.
//!
//! The SVG is written by hand:
//! - Dashed grid with integer y ticks
//! - One bar per price bucket, threshold order
//! - Floating "Sales Stats" box at the view state's position

use crate::aggregator::MonthlyReport;
use crate::utils::config::{DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH, STATS_BOX_HEIGHT, STATS_BOX_WIDTH};
use crate::utils::error::ChartError;
use crate::view::StatsBox;
use log::info;

const MIN_WIDTH: usize = 200;
const MIN_HEIGHT: usize = 150;

const BAR_COLOR: &str = "#7FDBDA";
const GRID_COLOR: &str = "#e5e5e5";

const PRICE_RANGE_HEADER: &str = "Price Range";

// Plot margins (pixels)
const MARGIN_TOP: usize = 50;
const MARGIN_RIGHT: usize = 30;
const MARGIN_BOTTOM: usize = 60;
const MARGIN_LEFT: usize = 60;

/// Chart configuration
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Overrides the default "Bar Chart Stats - ..." title
    pub title: Option<String>,
    pub width: usize,
    pub height: usize,
    pub stats_box: StatsBox,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: None,
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
            stats_box: StatsBox::default(),
        }
    }
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_stats_box(mut self, stats_box: StatsBox) -> Self {
        self.stats_box = stats_box;
        self
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        if self.width < MIN_WIDTH || self.height < MIN_HEIGHT {
            return Err(ChartError::InvalidDimensions(self.width, self.height));
        }
        Ok(())
    }
}

/// Default heading for a report
pub fn chart_title(report: &MonthlyReport) -> String {
    format!("Bar Chart Stats - {}", report.filter)
}

/// Generate an SVG bar chart from a monthly report
///
/// **Public** - main entry point for chart rendering
///
/// # Errors
/// * `ChartError::InvalidDimensions` - canvas too small to lay out
pub fn generate_bar_chart(
    report: &MonthlyReport,
    config: Option<&ChartConfig>,
) -> Result<String, ChartError> {
    let config = config.cloned().unwrap_or_default();
    config.validate()?;

    info!("Generating bar chart with {} buckets", report.histogram.len());

    let width = config.width;
    let height = config.height;
    let plot_width = (width - MARGIN_LEFT - MARGIN_RIGHT) as f64;
    let plot_height = (height - MARGIN_TOP - MARGIN_BOTTOM) as f64;
    let plot_bottom = (height - MARGIN_BOTTOM) as f64;

    let (tick_step, y_max) = y_axis_scale(report.max_count());

    let mut svg = String::new();

    // Header
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        width, height, width, height
    ));
    svg.push_str(
        r#"<style>.label { font: 12px sans-serif; fill: #333333; } .bar:hover { opacity: 0.8; }</style>"#,
    );

    // Title
    let title = config.title.clone().unwrap_or_else(|| chart_title(report));
    svg.push_str(&format!(
        r#"<text x="{}" y="24" font-size="18" text-anchor="middle">{}</text>"#,
        width / 2,
        escape_xml(&title)
    ));

    // Grid and y ticks
    let mut tick = 0;
    while tick <= y_max {
        let y = plot_bottom - (tick as f64 / y_max as f64) * plot_height;
        svg.push_str(&format!(
            r#"<line x1="{}" y1="{:.2}" x2="{}" y2="{:.2}" stroke="{}" stroke-dasharray="3 3"/>"#,
            MARGIN_LEFT,
            y,
            width - MARGIN_RIGHT,
            y,
            GRID_COLOR
        ));
        svg.push_str(&format!(
            r#"<text x="{}" y="{:.2}" dy="4" text-anchor="end" class="label">{}</text>"#,
            MARGIN_LEFT - 8,
            y,
            tick
        ));
        tick += tick_step;
    }

    // Bars
    let slot = plot_width / report.histogram.len().max(1) as f64;
    let bar_width = slot * 0.7;
    for (i, bucket) in report.histogram.iter().enumerate() {
        let x = MARGIN_LEFT as f64 + i as f64 * slot + (slot - bar_width) / 2.0;
        let bar_height = (bucket.count as f64 / y_max as f64) * plot_height;
        let label = escape_xml(&bucket.range_label);

        svg.push_str(&format!(
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}" class="bar"><title>{}: {}</title></rect>"#,
            x,
            plot_bottom - bar_height,
            bar_width,
            bar_height,
            BAR_COLOR,
            label,
            bucket.count
        ));
        svg.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" class="label">{}</text>"#,
            x + bar_width / 2.0,
            plot_bottom + 18.0,
            label
        ));
    }

    // Legend
    let legend_y = height - 16;
    svg.push_str(&format!(
        r#"<rect x="{}" y="{}" width="12" height="12" fill="{}"/>"#,
        width / 2 - 30,
        legend_y - 10,
        BAR_COLOR
    ));
    svg.push_str(&format!(
        r#"<text x="{}" y="{}" class="label">count</text>"#,
        width / 2 - 12,
        legend_y
    ));

    if config.stats_box.visible {
        render_stats_box(report, &config.stats_box, &mut svg);
    }

    svg.push_str("</svg>");

    info!("Bar chart generated successfully ({} bytes)", svg.len());
    Ok(svg)
}

/// Integer tick step and axis maximum for a count axis
///
/// **Private** - keeps the axis at about five ticks
fn y_axis_scale(max_count: u64) -> (u64, u64) {
    let max_count = max_count.max(1);
    let step = max_count.div_ceil(5).max(1);
    (step, step * max_count.div_ceil(step))
}

fn render_stats_box(report: &MonthlyReport, stats_box: &StatsBox, out: &mut String) {
    let x = stats_box.position.x;
    let y = stats_box.position.y;
    let summary = &report.summary;

    out.push_str(&format!(
        r##"<g class="stats-box"><rect x="{:.2}" y="{:.2}" width="{}" height="{}" rx="8" fill="#111827" opacity="0.9"/>"##,
        x, y, STATS_BOX_WIDTH, STATS_BOX_HEIGHT
    ));

    let lines = [
        ("Sales Stats".to_string(), "16"),
        (format!("Total Sale: {}", summary.display_total_sale()), "13"),
        (format!("Total Items Sold: {}", summary.total_sold), "13"),
        (format!("Total Items Not Sold: {}", summary.total_not_sold), "13"),
    ];

    for (i, (text, size)) in lines.iter().enumerate() {
        out.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" font-size="{}" fill="white">{}</text>"#,
            x + 16.0,
            y + 30.0 + i as f64 * 28.0,
            size,
            escape_xml(text)
        ));
    }

    out.push_str("</g>");
}

/// Escape text for SVG content and attributes
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Create a text summary with a horizontal bar per bucket
pub fn generate_text_summary(report: &MonthlyReport, max_bar_width: usize) -> String {
    let mut lines = Vec::new();
    let max_count = report.max_count().max(1);
    let color = "\x1b[36m";
    let reset = "\x1b[0m";

    // Range column fits the longest label (custom thresholds can be wide)
    let label_width = report
        .histogram
        .iter()
        .map(|b| b.range_label.chars().count())
        .chain(std::iter::once(PRICE_RANGE_HEADER.len()))
        .max()
        .unwrap_or(PRICE_RANGE_HEADER.len());
    let range_rule = "━".repeat(label_width + 2);
    let count_rule = "━".repeat(8);

    lines.push(format!("  📊 {}", chart_title(report)));
    lines.push(format!("  ┏{}┳{}┓", range_rule, count_rule));
    lines.push(format!(
        "  ┃ {:<w$} ┃ {:>6} ┃",
        PRICE_RANGE_HEADER,
        "Count",
        w = label_width
    ));
    lines.push(format!("  ┣{}╋{}┫", range_rule, count_rule));

    for bucket in &report.histogram {
        let bar_width = (bucket.count as usize * max_bar_width) / max_count as usize;
        lines.push(format!(
            "  ┃ {:<w$} ┃ {:>6} ┃ {}{}{}",
            bucket.range_label,
            bucket.count,
            color,
            "█".repeat(bar_width),
            reset,
            w = label_width
        ));
    }

    lines.push(format!("  ┗{}┻{}┛", range_rule, count_rule));
    lines.push(String::new());
    lines.push("  💰 SALES STATS".to_string());
    lines.push(format!("  Total Sale:           {}", report.summary.display_total_sale()));
    lines.push(format!("  Total Items Sold:     {}", report.summary.total_sold));
    lines.push(format!("  Total Items Not Sold: {}", report.summary.total_not_sold));

    if report.excluded > 0 {
        lines.push(format!(
            "  ({} transactions with a negative price left out)",
            report.excluded
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::{aggregate, MonthFilter, PriceBuckets};
    use chrono::Month;

    #[test]
    fn test_y_axis_scale() {
        assert_eq!(y_axis_scale(0), (1, 1));
        assert_eq!(y_axis_scale(3), (1, 3));
        assert_eq!(y_axis_scale(12), (3, 12));
        assert_eq!(y_axis_scale(13), (3, 15));
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("men's & <women>"), "men&apos;s &amp; &lt;women&gt;");
    }

    #[test]
    fn test_text_summary_column_fits_wide_labels() {
        let buckets = PriceBuckets::parse_list("0,1000.25,10000.75").unwrap();
        let report = aggregate(&[], MonthFilter::Selected(Month::March), &buckets);

        let summary = generate_text_summary(&report, 20);
        assert!(summary.contains("1000.25-10000.75"));

        let column_positions: Vec<Vec<usize>> = summary
            .lines()
            .filter(|line| line.contains('┃'))
            .map(|line| {
                line.chars()
                    .enumerate()
                    .filter(|(_, c)| *c == '┃')
                    .map(|(i, _)| i)
                    .collect()
            })
            .collect();

        assert_eq!(column_positions.len(), 4);
        assert!(column_positions.iter().all(|p| *p == column_positions[0]));

        let top_border = summary.lines().find(|line| line.contains('┏')).unwrap();
        let split = top_border.chars().position(|c| c == '┳').unwrap();
        assert_eq!(split, column_positions[0][1]);
    }

    #[test]
    fn test_config_validation() {
        assert!(ChartConfig::new().validate().is_ok());
        assert!(ChartConfig::new().with_size(100, 400).validate().is_err());
        assert!(ChartConfig::new().with_size(800, 100).validate().is_err());
    }
}
