//! Chart rendering for monthly reports.
//!
//! Converts a histogram and its sales totals into an SVG bar chart
//! or a terminal summary.

pub mod generator;

// Re-export main types
pub use generator::{chart_title, generate_bar_chart, generate_text_summary, ChartConfig};
