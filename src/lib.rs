//! Transaction Dashboard
//!
//! Fetches a catalog of commerce transactions, filters it by month, and
//! charts the price distribution together with sales totals.
//!
//! This crate provides the core implementation for the `txdash` CLI tool.
//! The aggregation core lives in [`aggregator`]; everything around it
//! (fetching, parsing, view state, rendering) is a collaborator.
//!
//! ## Getting Started
//!
//! ```bash
//! txdash report --month 3 --chart chart.svg --summary
//! txdash list --search shirt --page 2
//! ```

pub mod aggregator;
pub mod chart;
pub mod commands;
pub mod output;
pub mod parser;
pub mod provider;
pub mod utils;
pub mod view;
