//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//!
//! The aggregation core has no error type: it never fails on typed input.

use thiserror::Error;

/// Errors that can occur while fetching the catalog
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("HTTP error! status: {0}")]
    BadStatus(u16),

    #[error("Failed to read catalog file: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("Invalid catalog source: {0}")]
    InvalidSource(String),
}

/// Errors that can occur during catalog parsing
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid catalog format: {0}")]
    InvalidFormat(String),
}

/// Errors that can occur while loading the catalog end to end
#[derive(Error, Debug)]
pub enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Errors that can occur while configuring or rendering the chart
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Invalid price thresholds: {0}")]
    InvalidThresholds(String),

    #[error("Invalid chart dimensions: {0}x{1}")]
    InvalidDimensions(usize, usize),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
