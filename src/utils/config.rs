//! Configuration and constants for the CLI.

use std::time::Duration;

/// Default remote catalog (single bulk JSON payload)
pub const DEFAULT_SOURCE_URL: &str =
    "https://s3.amazonaws.com/roxiler.com/product_transaction.json";

/// Default timeout for the catalog fetch
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Rows shown per page in the listing
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 500;

/// Lower bounds of the price buckets: [0,100), [100,200), ... [900, +inf)
pub const DEFAULT_PRICE_THRESHOLDS: &[i64] = &[0, 100, 200, 300, 400, 500, 600, 700, 800, 900];

// Chart geometry (pixels)
pub const DEFAULT_CHART_WIDTH: usize = 1000;
pub const DEFAULT_CHART_HEIGHT: usize = 400;

// Stats box geometry, used for the initial drag offset
pub const STATS_BOX_WIDTH: f64 = 256.0;
pub const STATS_BOX_HEIGHT: f64 = 140.0;

// Some mirrors wrap the record array in an object
pub const RECORD_ARRAY_FIELD_NAMES: &[&str] = &["transactions", "data", "items", "products"];
