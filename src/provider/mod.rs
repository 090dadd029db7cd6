//! Data provider: the single bulk fetch of the transaction catalog.

pub mod client;
pub mod types;

// Re-export main types
pub use client::{fetch_body, load_catalog, CatalogClient, DataProvider};
pub use types::{CatalogSource, LoadState};
