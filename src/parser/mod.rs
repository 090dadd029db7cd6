//! Catalog parsing and schema definitions.
//!
//! This module handles:
//! - Locating the record array in the fetched JSON
//! - Coercing raw records into typed transactions
//! - Defining the report schema written to disk

pub mod catalog;
pub mod schema;

// Re-export main types
pub use catalog::{parse_catalog, parse_catalog_str, parse_record, CatalogParse};
pub use schema::{Report, Transaction};
