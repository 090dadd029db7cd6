//! Catalog parser: raw JSON records to typed `Transaction`s.
//!
//! All coercions happen here so the aggregator only ever sees a numeric
//! price and a real date:
//! - price: JSON number or numeric string, read from its text into `Decimal`
//! - dateOfSale: RFC 3339, naive date-time, or plain date
//! - id: non-negative integer or integer string
//!
//! A record that cannot be coerced is skipped with a warning; one bad record
//! never aborts the whole catalog.

use super::schema::Transaction;
use crate::utils::config::RECORD_ARRAY_FIELD_NAMES;
use crate::utils::error::ParseError;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use log::{debug, warn};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;

/// Result of parsing a catalog payload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogParse {
    /// Records that parsed, in source order
    pub transactions: Vec<Transaction>,

    /// Records dropped because a required field could not be coerced
    pub skipped: usize,
}

/// Record as it appears on the wire, before coercion
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRecord {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    price: Option<Value>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    sold: Option<Value>,
    #[serde(default)]
    date_of_sale: Option<Value>,
    #[serde(default)]
    image: Option<String>,
}

/// Parse a catalog from its JSON text
///
/// **Public** - entry point used by the data provider
///
/// # Errors
/// * `ParseError::JsonError` - body is not JSON
/// * `ParseError::InvalidFormat` - no record array found
pub fn parse_catalog_str(body: &str) -> Result<CatalogParse, ParseError> {
    let raw: Value = serde_json::from_str(body)?;
    parse_catalog(&raw)
}

/// Parse an already-decoded catalog payload
///
/// **Public** - main entry point for parsing
///
/// # Arguments
/// * `raw` - JSON array of records, or an object wrapping one
///
/// # Returns
/// Parsed transactions plus the number of skipped records
pub fn parse_catalog(raw: &Value) -> Result<CatalogParse, ParseError> {
    let records = extract_records(raw)?;
    debug!("Parsing {} catalog records", records.len());

    let mut catalog = CatalogParse {
        transactions: Vec::with_capacity(records.len()),
        skipped: 0,
    };

    for (index, record) in records.iter().enumerate() {
        match parse_record(record) {
            Ok(transaction) => catalog.transactions.push(transaction),
            Err(reason) => {
                warn!("Skipping record {}: {}", index, reason);
                catalog.skipped += 1;
            }
        }
    }

    Ok(catalog)
}

/// Locate the record array
///
/// **Private** - internal helper for parse_catalog
fn extract_records(raw: &Value) -> Result<&Vec<Value>, ParseError> {
    match raw {
        Value::Array(records) => Ok(records),

        Value::Object(obj) => RECORD_ARRAY_FIELD_NAMES
            .iter()
            .find_map(|field| obj.get(*field).and_then(Value::as_array))
            .ok_or_else(|| {
                ParseError::InvalidFormat(format!(
                    "Object has none of the record fields {:?}",
                    RECORD_ARRAY_FIELD_NAMES
                ))
            }),

        _ => Err(ParseError::InvalidFormat(
            "Catalog must be a JSON array or object".to_string(),
        )),
    }
}

/// Coerce one raw record
///
/// **Public** - exposed for tests; the error is a human-readable reason
pub fn parse_record(value: &Value) -> Result<Transaction, String> {
    let raw: RawRecord = serde_json::from_value(value.clone()).map_err(|e| e.to_string())?;

    let id = raw
        .id
        .as_ref()
        .and_then(coerce_id)
        .ok_or_else(|| "missing or invalid id".to_string())?;

    let price = raw
        .price
        .as_ref()
        .and_then(coerce_price)
        .ok_or_else(|| format!("id {}: missing or non-numeric price", id))?;

    let sold = raw
        .sold
        .as_ref()
        .and_then(coerce_bool)
        .ok_or_else(|| format!("id {}: missing or invalid sold flag", id))?;

    let date_of_sale = raw
        .date_of_sale
        .as_ref()
        .and_then(Value::as_str)
        .and_then(parse_sale_date)
        .ok_or_else(|| format!("id {}: missing or unparsable dateOfSale", id))?;

    Ok(Transaction {
        id,
        title: raw.title.unwrap_or_default(),
        description: raw.description.unwrap_or_default(),
        price,
        category: raw.category.unwrap_or_default(),
        sold,
        date_of_sale,
        image: raw.image.unwrap_or_default(),
    })
}

fn coerce_id(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Read a price from its textual form so 109.95 stays 109.95
///
/// **Public** - also used when parsing CLI thresholds
pub fn coerce_price(value: &Value) -> Option<Decimal> {
    let text = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return None,
    };

    parse_decimal(&text)
}

/// Parse plain or scientific decimal text
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    if text.is_empty() {
        return None;
    }

    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

fn coerce_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Parse a sale date
///
/// Naive forms are taken as UTC. The month is later read in the offset
/// the date carries, never converted to the local zone.
pub fn parse_sale_date(text: &str) -> Option<DateTime<FixedOffset>> {
    let text = text.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(text) {
        return Some(date);
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc().fixed_offset());
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc().fixed_offset())
}
