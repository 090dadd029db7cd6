//! HTTP client and data provider for the transaction catalog.
//!
//! The catalog is fetched once, as a single bulk JSON document.
//! There is no retry or cancellation; a failure becomes a `LoadState::Failed`.

use super::types::{CatalogSource, LoadState};
use crate::parser::{parse_catalog_str, CatalogParse, Transaction};
use crate::utils::config::DEFAULT_FETCH_TIMEOUT;
use crate::utils::error::{FetchError, LoadError};
use log::{debug, error, info};
use reqwest::blocking::Client;
use std::time::Duration;

/// Blocking HTTP client for the catalog endpoint
pub struct CatalogClient {
    client: Client,
}

impl CatalogClient {
    /// Create a new client with the default timeout
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(DEFAULT_FETCH_TIMEOUT)
    }

    /// Create a client with a custom timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::RequestFailed)?;

        Ok(Self { client })
    }

    /// Fetch the raw catalog body from `url`
    ///
    /// # Errors
    /// * `FetchError::RequestFailed` - connection, TLS or timeout failure
    /// * `FetchError::BadStatus` - server answered with a non-2xx status
    pub fn fetch(&self, url: &str) -> Result<String, FetchError> {
        info!("Fetching catalog from: {}", url);

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .map_err(FetchError::RequestFailed)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::BadStatus(status.as_u16()));
        }

        let body = response.text().map_err(FetchError::RequestFailed)?;
        debug!("Catalog response: {} bytes", body.len());

        Ok(body)
    }
}

/// Read the catalog body from any supported source
///
/// **Public** - used by the data provider and by tests
pub fn fetch_body(source: &CatalogSource) -> Result<String, FetchError> {
    match source {
        CatalogSource::Remote(url) => CatalogClient::new()?.fetch(url),
        CatalogSource::File(path) => {
            info!("Reading catalog from: {}", path.display());
            std::fs::read_to_string(path).map_err(FetchError::ReadFailed)
        }
    }
}

/// Fetch and parse in one step
pub fn load_catalog(source: &CatalogSource) -> Result<CatalogParse, LoadError> {
    let body = fetch_body(source)?;
    let catalog = parse_catalog_str(&body)?;
    Ok(catalog)
}

/// Owns the catalog and its loading/error state
///
/// Consumers only ever see a transaction slice; while loading or after a
/// failure that slice is empty.
pub struct DataProvider {
    source: CatalogSource,
    state: LoadState<CatalogParse>,
}

impl DataProvider {
    pub fn new(source: CatalogSource) -> Self {
        Self {
            source,
            state: LoadState::Idle,
        }
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    pub fn state(&self) -> &LoadState<CatalogParse> {
        &self.state
    }

    /// Perform the single fetch and record the outcome
    pub fn load(&mut self) -> &LoadState<CatalogParse> {
        self.state = LoadState::Loading;

        self.state = match load_catalog(&self.source) {
            Ok(catalog) => {
                info!(
                    "Loaded {} transactions ({} skipped)",
                    catalog.transactions.len(),
                    catalog.skipped
                );
                LoadState::Ready(catalog)
            }
            Err(e) => {
                error!("Fetch error: {}", e);
                LoadState::Failed(e.to_string())
            }
        };

        &self.state
    }

    /// Loaded transactions, or an empty slice if nothing is loaded
    pub fn transactions(&self) -> &[Transaction] {
        self.state
            .data()
            .map(|catalog| catalog.transactions.as_slice())
            .unwrap_or(&[])
    }

    /// Records dropped by the parser
    pub fn skipped(&self) -> usize {
        self.state.data().map(|catalog| catalog.skipped).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CATALOG: &str = r#"[
        {"id": 1, "title": "Backpack", "description": "Laptop bag", "price": 109.95,
         "category": "men's clothing", "sold": false,
         "dateOfSale": "2021-11-27T20:29:54+05:30", "image": "https://example.com/1.jpg"},
        {"id": 2, "title": "T-Shirt", "description": "Slim fit", "price": "22.3",
         "category": "men's clothing", "sold": true,
         "dateOfSale": "2021-10-27T20:29:54+05:30", "image": "https://example.com/2.jpg"}
    ]"#;

    #[test]
    fn test_provider_loads_file_source() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(CATALOG.as_bytes()).unwrap();

        let mut provider = DataProvider::new(CatalogSource::File(file.path().to_path_buf()));
        assert_eq!(provider.transactions().len(), 0);

        assert!(provider.load().is_ready());
        assert_eq!(provider.transactions().len(), 2);
        assert_eq!(provider.skipped(), 0);
    }

    #[test]
    fn test_provider_failure_yields_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");

        let mut provider = DataProvider::new(CatalogSource::File(missing));
        let state = provider.load();

        assert!(state.error().is_some());
        assert!(provider.transactions().is_empty());
        assert_eq!(provider.skipped(), 0);
    }

    #[test]
    fn test_load_catalog_rejects_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let result = load_catalog(&CatalogSource::File(file.path().to_path_buf()));
        assert!(matches!(result, Err(LoadError::Parse(_))));
    }
}
