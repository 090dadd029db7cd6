//! Types describing where the catalog comes from and how far loading got.

use crate::utils::error::FetchError;
use std::fmt;
use std::path::PathBuf;

/// Where to load the catalog from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// HTTP(S) URL serving the whole catalog as one JSON document
    Remote(String),

    /// Local JSON file with the same shape
    File(PathBuf),
}

impl CatalogSource {
    /// Interpret a user-supplied source string
    ///
    /// Anything starting with `http://` or `https://` is remote; everything
    /// else is treated as a file path.
    pub fn parse(source: &str) -> Result<Self, FetchError> {
        let source = source.trim();

        if source.is_empty() {
            return Err(FetchError::InvalidSource("source cannot be empty".to_string()));
        }

        if source.starts_with("http://") || source.starts_with("https://") {
            Ok(Self::Remote(source.to_string()))
        } else if source.contains("://") {
            Err(FetchError::InvalidSource(format!(
                "unsupported scheme in {}",
                source
            )))
        } else {
            Ok(Self::File(PathBuf::from(source)))
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote(url) => write!(f, "{}", url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Loading/error state owned by the data provider
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    /// Nothing requested yet
    Idle,

    /// Fetch in flight
    Loading,

    /// Catalog available
    Ready(T),

    /// Fetch or parse failed; user-facing message
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Idle
    }
}
