use std::fmt;
use std::path::PathBuf;

use qb_core::{CatalogError, WireError};

#[derive(Debug)]
pub enum StoreError {
    Io { path: PathBuf, source: std::io::Error },
    Json(serde_json::Error),
    Toml { path: PathBuf, source: toml::de::Error },
    Catalog(CatalogError),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io { path, source } => write!(f, "I/O error on {}: {source}", path.display()),
            StoreError::Json(e) => write!(f, "JSON error: {e}"),
            StoreError::Toml { path, source } => {
                write!(f, "invalid config {}: {source}", path.display())
            }
            StoreError::Catalog(e) => write!(f, "invalid dataset: {e}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io { source, .. } => Some(source),
            StoreError::Json(e) => Some(e),
            StoreError::Toml { source, .. } => Some(source),
            StoreError::Catalog(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Json(e)
    }
}

impl From<CatalogError> for StoreError {
    fn from(e: CatalogError) -> Self {
        StoreError::Catalog(e)
    }
}

impl From<WireError> for StoreError {
    fn from(e: WireError) -> Self {
        match e {
            WireError::Json(e) => StoreError::Json(e),
            WireError::Catalog(e) => StoreError::Catalog(e),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
