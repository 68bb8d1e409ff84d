use std::fs;
use std::path::{Path, PathBuf};

use qb_core::{Catalog, export_json, fixture, import_json};

use crate::config::Config;
use crate::error::{Result, StoreError};

/// Where the catalog is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// The dataset compiled into the binary.
    Builtin,
    /// A JSON dataset file.
    File(PathBuf),
}

impl DataSource {
    /// Pick the source: explicit path (flag or env) > config `data` > builtin.
    pub fn resolve(explicit: Option<&Path>, config: &Config) -> Self {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| config.data.clone())
            .map_or(DataSource::Builtin, DataSource::File)
    }

    pub fn describe(&self) -> String {
        match self {
            DataSource::Builtin => "builtin".to_string(),
            DataSource::File(path) => path.display().to_string(),
        }
    }
}

/// Load and validate the catalog. The catalog is built in one step, so a
/// failed load leaves nothing half-initialised behind.
pub fn load_catalog(source: &DataSource) -> Result<Catalog> {
    let catalog = match source {
        DataSource::Builtin => fixture::catalog()?,
        DataSource::File(path) => {
            let json = fs::read_to_string(path).map_err(|e| StoreError::Io {
                path: path.clone(),
                source: e,
            })?;
            import_json(&json)?
        }
    };

    tracing::debug!(
        "loaded catalog from {}: {} authors, {} categories, {} quotes",
        source.describe(),
        catalog.authors().len(),
        catalog.categories().len(),
        catalog.quotes().len()
    );
    Ok(catalog)
}

/// Write the catalog as a JSON dataset, creating parent directories as needed.
pub fn save_catalog(catalog: &Catalog, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| StoreError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    let json = export_json(catalog)?;
    fs::write(path, json).map_err(|e| StoreError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::info!("wrote dataset to {}", path.display());
    Ok(())
}
