//! TOML configuration file.
//!
//! ```toml
//! data = "quotes.json"        # optional; builtin dataset when absent
//!
//! [server]
//! bind = "127.0.0.1:8080"
//!
//! [display]
//! featured_limit = 6
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, StoreError};

/// Config file picked up from the working directory when nothing else is given.
pub const DEFAULT_CONFIG_FILE: &str = "quotebook.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// JSON dataset path. Relative paths resolve against the config file's directory.
    pub data: Option<PathBuf>,
    pub server: ServerConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    pub featured_limit: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { featured_limit: 6 }
    }
}

impl Config {
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| StoreError::Toml {
            path: origin.to_path_buf(),
            source: e,
        })
    }

    /// Read a config file. A relative `data` path is anchored at the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| StoreError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut config = Self::from_toml_str(&content, path)?;
        if let Some(data) = &config.data
            && data.is_relative()
            && let Some(dir) = path.parent()
        {
            config.data = Some(dir.join(data));
        }
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load the config at `path` if given, otherwise defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}

/// Pick the config file: explicit path (flag or env) > `./quotebook.toml` if present.
pub fn resolve_config_path(explicit: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let candidate = cwd.join(DEFAULT_CONFIG_FILE);
    candidate.is_file().then_some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = Config::from_toml_str("", Path::new("x.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.server.bind, "127.0.0.1:8080");
        assert_eq!(config.display.featured_limit, 6);
    }

    #[test]
    fn test_partial_sections() {
        let config = Config::from_toml_str(
            "data = \"/srv/quotes.json\"\n[display]\nfeatured_limit = 3\n",
            Path::new("x.toml"),
        )
        .unwrap();
        assert_eq!(config.data, Some(PathBuf::from("/srv/quotes.json")));
        assert_eq!(config.display.featured_limit, 3);
        assert_eq!(config.server, ServerConfig::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = Config::from_toml_str("colour = \"blue\"", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, StoreError::Toml { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }
}
