pub mod config;
pub mod error;
pub mod source;

pub use config::{Config, DisplayConfig, ServerConfig, resolve_config_path};
pub use error::{Result, StoreError};
pub use source::{DataSource, load_catalog, save_catalog};
