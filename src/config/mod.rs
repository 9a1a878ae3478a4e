//! Configuration management for the ingest service
//!
//! Settings are layered, lowest priority first:
//! 1. Default values (embedded in structs)
//! 2. TOML configuration file
//! 3. Environment variables `INGEST__<section>__<key>`
//! 4. Destination variables `destinationStorageAccount`,
//!    `destinationStorageKey` and `destinationContainer`; the account key
//!    falls back to `AZURE_STORAGE_ACCESS_KEY` when `destinationStorageKey`
//!    is unset
//!
//! # Usage
//!
//! ```no_run
//! use inspection_ingest::config::Config;
//!
//! let config = Config::load().expect("Failed to load configuration");
//! println!("Writing to container: {}", config.storage.container);
//! ```
//!
//! # Configuration File
//!
//! By default, the configuration is loaded from `config/ingest.toml`.
//! This can be overridden using the `INGEST_CONFIG` environment variable
//! or the `--config` flag.

mod models;
mod sources;
mod validation;

pub use models::{
    Config, DEFAULT_ENDPOINT_SUFFIX, ServerConfig, StorageConfig, StorageProvider,
};
pub use validation::ValidationError;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] ValidationError),
}

impl Config {
    /// Load configuration from all sources (file + environment)
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file is malformed or the
    /// destination storage settings are incomplete.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(None)
    }

    /// Same as [`Config::load`] with an explicit file path taking precedence
    /// over `INGEST_CONFIG`
    pub fn load_with(path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let config = sources::load(path)?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific path, without destination variables
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        let config = sources::load_from_sources(path)?;
        validation::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_memory_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        let toml_content = r#"
[storage]
provider = "memory"
container = "evidence"
        "#;

        fs::write(&config_path, toml_content).unwrap();

        let config = Config::load_from_path(config_path).unwrap();
        assert_eq!(config.storage.provider, StorageProvider::Memory);
        assert_eq!(config.storage.container, "evidence");
    }

    #[test]
    fn test_validation_catches_missing_key() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        let toml_content = r#"
[storage]
provider = "azure"
account = "inspections"
container = "evidence"
        "#;

        fs::write(&config_path, toml_content).unwrap();

        let result = Config::load_from_path(config_path);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::ValidationError(ValidationError::MissingAzureSetting(_))
        ));
    }

    #[test]
    fn test_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        fs::write(&config_path, "[server\nbind_addr = ").unwrap();

        assert!(matches!(
            Config::load_from_path(config_path),
            Err(ConfigError::LoadError(_))
        ));
    }
}
