use super::models::Config;
use config::{ConfigError, Environment, File};
use std::env;
use std::path::PathBuf;

const CONFIG_ENV_VAR: &str = "INGEST_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config/ingest.toml";
const ENV_PREFIX: &str = "INGEST";
const ENV_SEPARATOR: &str = "__";

/// Destination variables understood by existing function-app deployments
const DESTINATION_ACCOUNT_VAR: &str = "destinationStorageAccount";
const DESTINATION_KEY_VAR: &str = "destinationStorageKey";
const DESTINATION_CONTAINER_VAR: &str = "destinationContainer";
/// Read only when `destinationStorageKey` is unset
const FALLBACK_KEY_VAR: &str = "AZURE_STORAGE_ACCESS_KEY";

/// Resolve the config file path: explicit argument, then `INGEST_CONFIG`, then the default
pub fn config_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| env::var(CONFIG_ENV_VAR).ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Load configuration from multiple sources with priority:
/// 1. Defaults (embedded in structs)
/// 2. TOML file (if exists)
/// 3. Environment variables from .env file (via dotenvy)
/// 4. System environment variables (highest priority)
pub fn load(explicit_path: Option<PathBuf>) -> Result<Config, ConfigError> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let mut config = load_from_sources(config_path(explicit_path))?;

    apply_destination(&mut config, |name| env::var(name).ok());

    Ok(config)
}

/// Overlay the destination account, key and container.
///
/// The key falls back to `AZURE_STORAGE_ACCESS_KEY` when
/// `destinationStorageKey` is not set.
/// The key is a secret and only ever comes from the environment.
pub(crate) fn apply_destination<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(account) = lookup(DESTINATION_ACCOUNT_VAR) {
        config.storage.account = Some(account);
    }
    if let Some(key) = lookup(DESTINATION_KEY_VAR) {
        config.storage.access_key = Some(key);
    }
    if let Some(container) = lookup(DESTINATION_CONTAINER_VAR) {
        config.storage.container = container;
    }

    if config.storage.access_key.is_none() {
        config.storage.access_key = lookup(FALLBACK_KEY_VAR);
    }
}

/// Load configuration from a specific path and environment
/// Useful for testing with custom config files
pub fn load_from_sources(config_path: PathBuf) -> Result<Config, ConfigError> {
    let mut builder = config::Config::builder();

    if config_path.exists() {
        tracing::info!("Loading configuration from: {}", config_path.display());
        builder = builder.add_source(File::from(config_path).required(false));
    } else {
        tracing::warn!(
            "Configuration file not found at {}, using defaults and environment overrides",
            config_path.display()
        );
    }

    // INGEST__STORAGE__CONTAINER -> storage.container
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator(ENV_SEPARATOR)
            .try_parsing(true),
    );

    let config = builder.build()?;
    config.try_deserialize()
}
