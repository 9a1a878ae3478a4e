use super::models::{Config, StorageProvider};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Storage provider is Azure but {0} is missing")]
    MissingAzureSetting(&'static str),

    #[error("Storage provider is local but storage.root is not set")]
    MissingLocalRoot,

    #[error("Destination container name must not be empty")]
    EmptyContainer,

    #[error("max_payload_bytes must be positive")]
    InvalidPayloadLimit,
}

/// Validate the entire configuration
pub fn validate(config: &Config) -> Result<(), ValidationError> {
    validate_server(config)?;
    validate_storage(config)?;
    Ok(())
}

fn validate_server(config: &Config) -> Result<(), ValidationError> {
    if config.server.max_payload_bytes == 0 {
        return Err(ValidationError::InvalidPayloadLimit);
    }
    Ok(())
}

fn validate_storage(config: &Config) -> Result<(), ValidationError> {
    let storage = &config.storage;

    if storage.container.trim().is_empty() {
        return Err(ValidationError::EmptyContainer);
    }

    match storage.provider {
        StorageProvider::Azure => {
            if storage.account.as_deref().is_none_or(str::is_empty) {
                return Err(ValidationError::MissingAzureSetting("account"));
            }
            if storage.access_key.as_deref().is_none_or(str::is_empty) {
                return Err(ValidationError::MissingAzureSetting("access key"));
            }
        }
        StorageProvider::Local => {
            if storage.root.is_none() {
                return Err(ValidationError::MissingLocalRoot);
            }
        }
        StorageProvider::Memory => {}
    }

    Ok(())
}
