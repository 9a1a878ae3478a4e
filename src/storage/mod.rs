//! Blob storage for extracted assets
//! Backed by the object_store crate (Azure Blob, local filesystem or memory)

use bytes::Bytes;
use object_store::{
    ObjectStore, azure::MicrosoftAzureBuilder, local::LocalFileSystem, memory::InMemory,
    path::Path as StoragePath,
};
use std::sync::Arc;
use thiserror::Error;

use crate::config::{StorageConfig, StorageProvider};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage backend misconfigured: {0}")]
    Misconfigured(String),

    #[error("Key '{key}' cannot be stored: {source}")]
    InvalidKey {
        key: String,
        #[source]
        source: object_store::path::Error,
    },

    #[error("Object store error: {0}")]
    ObjectStoreError(#[from] object_store::Error),
}

/// Storage result type
pub type Result<T> = std::result::Result<T, StorageError>;

/// Metadata returned after upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadMetadata {
    pub key: String,
    pub size: usize,
}

/// Keys are used as given: `#`, `[`, `%` and spaces reach the backend
/// unescaped. Empty segments, `.`/`..` and control characters are refused.
fn storage_path(key: &str) -> Result<StoragePath> {
    StoragePath::parse(key).map_err(|source| StorageError::InvalidKey {
        key: key.to_string(),
        source,
    })
}

/// Handle on one destination container.
///
/// Immutable once built, so a single instance is shared by every request.
#[derive(Clone)]
pub struct StorageClient {
    store: Arc<dyn ObjectStore>,
    pub container: String,
}

impl StorageClient {
    /// Wrap any object_store backend
    pub fn new(store: Arc<dyn ObjectStore>, container: String) -> Self {
        Self { store, container }
    }

    /// In-memory container for tests and local development
    pub fn in_memory() -> Self {
        Self {
            store: Arc::new(InMemory::new()),
            container: "inspection-local".to_string(),
        }
    }

    /// Build the backend described by the storage section of the config
    pub fn from_config(config: &StorageConfig) -> Result<Self> {
        match config.provider {
            StorageProvider::Memory => Ok(Self::new(
                Arc::new(InMemory::new()),
                config.container.clone(),
            )),
            StorageProvider::Local => {
                let root = config.root.as_ref().ok_or_else(|| {
                    StorageError::Misconfigured("local provider requires storage.root".into())
                })?;
                std::fs::create_dir_all(root).map_err(|e| {
                    StorageError::Misconfigured(format!(
                        "cannot create {}: {}",
                        root.display(),
                        e
                    ))
                })?;
                let store = LocalFileSystem::new_with_prefix(root)?;
                Ok(Self::new(Arc::new(store), config.container.clone()))
            }
            StorageProvider::Azure => {
                let account = config.account.as_deref().ok_or_else(|| {
                    StorageError::Misconfigured("azure provider requires an account".into())
                })?;
                let access_key = config.access_key.as_deref().ok_or_else(|| {
                    StorageError::Misconfigured("azure provider requires an access key".into())
                })?;

                let mut builder = MicrosoftAzureBuilder::new()
                    .with_account(account)
                    .with_access_key(access_key)
                    .with_container_name(&config.container);

                if config.endpoint_suffix != crate::config::DEFAULT_ENDPOINT_SUFFIX {
                    builder = builder.with_endpoint(format!(
                        "https://{}.blob.{}",
                        account, config.endpoint_suffix
                    ));
                }

                Ok(Self::new(Arc::new(builder.build()?), config.container.clone()))
            }
        }
    }

    /// Upload bytes, replacing whatever is stored at `key`
    pub async fn upload(&self, key: &str, data: impl Into<Bytes>) -> Result<UploadMetadata> {
        let path = storage_path(key)?;
        let data: Bytes = data.into();
        let size = data.len();

        let put_result = self.store.put(&path, data.into()).await?;

        tracing::info!(
            container = %self.container,
            key,
            size,
            etag = put_result.e_tag.as_deref().unwrap_or_default(),
            "Uploaded to storage"
        );

        Ok(UploadMetadata {
            key: key.to_string(),
            size,
        })
    }

    /// Upload a UTF-8 document
    pub async fn upload_text(&self, key: &str, text: &str) -> Result<UploadMetadata> {
        self.upload(key, Bytes::copy_from_slice(text.as_bytes())).await
    }

    /// Download from storage
    pub async fn download(&self, key: &str) -> Result<Vec<u8>> {
        let path = storage_path(key)?;

        let result = self.store.get(&path).await?;
        let bytes = result.bytes().await?;

        tracing::debug!(key, size = bytes.len(), "Downloaded from storage");

        Ok(bytes.to_vec())
    }

    /// Check if key exists
    pub async fn exists(&self, key: &str) -> Result<bool> {
        let path = storage_path(key)?;

        match self.store.head(&path).await {
            Ok(_) => Ok(true),
            Err(object_store::Error::NotFound { .. }) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
