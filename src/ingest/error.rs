use std::fmt;
use thiserror::Error;

use crate::storage::{StorageError, UploadMetadata};

/// Which of the two decode passes failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStage {
    Envelope,
    AssetList,
}

impl fmt::Display for ParseStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseStage::Envelope => f.write_str("inspection envelope"),
            ParseStage::AssetList => f.write_str("asset list"),
        }
    }
}

/// Failures that reject the whole request before any upload happens
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("malformed {stage}: {source}")]
    Parse {
        stage: ParseStage,
        #[source]
        source: serde_json::Error,
    },
    #[error("no asset without a blob field to name the collection")]
    NoCollectionIdentifier,
}

/// Failures scoped to a single asset; the remaining assets are still processed
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset '{0}' has no blobContent")]
    MissingContent(String),
    #[error("asset '{identifier}' has invalid base64 content: {source}")]
    Base64Decode {
        identifier: String,
        #[source]
        source: base64::DecodeError,
    },
    #[error("failed to serialize metadata for asset '{identifier}': {source}")]
    Metadata {
        identifier: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("storage write failed: {0}")]
    Storage(#[from] StorageError),
}

impl AssetError {
    pub fn code(&self) -> &'static str {
        match self {
            AssetError::MissingContent(_) => "MISSING_CONTENT",
            AssetError::Base64Decode { .. } => "BASE64_DECODE",
            AssetError::Metadata { .. } => "METADATA_ENCODE",
            AssetError::Storage(StorageError::InvalidKey { .. }) => "INVALID_KEY",
            AssetError::Storage(_) => "STORAGE_ERROR",
        }
    }
}

/// An asset that failed after some of its blobs were already written.
///
/// Nothing is rolled back, so `written` is what the asset left behind.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct UploadFailure {
    pub written: Vec<UploadMetadata>,
    pub error: AssetError,
}

impl From<AssetError> for UploadFailure {
    fn from(error: AssetError) -> Self {
        Self {
            written: Vec::new(),
            error,
        }
    }
}

impl From<StorageError> for UploadFailure {
    fn from(error: StorageError) -> Self {
        AssetError::from(error).into()
    }
}
