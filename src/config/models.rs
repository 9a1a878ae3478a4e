use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Azure public-cloud blob endpoint suffix
pub const DEFAULT_ENDPOINT_SUFFIX: &str = "core.windows.net";

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
    /// Largest accepted request body; inspections inline their photos as base64
    #[serde(default = "default_max_payload_bytes")]
    pub max_payload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            max_payload_bytes: default_max_payload_bytes(),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

fn default_max_payload_bytes() -> usize {
    50 * 1024 * 1024
}

/// Storage provider type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageProvider {
    #[default]
    Azure,
    Local,
    Memory,
}

/// Destination container configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub provider: StorageProvider,
    /// Storage account name (Azure)
    pub account: Option<String>,
    /// Account key (loaded from environment, not from config file)
    #[serde(skip)]
    pub access_key: Option<String>,
    #[serde(default = "default_container")]
    pub container: String,
    #[serde(default = "default_endpoint_suffix")]
    pub endpoint_suffix: String,
    /// Root directory for the local provider
    pub root: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            provider: StorageProvider::default(),
            account: None,
            access_key: None,
            container: default_container(),
            endpoint_suffix: default_endpoint_suffix(),
            root: None,
        }
    }
}

impl StorageConfig {
    /// Azure connection string for this account with the key redacted, for logs
    pub fn connection_descriptor(&self) -> String {
        format!(
            "DefaultEndpointsProtocol=https;AccountName={};AccountKey={};EndpointSuffix={}",
            self.account.as_deref().unwrap_or_default(),
            if self.access_key.is_some() { "***" } else { "" },
            self.endpoint_suffix
        )
    }
}

fn default_container() -> String {
    "inspections".to_string()
}

fn default_endpoint_suffix() -> String {
    DEFAULT_ENDPOINT_SUFFIX.to_string()
}
