use std::sync::Arc;

use crate::config::Config;
use crate::ingest::AssetIngestor;
use crate::observability::Metrics;
use crate::storage::StorageClient;

/// Shared, read-only handles; nothing here changes while a request runs
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub ingestor: Arc<AssetIngestor>,
    pub storage: Arc<StorageClient>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(config: Config, ingestor: AssetIngestor, storage: StorageClient) -> Self {
        Self {
            config: Arc::new(config),
            ingestor: Arc::new(ingestor),
            storage: Arc::new(storage),
            metrics: Arc::new(Metrics::new()),
        }
    }
}
