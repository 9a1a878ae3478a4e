use tracing::{Span, debug, info, warn};

use super::error::{IngestError, UploadFailure};
use super::parser::{parse_assets, resolve_collection_name};
use super::registry::StrategyRegistry;
use super::report::{AssetFailure, AssetOutcome, IngestReport};
use super::strategy::UploadContext;
use crate::storage::StorageClient;

/// Extracts the assets of one inspection into blob storage.
///
/// Holds no per-request state; everything derived from a body lives on the
/// stack of [`AssetIngestor::ingest`].
#[derive(Clone)]
pub struct AssetIngestor {
    registry: StrategyRegistry,
}

impl AssetIngestor {
    pub fn new(registry: StrategyRegistry) -> Self {
        Self { registry }
    }

    /// Parse `body`, then upload every asset in order.
    ///
    /// Records the resolved collection on the current span's `collection`
    /// field when the caller declared one.
    ///
    /// Request-level problems (malformed JSON, no collection marker) return
    /// an error before anything is written. Per-asset failures are recorded
    /// in the report and do not stop the remaining assets.
    pub async fn ingest(
        &self,
        storage: &StorageClient,
        body: &str,
    ) -> Result<IngestReport, IngestError> {
        debug!(size = body.len(), "Parsing inspection payload");

        let assets = parse_assets(body)?;
        let collection = resolve_collection_name(&assets)?;
        Span::current().record("collection", collection);

        let ctx = UploadContext {
            storage,
            collection,
            raw_body: body,
        };

        let mut outcomes = Vec::with_capacity(assets.len());
        for asset in &assets {
            let strategy = self.registry.resolve(asset.description());

            let (written, error) = match strategy.upload(&ctx, asset).await {
                Ok(written) => {
                    info!(
                        identifier = asset.identifier(),
                        description = asset.description(),
                        blobs = written.len(),
                        "Asset stored"
                    );
                    (written, None)
                }
                Err(UploadFailure { written, error }) => {
                    warn!(
                        identifier = asset.identifier(),
                        description = asset.description(),
                        blobs = written.len(),
                        error = %error,
                        "Asset upload failed"
                    );
                    let failure = AssetFailure {
                        code: error.code(),
                        message: error.to_string(),
                    };
                    (written, Some(failure))
                }
            };

            outcomes.push(AssetOutcome {
                identifier: asset.identifier().to_string(),
                description: asset.description().to_string(),
                kind: strategy.kind(),
                bytes: written.iter().map(|blob| blob.size).sum(),
                keys: written.into_iter().map(|blob| blob.key).collect(),
                error,
            });
        }

        let report = IngestReport {
            collection: collection.to_string(),
            assets: outcomes,
        };
        info!(
            collection,
            stored = report.stored(),
            failed = report.failed(),
            "{}",
            report.status().message()
        );

        Ok(report)
    }
}

impl Default for AssetIngestor {
    fn default() -> Self {
        Self::new(StrategyRegistry::with_defaults())
    }
}
