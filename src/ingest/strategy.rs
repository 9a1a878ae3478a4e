use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use bytes::Bytes;
use serde::Serialize;
use serde_json::{Map, Value};

use super::error::{AssetError, UploadFailure};
use super::keys;
use super::models::AssetRecord;
use crate::storage::{StorageClient, UploadMetadata};

/// Storage treatment an asset received
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    Binary,
    Text,
    Evidence,
}

/// Request-scoped values every strategy needs
pub struct UploadContext<'a> {
    pub storage: &'a StorageClient,
    pub collection: &'a str,
    /// Request body exactly as received
    pub raw_body: &'a str,
}

/// One way of persisting an asset.
///
/// Returns the blobs written, in write order. A strategy stops at its first
/// failed write; earlier writes are not rolled back and are reported in the
/// [`UploadFailure`].
#[async_trait]
pub trait UploadStrategy: Send + Sync {
    fn kind(&self) -> AssetKind;

    async fn upload(
        &self,
        ctx: &UploadContext<'_>,
        asset: &AssetRecord,
    ) -> Result<Vec<UploadMetadata>, UploadFailure>;
}

/// Base64 media carried in `blobContent` behind a data-URI prefix
#[derive(Debug, Clone)]
pub struct BinaryUpload {
    pub type_tag: &'static str,
    pub content_prefix: &'static str,
    pub extension: &'static str,
}

#[async_trait]
impl UploadStrategy for BinaryUpload {
    fn kind(&self) -> AssetKind {
        AssetKind::Binary
    }

    async fn upload(
        &self,
        ctx: &UploadContext<'_>,
        asset: &AssetRecord,
    ) -> Result<Vec<UploadMetadata>, UploadFailure> {
        let content = asset
            .blob_content
            .as_deref()
            .ok_or_else(|| AssetError::MissingContent(asset.identifier().to_string()))?;

        let bytes = decode_blob_content(content, self.content_prefix).map_err(|source| {
            AssetError::Base64Decode {
                identifier: asset.identifier().to_string(),
                source,
            }
        })?;

        let key = keys::binary_key(ctx.collection, asset.identifier(), self.type_tag, self.extension);
        write_with_sidecar(ctx, asset, self.type_tag, key, Bytes::from(bytes)).await
    }
}

/// Literal text carried in `blob`
#[derive(Debug, Clone)]
pub struct TextUpload {
    pub type_tag: &'static str,
}

#[async_trait]
impl UploadStrategy for TextUpload {
    fn kind(&self) -> AssetKind {
        AssetKind::Text
    }

    async fn upload(
        &self,
        ctx: &UploadContext<'_>,
        asset: &AssetRecord,
    ) -> Result<Vec<UploadMetadata>, UploadFailure> {
        let key = keys::text_key(ctx.collection, asset.identifier(), self.type_tag);
        let document = text_document(self.type_tag, asset.blob.as_deref());
        write_with_sidecar(ctx, asset, self.type_tag, key, Bytes::from(document)).await
    }
}

/// Archives the whole request body under the asset's identifier
#[derive(Debug, Clone, Default)]
pub struct EvidenceUpload;

#[async_trait]
impl UploadStrategy for EvidenceUpload {
    fn kind(&self) -> AssetKind {
        AssetKind::Evidence
    }

    async fn upload(
        &self,
        ctx: &UploadContext<'_>,
        asset: &AssetRecord,
    ) -> Result<Vec<UploadMetadata>, UploadFailure> {
        let key = keys::evidence_key(ctx.collection, asset.identifier());
        let written = ctx.storage.upload_text(&key, ctx.raw_body).await?;
        Ok(vec![written])
    }
}

/// Strips every occurrence of `prefix` and every `"`, then base64-decodes.
///
/// ASCII whitespace is dropped as well, so line-wrapped payloads decode.
pub fn decode_blob_content(content: &str, prefix: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let stripped: String = content
        .replace(prefix, "")
        .chars()
        .filter(|c| *c != '"' && !c.is_ascii_whitespace())
        .collect();

    BASE64_STANDARD.decode(stripped)
}

/// `{"<tag>input": <blob>}`; the tag and the word `input` are not separated
pub fn text_document(type_tag: &str, text: Option<&str>) -> String {
    let mut document = Map::new();
    document.insert(
        format!("{type_tag}input"),
        text.map_or(Value::Null, |t| Value::String(t.to_string())),
    );
    Value::Object(document).to_string()
}

/// Writes the asset's payload at `key`, then its metadata sidecar
async fn write_with_sidecar(
    ctx: &UploadContext<'_>,
    asset: &AssetRecord,
    type_tag: &str,
    key: String,
    payload: Bytes,
) -> Result<Vec<UploadMetadata>, UploadFailure> {
    let mut written = Vec::with_capacity(2);
    match write_both(ctx, asset, type_tag, &key, payload, &mut written).await {
        Ok(()) => Ok(written),
        Err(error) => Err(UploadFailure { written, error }),
    }
}

async fn write_both(
    ctx: &UploadContext<'_>,
    asset: &AssetRecord,
    type_tag: &str,
    key: &str,
    payload: Bytes,
    written: &mut Vec<UploadMetadata>,
) -> Result<(), AssetError> {
    written.push(ctx.storage.upload(key, payload).await?);

    let metadata_key = keys::metadata_key(ctx.collection, asset.identifier(), type_tag);
    let metadata = serde_json::to_string(asset).map_err(|source| AssetError::Metadata {
        identifier: asset.identifier().to_string(),
        source,
    })?;
    written.push(ctx.storage.upload_text(&metadata_key, &metadata).await?);

    Ok(())
}
