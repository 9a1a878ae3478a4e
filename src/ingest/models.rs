//! Inspection payload models.
//!
//! The request body is double-encoded: the outer [`InspectionEnvelope`]
//! carries the asset list as an escaped JSON *string* in its `Assets` field,
//! which has to be decoded a second time into a list of [`AssetRecord`]s.
//!
//! ```json
//! {
//!   "Assets": "[{\"identifier\":\"batch1\"},{\"identifier\":\"A1\",\"description\":\"text input\",\"blob\":\"hello\"}]"
//! }
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InspectionEnvelope {
    #[serde(rename = "Assets")]
    pub assets: String,
}

/// One entry of an inspection's asset list.
///
/// Only `identifier`, `description`, `blob` and `blob_content` drive routing.
/// Everything else is carried through untouched into the metadata sidecar.
/// Every field accepts an explicit `null`, which is written back as `null`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    #[serde(default)]
    pub altitude: Option<f64>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Absent on the record naming the collection; literal text for text assets.
    #[serde(default)]
    pub blob: Option<String>,
    /// Data-URI prefixed base64 payload for binary assets.
    #[serde(default)]
    pub blob_content: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub created_by_name: Option<String>,
    /// Kept as the raw string the client sent.
    #[serde(default)]
    pub created_on: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub identifier: Option<String>,
}

impl AssetRecord {
    /// Record whose `blob` is absent; its identifier names the collection.
    pub fn is_collection_marker(&self) -> bool {
        self.blob.is_none()
    }

    /// Identifier as used in blob keys; `null` reads as empty
    pub fn identifier(&self) -> &str {
        self.identifier.as_deref().unwrap_or_default()
    }

    /// Description used for routing; `null` reads as empty and so never matches a known type
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}
