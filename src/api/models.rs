//! API models for the asset extraction endpoint.
//!
//! `POST /api/assets` accepts an inspection envelope and answers with an
//! [`IngestResponse`]:
//!
//! ```json
//! {
//!   "request_id": "01890a5d-ac96-774b-bcce-b302099a8057",
//!   "status": "completed",
//!   "message": "Asset extraction complete",
//!   "collection": "batch1",
//!   "asset_total": 2,
//!   "asset_stored": 2,
//!   "asset_failed": 0,
//!   "assets": [
//!     {
//!       "identifier": "A1",
//!       "description": "text input",
//!       "kind": "text",
//!       "keys": ["batch1/A1_text_input.json", "batch1/A1_text_input_metadata.json"],
//!       "bytes": 300,
//!       "error": null
//!     }
//!   ],
//!   "completed_at": 1700000000
//! }
//! ```

use serde::Serialize;
use std::collections::HashMap;

use crate::ingest::{AssetOutcome, IngestReport, IngestStatus};

#[derive(Debug, Serialize)]
pub struct IngestResponse {
    pub request_id: String,
    pub status: IngestStatus,
    pub message: &'static str,
    pub collection: String,
    pub asset_total: usize,
    pub asset_stored: usize,
    pub asset_failed: usize,
    pub assets: Vec<AssetOutcome>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub completed_at: chrono::DateTime<chrono::Utc>,
}

impl IngestResponse {
    pub fn from_report(request_id: String, report: IngestReport) -> Self {
        let status = report.status();
        Self {
            request_id,
            status,
            message: status.message(),
            asset_total: report.assets.len(),
            asset_stored: report.stored(),
            asset_failed: report.failed(),
            collection: report.collection,
            assets: report.assets,
            completed_at: chrono::Utc::now(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub components: HashMap<String, String>,
    pub version: String,
}
