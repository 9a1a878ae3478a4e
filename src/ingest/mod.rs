//! Inspection asset extraction
//!
//! A request body carries one inspection: an envelope whose `Assets` string
//! holds the JSON-encoded asset list. Each asset is routed by its
//! `description` to an [`UploadStrategy`] and written under the collection
//! name taken from the one asset without a `blob` field.
//!
//! ## Key Components
//!
//! - [`AssetIngestor`] - parses a body and drives the uploads
//! - [`StrategyRegistry`] - description to strategy lookup
//! - [`BinaryUpload`], [`TextUpload`], [`EvidenceUpload`] - built-in strategies
//! - [`IngestReport`] - per-asset outcomes of one request

mod error;
mod ingestor;
pub mod keys;
mod models;
mod parser;
mod registry;
mod report;
mod strategy;

pub use error::{AssetError, IngestError, ParseStage, UploadFailure};
pub use ingestor::AssetIngestor;
pub use models::{AssetRecord, InspectionEnvelope};
pub use parser::{parse_assets, resolve_collection_name};
pub use registry::StrategyRegistry;
pub use report::{
    AssetFailure, AssetOutcome, IngestReport, IngestStatus, MESSAGE_COMPLETE, MESSAGE_FAILED,
    MESSAGE_PARTIAL,
};
pub use strategy::{
    AssetKind, BinaryUpload, EvidenceUpload, TextUpload, UploadContext, UploadStrategy,
    decode_blob_content, text_document,
};
