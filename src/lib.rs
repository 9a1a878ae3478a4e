pub mod api;
pub mod config;
pub mod ingest;
pub mod observability;
pub mod storage;
