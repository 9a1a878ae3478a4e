//! Logging setup and in-process counters

use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::EnvFilter;

/// Install the `fmt` subscriber, filtered by `RUST_LOG` (default `info`)
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Counters for requests and asset uploads
#[derive(Debug, Default)]
pub struct Metrics {
    requests_accepted: AtomicU64,
    requests_rejected: AtomicU64,
    assets_stored: AtomicU64,
    assets_failed: AtomicU64,
    blobs_written: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_accepted(&self) {
        self.requests_accepted.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "requests_accepted", "Metric incremented");
    }

    pub fn request_rejected(&self) {
        self.requests_rejected.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "requests_rejected", "Metric incremented");
    }

    /// One asset stored using `blobs` writes
    pub fn asset_stored(&self, blobs: usize) {
        self.assets_stored.fetch_add(1, Ordering::Relaxed);
        self.blobs_written.fetch_add(blobs as u64, Ordering::Relaxed);
        tracing::debug!(counter = "assets_stored", blobs, "Metric incremented");
    }

    /// One asset failed after `blobs` writes had already landed
    pub fn asset_failed(&self, blobs: usize) {
        self.assets_failed.fetch_add(1, Ordering::Relaxed);
        self.blobs_written.fetch_add(blobs as u64, Ordering::Relaxed);
        tracing::debug!(counter = "assets_failed", blobs, "Metric incremented");
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests_accepted: self.requests_accepted.load(Ordering::Relaxed),
            requests_rejected: self.requests_rejected.load(Ordering::Relaxed),
            assets_stored: self.assets_stored.load(Ordering::Relaxed),
            assets_failed: self.assets_failed.load(Ordering::Relaxed),
            blobs_written: self.blobs_written.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub requests_accepted: u64,
    pub requests_rejected: u64,
    pub assets_stored: u64,
    pub assets_failed: u64,
    pub blobs_written: u64,
}
