use serde::Serialize;

use super::strategy::AssetKind;

pub const MESSAGE_COMPLETE: &str = "Asset extraction complete";
pub const MESSAGE_PARTIAL: &str = "Asset extraction partially complete";
pub const MESSAGE_FAILED: &str = "Asset extraction failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IngestStatus {
    Completed,
    Partial,
    Failed,
}

impl IngestStatus {
    pub fn message(&self) -> &'static str {
        match self {
            IngestStatus::Completed => MESSAGE_COMPLETE,
            IngestStatus::Partial => MESSAGE_PARTIAL,
            IngestStatus::Failed => MESSAGE_FAILED,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AssetFailure {
    pub code: &'static str,
    pub message: String,
}

/// What happened to one asset
#[derive(Debug, Clone, Serialize)]
pub struct AssetOutcome {
    pub identifier: String,
    pub description: String,
    pub kind: AssetKind,
    /// Keys written before success or failure
    pub keys: Vec<String>,
    /// Total size of the blobs in `keys`
    pub bytes: usize,
    pub error: Option<AssetFailure>,
}

impl AssetOutcome {
    pub fn is_stored(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IngestReport {
    pub collection: String,
    pub assets: Vec<AssetOutcome>,
}

impl IngestReport {
    pub fn stored(&self) -> usize {
        self.assets.iter().filter(|a| a.is_stored()).count()
    }

    pub fn failed(&self) -> usize {
        self.assets.len() - self.stored()
    }

    /// Failed only when every asset failed; an empty list cannot happen
    /// because the collection marker is itself an asset
    pub fn status(&self) -> IngestStatus {
        match (self.stored(), self.failed()) {
            (_, 0) => IngestStatus::Completed,
            (0, _) => IngestStatus::Failed,
            _ => IngestStatus::Partial,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(identifier: &str, failed: bool) -> AssetOutcome {
        AssetOutcome {
            identifier: identifier.to_string(),
            description: "photo input".to_string(),
            kind: AssetKind::Binary,
            keys: Vec::new(),
            bytes: 0,
            error: failed.then(|| AssetFailure {
                code: "BASE64_DECODE",
                message: "bad".to_string(),
            }),
        }
    }

    fn report(outcomes: Vec<AssetOutcome>) -> IngestReport {
        IngestReport {
            collection: "batch1".to_string(),
            assets: outcomes,
        }
    }

    #[test]
    fn status_reflects_failures() {
        assert_eq!(
            report(vec![outcome("a", false), outcome("b", false)]).status(),
            IngestStatus::Completed
        );
        assert_eq!(
            report(vec![outcome("a", false), outcome("b", true)]).status(),
            IngestStatus::Partial
        );
        assert_eq!(
            report(vec![outcome("a", true), outcome("b", true)]).status(),
            IngestStatus::Failed
        );
    }

    #[test]
    fn completed_message_is_fixed() {
        assert_eq!(IngestStatus::Completed.message(), "Asset extraction complete");
    }
}
