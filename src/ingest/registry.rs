use std::collections::BTreeMap;
use std::sync::Arc;

use super::strategy::{BinaryUpload, EvidenceUpload, TextUpload, UploadStrategy};

/// Maps asset descriptions to upload strategies.
///
/// Lookup is an exact, case-sensitive match; anything unregistered goes to
/// the fallback strategy.
#[derive(Clone)]
pub struct StrategyRegistry {
    strategies: BTreeMap<String, Arc<dyn UploadStrategy>>,
    fallback: Arc<dyn UploadStrategy>,
}

impl StrategyRegistry {
    pub fn new(fallback: Arc<dyn UploadStrategy>) -> Self {
        Self {
            strategies: BTreeMap::new(),
            fallback,
        }
    }

    pub fn register(&mut self, description: impl Into<String>, strategy: Arc<dyn UploadStrategy>) {
        self.strategies.insert(description.into(), strategy);
    }

    pub fn resolve(&self, description: &str) -> Arc<dyn UploadStrategy> {
        self.strategies
            .get(description)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone())
    }

    /// Registry with the inspection app's six asset types
    pub fn with_defaults() -> Self {
        let mut registry = Self::new(Arc::new(EvidenceUpload));

        let binaries = [
            ("audio input", "audio", "data:audio/aac;base64,", "m4a"),
            ("pen input", "pen", "data:image/png;base64,", "png"),
            ("photo input", "photo", "data:image/jpeg;base64,", "jpg"),
            (
                "measurement photo input",
                "measurement photo",
                "data:image/jpeg;base64,",
                "jpg",
            ),
        ];
        for (description, type_tag, content_prefix, extension) in binaries {
            registry.register(
                description,
                Arc::new(BinaryUpload {
                    type_tag,
                    content_prefix,
                    extension,
                }),
            );
        }

        registry.register("measurement input", Arc::new(TextUpload { type_tag: "measurement" }));
        registry.register("text input", Arc::new(TextUpload { type_tag: "text" }));

        registry
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::strategy::AssetKind;

    #[test]
    fn defaults_route_known_descriptions() {
        let registry = StrategyRegistry::with_defaults();

        for description in [
            "audio input",
            "pen input",
            "photo input",
            "measurement photo input",
        ] {
            assert_eq!(registry.resolve(description).kind(), AssetKind::Binary);
        }
        assert_eq!(registry.resolve("measurement input").kind(), AssetKind::Text);
        assert_eq!(registry.resolve("text input").kind(), AssetKind::Text);
    }

    #[test]
    fn unknown_descriptions_fall_back_to_evidence() {
        let registry = StrategyRegistry::with_defaults();

        assert_eq!(registry.resolve("").kind(), AssetKind::Evidence);
        assert_eq!(registry.resolve("signature input").kind(), AssetKind::Evidence);
        assert_eq!(registry.resolve("Photo Input").kind(), AssetKind::Evidence);
    }
}
