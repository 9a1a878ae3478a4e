use super::error::{IngestError, ParseStage};
use super::models::{AssetRecord, InspectionEnvelope};

/// Decodes a request body into its asset list.
///
/// Two stages: the envelope first, then the JSON string held in its
/// `Assets` field.
pub fn parse_assets(body: &str) -> Result<Vec<AssetRecord>, IngestError> {
    let envelope: InspectionEnvelope =
        serde_json::from_str(body).map_err(|source| IngestError::Parse {
            stage: ParseStage::Envelope,
            source,
        })?;

    serde_json::from_str(&envelope.assets).map_err(|source| IngestError::Parse {
        stage: ParseStage::AssetList,
        source,
    })
}

/// Returns the identifier of the first blob-less record, in parse order.
///
/// A marker whose identifier is null or empty names no collection.
pub fn resolve_collection_name(assets: &[AssetRecord]) -> Result<&str, IngestError> {
    assets
        .iter()
        .find(|asset| asset.is_collection_marker())
        .map(AssetRecord::identifier)
        .filter(|name| !name.is_empty())
        .ok_or(IngestError::NoCollectionIdentifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(assets: serde_json::Value) -> String {
        json!({ "Assets": assets.to_string() }).to_string()
    }

    #[test]
    fn parse_assets_decodes_nested_list() {
        let body = envelope(json!([
            {"identifier": "batch1"},
            {"identifier": "A1", "description": "text input", "blob": "hello"}
        ]));

        let assets = parse_assets(&body).unwrap();
        assert_eq!(assets.len(), 2);
        assert_eq!(assets[1].blob.as_deref(), Some("hello"));
    }

    #[test]
    fn parse_assets_rejects_bad_envelope() {
        let err = parse_assets("{not json").unwrap_err();
        assert!(matches!(
            err,
            IngestError::Parse { stage: ParseStage::Envelope, .. }
        ));
    }

    #[test]
    fn parse_assets_rejects_nested_object_instead_of_string() {
        let body = json!({ "Assets": [{"identifier": "A1"}] }).to_string();
        let err = parse_assets(&body).unwrap_err();
        assert!(matches!(
            err,
            IngestError::Parse { stage: ParseStage::Envelope, .. }
        ));
    }

    #[test]
    fn parse_assets_rejects_bad_asset_list() {
        let body = json!({ "Assets": "[{\"identifier\": " }).to_string();
        let err = parse_assets(&body).unwrap_err();
        assert!(matches!(
            err,
            IngestError::Parse { stage: ParseStage::AssetList, .. }
        ));
    }

    #[test]
    fn collection_name_is_first_blob_less_identifier() {
        let body = envelope(json!([
            {"identifier": "A1", "description": "text input", "blob": "x"},
            {"identifier": "batch1"},
            {"identifier": "batch2"}
        ]));
        let assets = parse_assets(&body).unwrap();

        assert_eq!(resolve_collection_name(&assets).unwrap(), "batch1");
    }

    #[test]
    fn marker_with_null_fields_names_the_collection() {
        let body = json!({
            "Assets": r#"[{"identifier":"batch1","blob":null,"description":null,"blobContent":null},{"identifier":"A1","description":"text input","blob":"hello"}]"#
        })
        .to_string();
        let assets = parse_assets(&body).unwrap();

        assert_eq!(resolve_collection_name(&assets).unwrap(), "batch1");
        assert_eq!(assets[0].description, None);
    }

    #[test]
    fn empty_marker_identifier_is_reported() {
        let body = envelope(json!([
            {"identifier": "", "blob": null},
            {"identifier": "batch1"}
        ]));
        let assets = parse_assets(&body).unwrap();

        let err = resolve_collection_name(&assets).unwrap_err();
        assert!(matches!(err, IngestError::NoCollectionIdentifier));
    }

    #[test]
    fn missing_collection_marker_is_reported() {
        let body = envelope(json!([
            {"identifier": "X", "blob": "batch1"},
            {"identifier": "A1", "description": "text input", "blob": "hello"}
        ]));
        let assets = parse_assets(&body).unwrap();

        let err = resolve_collection_name(&assets).unwrap_err();
        assert!(matches!(err, IngestError::NoCollectionIdentifier));
    }
}
