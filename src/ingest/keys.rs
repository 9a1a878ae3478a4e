//! Blob key layout inside the destination container.
//!
//! For a collection `C` and asset `A`:
//! - binary: `C/A_{type}_input.{ext}`
//! - text: `C/A_{type}_input.json`
//! - sidecar: `C/A_{type}_input_metadata.json`
//! - evidence: `C/A_evidence_collection.json`

pub fn binary_key(collection: &str, identifier: &str, type_tag: &str, extension: &str) -> String {
    format!("{collection}/{identifier}_{type_tag}_input.{extension}")
}

pub fn text_key(collection: &str, identifier: &str, type_tag: &str) -> String {
    format!("{collection}/{identifier}_{type_tag}_input.json")
}

pub fn metadata_key(collection: &str, identifier: &str, type_tag: &str) -> String {
    format!("{collection}/{identifier}_{type_tag}_input_metadata.json")
}

pub fn evidence_key(collection: &str, identifier: &str) -> String {
    format!("{collection}/{identifier}_evidence_collection.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_follow_layout() {
        assert_eq!(binary_key("batch1", "A1", "audio", "m4a"), "batch1/A1_audio_input.m4a");
        assert_eq!(text_key("batch1", "A2", "measurement"), "batch1/A2_measurement_input.json");
        assert_eq!(
            metadata_key("batch1", "A3", "measurement photo"),
            "batch1/A3_measurement photo_input_metadata.json"
        );
        assert_eq!(evidence_key("batch1", "batch1"), "batch1/batch1_evidence_collection.json");
    }
}
