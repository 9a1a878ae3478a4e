//! API utility functions
//!
//! Pure helpers for request checks, kept out of services.rs so they can be
//! unit tested.

use axum::http::StatusCode;

use crate::api::error::ApiError;
use crate::ingest::IngestStatus;

/// Parses and validates Content-Type header for application/json
///
/// Accepts `application/json` with or without a charset parameter.
/// Rejects `application/jsonp`, `text/json` and malformed media types.
pub fn parse_content_type(content_type: &str) -> Result<mime::Mime, ApiError> {
    let media_type: mime::Mime = content_type.parse().map_err(|_| {
        ApiError::InvalidPayload(format!("invalid Content-Type: {}", content_type))
    })?;

    if media_type.type_() != mime::APPLICATION || media_type.subtype() != mime::JSON {
        return Err(ApiError::InvalidPayload(format!(
            "Content-Type must be application/json, got: {}/{}",
            media_type.type_(),
            media_type.subtype()
        )));
    }

    Ok(media_type)
}

/// Validates that body size does not exceed the maximum allowed size
pub fn validate_body_size(data: &[u8], max_size: usize) -> Result<(), ApiError> {
    if data.len() > max_size {
        return Err(ApiError::PayloadTooLarge(data.len()));
    }
    Ok(())
}

/// The body is archived as text, so it has to be UTF-8
pub fn body_as_text(data: Vec<u8>) -> Result<String, ApiError> {
    String::from_utf8(data)
        .map_err(|e| ApiError::InvalidPayload(format!("body is not valid UTF-8: {}", e)))
}

pub fn status_for(status: IngestStatus) -> StatusCode {
    match status {
        IngestStatus::Completed => StatusCode::OK,
        IngestStatus::Partial => StatusCode::MULTI_STATUS,
        IngestStatus::Failed => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_content_type_valid() {
        assert!(parse_content_type("application/json").is_ok());
        assert!(parse_content_type("application/json; charset=utf-8").is_ok());
    }

    #[test]
    fn test_parse_content_type_invalid() {
        assert!(parse_content_type("application/jsonp").is_err());
        assert!(parse_content_type("text/json").is_err());
        assert!(parse_content_type("text/plain").is_err());
        assert!(parse_content_type("").is_err());
    }

    #[test]
    fn test_validate_body_size_too_large() {
        let data = vec![0u8; 1000];
        assert!(validate_body_size(&data, 1000).is_ok());
        match validate_body_size(&data, 999) {
            Err(ApiError::PayloadTooLarge(size)) => assert_eq!(size, 1000),
            _ => panic!("Expected PayloadTooLarge error"),
        }
    }

    #[test]
    fn test_body_as_text_rejects_invalid_utf8() {
        assert_eq!(body_as_text(b"{}".to_vec()).unwrap(), "{}");
        assert!(matches!(
            body_as_text(vec![0xff, 0xfe]),
            Err(ApiError::InvalidPayload(_))
        ));
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(IngestStatus::Completed), StatusCode::OK);
        assert_eq!(status_for(IngestStatus::Partial), StatusCode::MULTI_STATUS);
        assert_eq!(
            status_for(IngestStatus::Failed),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
