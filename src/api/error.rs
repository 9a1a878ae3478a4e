use axum::{Json, http::StatusCode, response::IntoResponse};
use thiserror::Error;

use super::models::ErrorResponse;
use crate::ingest::IngestError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("payload invalid: {0}")]
    InvalidPayload(String),
    #[error("payload too large: {0} bytes")]
    PayloadTooLarge(usize),
    #[error("{0}")]
    NoCollectionIdentifier(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::NoCollectionIdentifier(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidPayload(_) => "INVALID_PAYLOAD",
            ApiError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            ApiError::NoCollectionIdentifier(_) => "NO_COLLECTION_IDENTIFIER",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let body = ErrorResponse {
            code: self.code(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<IngestError> for ApiError {
    fn from(value: IngestError) -> Self {
        match value {
            IngestError::Parse { .. } => ApiError::InvalidPayload(value.to_string()),
            IngestError::NoCollectionIdentifier => {
                ApiError::NoCollectionIdentifier(value.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::parse_assets;

    #[test]
    fn parse_errors_are_bad_requests() {
        let err: ApiError = parse_assets("[").unwrap_err().into();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "INVALID_PAYLOAD");
        assert!(err.to_string().contains("inspection envelope"));
    }

    #[test]
    fn missing_marker_is_unprocessable() {
        let err: ApiError = IngestError::NoCollectionIdentifier.into();

        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.code(), "NO_COLLECTION_IDENTIFIER");
    }
}
