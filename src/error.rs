use crate::query::QueryError;
use crate::store::StoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

pub type ApiResult<T> = Result<T, ApiError>;

/// Service error types, mapped to HTTP responses by `IntoResponse`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("string not found")]
    NotFound,

    #[error("internal server error: {0}")]
    Internal(String),
}

/// API error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Get HTTP status code for this error
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) | ApiError::Query(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::Duplicate(_)) => StatusCode::CONFLICT,
            ApiError::Store(StoreError::Backend(_)) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    /// Get error code string
    fn error_code(&self) -> &'static str {
        match self {
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::Query(QueryError::UnparseableQuery(_)) => "UNPARSEABLE_QUERY",
            ApiError::Query(QueryError::InvalidFilterValue { .. }) => "INVALID_FILTER_VALUE",
            ApiError::Store(StoreError::Duplicate(_)) => "DUPLICATE_VALUE",
            ApiError::Store(StoreError::Backend(_)) => "STORE_ERROR",
            ApiError::NotFound => "NOT_FOUND",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Structured payload attached to the error, if any. A duplicate
    /// submission reports the record it collided with.
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ApiError::Store(StoreError::Duplicate(existing)) => {
                serde_json::to_value(existing.as_ref()).ok()
            }
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse {
            error: ErrorDetail {
                code: self.error_code().to_string(),
                message: self.to_string(),
                details: self.details(),
            },
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze;
    use crate::store::StringRecord;

    #[test]
    fn status_codes_distinguish_error_kinds() {
        assert_eq!(
            ApiError::InvalidInput("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Query(QueryError::UnparseableQuery("x".into())).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);

        let existing = StringRecord::new("dup", analyze("dup"));
        assert_eq!(
            ApiError::Store(StoreError::Duplicate(Box::new(existing))).status_code(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn duplicate_errors_carry_the_existing_record() {
        let existing = StringRecord::new("dup", analyze("dup"));
        let err = ApiError::Store(StoreError::Duplicate(Box::new(existing)));
        let details = err.details().unwrap();
        assert_eq!(details["value"], "dup");
    }
}
