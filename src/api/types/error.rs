//! API error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, ValidationError};

/// Error categories exposed to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorType {
    InvalidRequestError,
    NotFoundError,
    ServerError,
}

impl std::fmt::Display for ApiErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequestError => write!(f, "invalid_request_error"),
            Self::NotFoundError => write!(f, "not_found_error"),
            Self::ServerError => write!(f, "server_error"),
        }
    }
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

/// Error detail structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: ApiErrorType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Per-field errors, present on validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldErrorBody>>,
}

/// One validation failure, naming the offending field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldErrorBody {
    pub field: String,
    pub message: String,
}

impl From<&ValidationError> for FieldErrorBody {
    fn from(error: &ValidationError) -> Self {
        Self {
            field: error.field().to_string(),
            message: error.to_string(),
        }
    }
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, error_type: ApiErrorType, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                error: ApiErrorDetail {
                    message: message.into(),
                    error_type,
                    code: None,
                    errors: None,
                },
            },
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.response.error.code = Some(code.into());
        self
    }

    /// Bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            ApiErrorType::InvalidRequestError,
            message,
        )
    }

    /// Not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, ApiErrorType::NotFoundError, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiErrorType::ServerError,
            message,
        )
    }

    /// Validation failure carrying the full accumulated field error list
    pub fn validation(errors: &[ValidationError]) -> Self {
        let mut api_error = Self::bad_request("Invalid input data");
        api_error.response.error.errors =
            Some(errors.iter().map(FieldErrorBody::from).collect());
        api_error
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

/// All invocation failures collapse to one generic server error; the detail
/// (exit code, stderr, parse message) is logged at the call site only.
impl From<DomainError> for ApiError {
    fn from(_err: DomainError) -> Self {
        Self::internal("An error occurred during prediction")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.response.error.error_type, self.response.error.message
        )
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_creation() {
        let err = ApiError::bad_request("Invalid input data");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            err.response.error.error_type,
            ApiErrorType::InvalidRequestError
        );
        assert_eq!(err.response.error.message, "Invalid input data");
    }

    #[test]
    fn test_validation_error_carries_field_list() {
        let errors = vec![
            ValidationError::OutOfRange {
                field: "age",
                value: 15,
                min: 18,
                max: 100,
            },
            ValidationError::MissingField { field: "gender" },
        ];

        let err = ApiError::validation(&errors);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let fields = err.response.error.errors.unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].field, "age");
        assert_eq!(fields[1].field, "gender");
    }

    #[test]
    fn test_domain_errors_collapse_to_generic_500() {
        for err in [
            DomainError::worker_failed(1, "traceback"),
            DomainError::malformed_response("missing field"),
            DomainError::worker_timeout(30),
            DomainError::spawn("no such file"),
        ] {
            let api_err: ApiError = err.into();
            assert_eq!(api_err.status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(
                api_err.response.error.message,
                "An error occurred during prediction"
            );
        }
    }

    #[test]
    fn test_internal_detail_is_not_serialized() {
        let api_err: ApiError = DomainError::worker_failed(1, "secret traceback").into();
        let json = serde_json::to_string(&api_err.response).unwrap();

        assert!(!json.contains("secret traceback"));
        assert!(!json.contains("errors"));
    }

    #[test]
    fn test_error_serialization() {
        let err = ApiError::validation(&[ValidationError::EmptyName]);
        let json = serde_json::to_string(&err.response).unwrap();

        assert!(json.contains("invalid_request_error"));
        assert!(json.contains("\"field\":\"name\""));
    }
}
