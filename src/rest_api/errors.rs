//! # REST API Errors
//!
//! Error types for the REST API module and their HTTP rendering.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::schema::{FieldViolation, ValidationErrors};

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

/// REST API errors
#[derive(Debug, Clone, Error)]
pub enum RestError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Payload failed schema validation
    #[error("{0}")]
    Validation(ValidationErrors),

    /// Body is not parseable JSON
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Path identifier is not numeric
    #[error("{0}")]
    InvalidId(String),

    /// Resource not found
    #[error("{0}")]
    NotFound(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Unexpected persistence or runtime failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RestError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            RestError::Validation(_) => StatusCode::BAD_REQUEST,
            RestError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            RestError::InvalidId(_) => StatusCode::BAD_REQUEST,

            // 404 Not Found
            RestError::NotFound(_) => StatusCode::NOT_FOUND,

            // 500 Internal Server Error
            RestError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to callers. Internal details are never exposed.
    fn public_message(&self) -> String {
        match self {
            RestError::Validation(_) => "Validation failed".to_string(),
            RestError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<ValidationErrors> for RestError {
    fn from(errors: ValidationErrors) -> Self {
        RestError::Validation(errors)
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldViolation>,
}

impl From<RestError> for ErrorResponse {
    fn from(err: RestError) -> Self {
        let code = err.status_code().as_u16();
        let message = err.public_message();
        let errors = match err {
            RestError::Validation(errors) => errors.violations().to_vec(),
            _ => Vec::new(),
        };
        Self {
            message,
            code,
            errors,
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let RestError::Internal(detail) = &self {
            tracing::error!(error = %detail, "request failed");
        }
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let validation = ValidationErrors::single(FieldViolation::missing_field("name"));
        assert_eq!(
            RestError::Validation(validation).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RestError::InvalidId("Invalid client id".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RestError::NotFound("Client not found".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            RestError::Internal("test".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_body_lists_violations() {
        let err = RestError::Validation(ValidationErrors::new(vec![
            FieldViolation::too_short("name", 2),
            FieldViolation::invalid_email("email"),
        ]));
        let json = serde_json::to_value(ErrorResponse::from(err)).unwrap();
        assert_eq!(json["code"], 400);
        assert_eq!(json["message"], "Validation failed");
        assert_eq!(json["errors"][1]["field"], "email");
    }

    #[test]
    fn test_internal_detail_hidden() {
        let err = RestError::Internal("disk I/O error at /var/db".to_string());
        let json = serde_json::to_value(ErrorResponse::from(err)).unwrap();
        assert_eq!(json["message"], "Internal server error");
        assert!(json.get("errors").is_none());
    }

    #[test]
    fn test_not_found_message_kept() {
        let err = RestError::NotFound("Client not found".to_string());
        let json = serde_json::to_value(ErrorResponse::from(err)).unwrap();
        assert_eq!(json["message"], "Client not found");
        assert_eq!(json["code"], 404);
    }
}
