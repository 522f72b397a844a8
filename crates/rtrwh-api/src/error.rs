//! Error handling for the estimator API
//!
//! Structured error types that convert to HTTP responses with a status code,
//! a stable error code and optional details.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::{DateTime, Utc};
use rtrwh_core::EngineError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::validation::ValidationError;

/// API error type with HTTP status code mapping
#[derive(Error, Debug)]
pub enum ApiError {
    /// Validation errors (400 Bad Request)
    #[error("Validation error: {message}")]
    Validation { message: String, field: Option<String>, details: Option<serde_json::Value> },

    /// Request body over the configured limit (413 Payload Too Large)
    #[error("Payload too large: {message}")]
    PayloadTooLarge { message: String },

    /// Resource not found (404 Not Found)
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// Engine processing errors (422 Unprocessable Entity)
    #[error("Engine processing error: {message}")]
    EngineError { message: String },

    /// Submission storage errors (503 Service Unavailable)
    #[error("Storage error: {message}")]
    StorageError { message: String },

    /// Internal server errors (500 Internal Server Error)
    #[error("Internal server error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ApiError {
    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::EngineError { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::StorageError { .. } => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code string for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Validation { .. } => "VALIDATION_ERROR",
            ApiError::PayloadTooLarge { .. } => "PAYLOAD_TOO_LARGE",
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::EngineError { .. } => "ENGINE_ERROR",
            ApiError::StorageError { .. } => "STORAGE_ERROR",
            ApiError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// Convert to ApiErrorResponse format for JSON serialization
    pub fn to_response(&self) -> ApiErrorResponse {
        let mut details = serde_json::Map::new();

        match self {
            ApiError::Validation { field, details: extra_details, .. } => {
                if let Some(field) = field {
                    details.insert(
                        "field".to_string(),
                        serde_json::Value::String(field.clone()),
                    );
                }
                if let Some(extra) = extra_details {
                    details.insert("violations".to_string(), extra.clone());
                }
            }
            ApiError::Internal { source: Some(source_err), .. } => {
                details.insert(
                    "source".to_string(),
                    serde_json::Value::String(source_err.to_string()),
                );
            }
            _ => {}
        }

        ApiErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: if details.is_empty() {
                None
            } else {
                Some(serde_json::Value::Object(details))
            },
            timestamp: Utc::now(),
        }
    }
}

/// JSON-serializable error response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    /// Error code
    #[schema(example = "VALIDATION_ERROR")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "Validation error: pincode must be exactly 6 digits")]
    pub message: String,

    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<serde_json::Value>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }
        (status, Json(self.to_response())).into_response()
    }
}

/// Convenience constructors for common error scenarios
impl ApiError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation { message: message.into(), field: None, details: None }
    }

    /// Create a validation error for a specific field
    pub fn validation_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation { message: message.into(), field: Some(field.into()), details: None }
    }

    /// Create a payload too large error
    pub fn payload_too_large(message: impl Into<String>) -> Self {
        Self::PayloadTooLarge { message: message.into() }
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::StorageError { message: message.into() }
    }

    /// Create a simple internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal { message: message.into(), source: None }
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::NoCityData => ApiError::EngineError { message: err.to_string() },
            other => ApiError::Internal {
                message: "Reference data error".to_string(),
                source: Some(Box::new(other)),
            },
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        let field = err.violations.first().map(|v| v.field.to_string());
        let details = serde_json::to_value(&err.violations).ok();
        ApiError::Validation { message: err.to_string(), field, details }
    }
}

/// Convert from anyhow::Error to ApiError
impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        if let Some(serde_err) = err.downcast_ref::<serde_json::Error>() {
            return ApiError::validation(format!("JSON parsing error: {}", serde_err));
        }
        ApiError::Internal { message: "Internal error".to_string(), source: Some(err.into()) }
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::validation("bad").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::storage("full").status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            ApiError::payload_too_large("big").status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            ApiError::from(EngineError::NoCityData).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_field_detail_in_response() {
        let response = ApiError::validation_field("pincode", "must be 6 digits").to_response();
        assert_eq!(response.code, "VALIDATION_ERROR");
        assert_eq!(response.details.unwrap()["field"], "pincode");
    }

    #[test]
    fn test_reference_data_errors_are_internal() {
        let err = ApiError::from(EngineError::reference_data("bad table"));
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
        assert!(err.to_response().details.unwrap()["source"].as_str().unwrap().contains("bad table"));
    }
}
