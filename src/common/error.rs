// Error handling types for the API

use axum::{
    http::{Method, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tracing::error;

use super::validation::Validator;

/// API error types
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    MethodNotAllowed(String),
    EditConflict,
    FailedValidation(BTreeMap<String, String>),
    InternalServer(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            ApiError::MethodNotAllowed(msg) => write!(f, "Method Not Allowed: {}", msg),
            ApiError::EditConflict => write!(f, "Edit Conflict"),
            ApiError::FailedValidation(errors) => {
                let fields: Vec<String> = errors
                    .iter()
                    .map(|(field, message)| format!("{}: {}", field, message))
                    .collect();
                write!(f, "Failed Validation: {}", fields.join(", "))
            }
            ApiError::InternalServer(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Error payload: a plain message, or a field → message map for validation failures
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Fields(BTreeMap<String, String>),
}

/// JSON error response structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, detail, code) = match self {
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorDetail::Message(msg), "BAD_REQUEST")
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorDetail::Message(msg), "NOT_FOUND"),
            ApiError::MethodNotAllowed(msg) => (
                StatusCode::METHOD_NOT_ALLOWED,
                ErrorDetail::Message(msg),
                "METHOD_NOT_ALLOWED",
            ),
            ApiError::EditConflict => (
                StatusCode::CONFLICT,
                ErrorDetail::Message(
                    "unable to update the record due to an edit conflict, please try again"
                        .to_string(),
                ),
                "EDIT_CONFLICT",
            ),
            ApiError::FailedValidation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorDetail::Fields(errors),
                "FAILED_VALIDATION",
            ),
            ApiError::InternalServer(msg) => {
                error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorDetail::Message(
                        "the server encountered a problem and could not process your request"
                            .to_string(),
                    ),
                    "INTERNAL_SERVER_ERROR",
                )
            }
        };

        let error_response = ErrorResponse {
            error: detail,
            code: code.to_string(),
        };

        (status, Json(error_response)).into_response()
    }
}

/// Converts a populated Validator into a 422 error
impl From<Validator> for ApiError {
    fn from(v: Validator) -> Self {
        if v.valid() {
            ApiError::InternalServer(
                "Validation result was valid but converted to error".to_string(),
            )
        } else {
            ApiError::FailedValidation(v.into_errors())
        }
    }
}

/// Fallback handler for unmatched routes
pub async fn not_found() -> ApiError {
    ApiError::NotFound("the requested resource could not be found".to_string())
}

/// Fallback handler for known routes hit with an unsupported method
pub async fn method_not_allowed(method: Method) -> ApiError {
    ApiError::MethodNotAllowed(format!(
        "the {} method is not supported for this resource",
        method
    ))
}
