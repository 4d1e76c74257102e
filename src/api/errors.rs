//! # API Errors
//!
//! Error taxonomy for the HTTP surface. Query and selection logic return
//! `Result` values; every failure is converted here, at the handler
//! boundary, into a fixed-message JSON body. Nothing propagates past
//! this layer.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::observability::{Logger, Severity};
use crate::store::StoreError;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
///
/// The display strings are part of the wire contract; clients match on
/// them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Malformed or missing request payload
    #[error("bad request")]
    BadRequest,

    /// Resource absent, or pagination out of bounds
    #[error("resource not found")]
    NotFound,

    /// Wrong verb for the route
    #[error("method not allowed")]
    MethodNotAllowed,

    /// Well-formed but semantically invalid input
    #[error("unprocessable")]
    Unprocessable,

    /// Unexpected store failure
    #[error("internal server error")]
    Internal,
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(_: StoreError) -> Self {
        ApiError::Internal
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: u16,
    pub message: String,
    pub success: bool,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            error: err.status_code().as_u16(),
            message: err.to_string(),
            success: false,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            Logger::log_stderr(
                Severity::Error,
                "request_failed",
                &[("status", status.as_str()), ("message", &self.to_string())],
            );
        }
        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}
