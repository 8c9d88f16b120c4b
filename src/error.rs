//! Error types and error handling for the application
//!
//! This module defines custom error types that can be converted to HTTP responses.
//! All errors implement `IntoResponse` and render the same failure envelope
//! (`{"success": false, "message": ...}`) used across the API.

use crate::api::response::ApiResponse;
use crate::state::REQUIRED_FIELDS;
use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Message returned when no pet matches the requested ID
pub const PET_NOT_FOUND_MESSAGE: &str = "ไม่พบข้อมูลสัตว์";

/// Message returned for requests that match no route
pub const ENDPOINT_NOT_FOUND_MESSAGE: &str = "Endpoint not found";

/// Application-level error types
///
/// Each variant implements automatic conversion to HTTP responses via `IntoResponse`.
#[derive(Error, Debug)]
pub enum AppError {
    /// No pet with the given ID (raw path segment, which may not be numeric)
    #[error("Pet not found: {0}")]
    PetNotFound(String),

    /// A create request lacked one of the required fields
    #[error("Missing required fields")]
    MissingRequiredFields,

    /// No route matches the request method and path
    #[error("Endpoint not found")]
    EndpointNotFound,

    /// Request body could not be decoded as the expected JSON shape
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Query string could not be decoded into the list filters
    #[error("Invalid query string: {0}")]
    InvalidQuery(String),

    /// Internal server error (catch-all for unexpected errors)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InvalidQuery(rejection.body_text())
    }
}

impl AppError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::PetNotFound(_) => StatusCode::NOT_FOUND,
            AppError::EndpointNotFound => StatusCode::NOT_FOUND,
            AppError::MissingRequiredFields => StatusCode::BAD_REQUEST,
            AppError::InvalidBody(_) | AppError::InvalidQuery(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message placed in the failure envelope
    pub fn message(&self) -> String {
        match self {
            AppError::PetNotFound(_) => PET_NOT_FOUND_MESSAGE.to_string(),
            AppError::EndpointNotFound => ENDPOINT_NOT_FOUND_MESSAGE.to_string(),
            AppError::MissingRequiredFields => format!(
                "กรุณาระบุข้อมูลที่จำเป็น: {}",
                REQUIRED_FIELDS.join(", ")
            ),
            AppError::InvalidBody(_) | AppError::InvalidQuery(_) | AppError::Internal(_) => {
                self.to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::warn!(error = %self, status = status.as_u16(), "Request rejected");
        }

        let body = Json(ApiResponse::<()>::failure(self.message()));
        (status, body).into_response()
    }
}
