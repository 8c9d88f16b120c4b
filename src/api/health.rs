//! Liveness and fallback handlers

use crate::error::AppError;
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always true while the server is answering
    pub success: bool,
    /// Status message
    pub message: String,
    /// Current server time, RFC 3339 in UTC with millisecond precision
    pub timestamp: String,
}

/// GET /api/health - Liveness check with the current server time
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        message: "API is running".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// Fallback for every method/path combination without a route
pub async fn endpoint_not_found() -> AppError {
    AppError::EndpointNotFound
}
