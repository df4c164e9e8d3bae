//! API route handlers
//!
//! This module contains all HTTP endpoint implementations for the stringlens
//! server. Routes are organized by functionality:
//!
//! - `health`: Liveness and readiness checks
//! - `strings`: Analysis creation, querying, lookup, and deletion

pub mod health;
pub mod strings;

use crate::error::{ApiError, ApiResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// Service name, version and available endpoints.
///
/// This is the root endpoint (GET /) and requires no authentication.
pub async fn service_info() -> ApiResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "stringlens",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "POST /strings - Analyze and store a string",
            "GET /strings - List stored analyses with optional filters",
            "GET /strings/search - Filter with a natural-language query",
            "GET /strings/{value} - Fetch one analysis by value",
            "DELETE /strings/{value} - Delete one analysis by value",
            "GET /health",
            "GET /ready"
        ]
    })))
}

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
