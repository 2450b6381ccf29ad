//! REST API module.
//!
//! Public content routes are fallback-safe and never 5xx on store trouble;
//! admin routes surface write failures.

mod admin;
mod content;

pub use admin::*;
pub use content::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::CategoryId;

/// Success response envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;

/// Create a successful API response.
pub fn success<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(ApiResponse::new(data))
}

/// Resolve a category slug from a route path or reject with 404.
pub fn category_from_slug(slug: &str) -> Result<CategoryId, AppError> {
    CategoryId::from_slug(slug)
        .ok_or_else(|| AppError::NotFound(format!("Unknown content category '{}'", slug)))
}
