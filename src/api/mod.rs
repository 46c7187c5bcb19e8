//! REST API module.
//!
//! Contains all route handlers, grouped by surface: public booking/tracking,
//! authentication, the CEO admin area, and the driver area.

mod admin;
mod auth;
mod bookings;
mod driver;

pub use admin::*;
pub use auth::*;
pub use bookings::*;
pub use driver::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

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
pub type ApiResult<T> = Result<ApiResponse<T>, crate::errors::AppError>;

/// Create a successful API response.
pub fn success<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(ApiResponse::new(data))
}
