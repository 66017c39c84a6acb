//! Response helpers shared by API handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// `200` with `value` as JSON, or `404` with an empty body when absent.
///
/// A lookup miss is a normal outcome here, not an [`AppError`](crate::error::AppError).
pub fn wrap_or_not_found<T: Serialize>(value: Option<T>) -> Response {
    match value {
        Some(value) => (StatusCode::OK, Json(value)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
