//! # Error Handling Middleware
//!
//! Maps domain errors onto HTTP status codes and a JSON error body so every
//! endpoint fails the same way.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use slotmatch_core::errors::SlotError;
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use slotmatch_api::middleware::error_handling::AppError;
/// use slotmatch_core::errors::SlotError;
///
/// async fn handler(count: usize) -> Result<Json<usize>, AppError> {
///     if count == 0 {
///         return Err(AppError(SlotError::Validation("count must be at least 1".into())));
///     }
///     Ok(Json(count))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub SlotError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            SlotError::Validation(_) => StatusCode::BAD_REQUEST,
            SlotError::InvalidTimezone(_) => StatusCode::BAD_REQUEST,
            SlotError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = self.0.to_string();
        if status.is_server_error() {
            error!(%message, "request failed");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Lets handlers use `?` on `SlotResult`.
impl From<SlotError> for AppError {
    fn from(err: SlotError) -> Self {
        AppError(err)
    }
}

impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(SlotError::Config(err))
    }
}
