pub mod cart;
pub mod health;
pub mod menu;
pub mod orders;

use axum::http::Uri;

use crate::error::ApiError;

/// Fallback for paths that match neither a route nor a static file.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
