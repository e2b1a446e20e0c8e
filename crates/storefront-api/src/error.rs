use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use storefront_core::DomainError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to read body: {0}")]
    BodyRead(#[from] BytesRejection),

    #[error("Malformed JSON: {0}")]
    MalformedJson(serde_json::Error),

    #[error("Invalid field: {0}")]
    InvalidField(serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::InternalError(err.to_string())
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::BodyRead(rejection) => {
                tracing::warn!("Body read failed: {}", rejection.body_text());
                (rejection.status(), "InvalidBody", rejection.body_text())
            },
            ApiError::MalformedJson(err) => {
                tracing::warn!("Malformed JSON body: {}", err);
                (StatusCode::BAD_REQUEST, "InvalidBody", err.to_string())
            },
            ApiError::InvalidField(err) => {
                tracing::warn!("Invalid body field: {}", err);
                (StatusCode::UNPROCESSABLE_ENTITY, "InvalidBody", err.to_string())
            },
            ApiError::NotFound(msg) => {
                tracing::debug!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, "NotFound", msg)
            },
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError", msg)
            },
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
        });

        (status, body).into_response()
    }
}
