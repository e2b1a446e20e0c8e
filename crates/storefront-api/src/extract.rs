//! JSON body extractor with the storefront's lenient body rules.
//!
//! - A body only counts as JSON when the content type is `application/json` or `*+json`.
//!   Anything else, including no body at all, reads as `{}`.
//! - Invalid JSON under a JSON content type is rejected with 400.
//! - A JSON value that is not an object (array, string, number) reads as `{}`, so only named
//!   keys ever reach a request schema.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ApiError;

pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = has_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state).await?;

        let fields = if is_json && !is_blank(&bytes) {
            match serde_json::from_slice::<Value>(&bytes).map_err(ApiError::MalformedJson)? {
                Value::Object(map) => map,
                _ => Map::new(),
            }
        } else {
            Map::new()
        };

        serde_json::from_value(Value::Object(fields))
            .map(AppJson)
            .map_err(ApiError::InvalidField)
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|essence| {
            let essence = essence.trim().to_ascii_lowercase();
            essence == "application/json" || essence.ends_with("+json")
        })
        .unwrap_or(false)
}

fn is_blank(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_whitespace)
}
