// ============================================================================
// Storefront API - Cart Handlers
// File: crates/storefront-api/src/handlers/cart.rs
// ============================================================================
//! Shared cart HTTP handlers (add, list, clear)

use axum::{extract::State, Json};
use storefront_core::CartEntry;
use tracing::warn;

use crate::dto::{AddToCartRequest, CartResponse, SuccessResponse};
use crate::error::ApiError;
use crate::extract::AppJson;
use crate::state::AppState;

/// Add handler - POST /api/cart
pub async fn add_to_cart(
    State(state): State<AppState>,
    AppJson(payload): AppJson<AddToCartRequest>,
) -> Result<Json<CartResponse>, ApiError> {
    let entry = match payload.item {
        Some(item) => CartEntry::from(item),
        None => {
            warn!("Cart request without item, storing null");
            CartEntry::absent()
        }
    };

    let cart = state.service.add_to_cart(entry).await?;

    Ok(Json(CartResponse { success: true, cart }))
}

/// List handler - GET /api/cart
pub async fn get_cart(State(state): State<AppState>) -> Result<Json<Vec<CartEntry>>, ApiError> {
    Ok(Json(state.service.cart().await?))
}

/// Clear handler - DELETE /api/cart
pub async fn clear_cart(State(state): State<AppState>) -> Result<Json<SuccessResponse>, ApiError> {
    state.service.clear_cart().await?;
    Ok(Json(SuccessResponse::ok()))
}
