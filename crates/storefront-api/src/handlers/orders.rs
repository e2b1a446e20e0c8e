//! Order HTTP handlers

use axum::{extract::State, Json};
use storefront_core::Order;

use crate::dto::{CreateOrderRequest, OrderResponse};
use crate::error::ApiError;
use crate::extract::AppJson;
use crate::state::AppState;

/// Create handler - POST /api/orders
///
/// Empties the shared cart once the order is recorded.
pub async fn create_order(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateOrderRequest>,
) -> Result<Json<OrderResponse>, ApiError> {
    let order = state.service.create_order(payload.into()).await?;

    Ok(Json(OrderResponse { success: true, order }))
}

/// List handler - GET /api/orders
pub async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<Order>>, ApiError> {
    Ok(Json(state.service.orders().await?))
}
