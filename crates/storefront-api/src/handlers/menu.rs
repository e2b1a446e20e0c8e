use axum::{extract::State, Json};
use storefront_core::MenuItem;
use tracing::debug;

use crate::state::AppState;

/// Menu handler - GET /api/menu
pub async fn get_menu(State(state): State<AppState>) -> Json<&'static [MenuItem]> {
    debug!("Serving menu");
    Json(state.service.menu())
}
