use std::path::Path;

use axum::{handler::HandlerWithoutStateExt, routing::get, Router};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::handlers::{self, cart, health, menu, orders};
use crate::state::AppState;

/// Builds the storefront router.
///
/// Paths outside the API are served from `static_dir`, with a JSON 404 when no file matches.
pub fn build_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let static_dir = static_dir.as_ref();
    let assets = ServeDir::new(static_dir).not_found_service(handlers::not_found.into_service());

    let api_routes = Router::new()
        .route("/api/menu", get(menu::get_menu))
        .route(
            "/api/cart",
            get(cart::get_cart)
                .post(cart::add_to_cart)
                .delete(cart::clear_cart),
        )
        .route(
            "/api/orders",
            get(orders::list_orders).post(orders::create_order),
        )
        .with_state(state);

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Landing page
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .merge(api_routes)
        // Static assets
        .fallback_service(assets)
        // Tracing
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(true))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
