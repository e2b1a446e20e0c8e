use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use axum::{body::Body, http::Request};
use storefront_api::{build_router, AppState};
use storefront_core::StorefrontService;
use storefront_infrastructure::{InMemoryCartRepository, InMemoryOrderRepository};
use storefront_shared::telemetry::DEFAULT_LOG_FILTER;
use tower::ServiceExt;
use tracing::{Event, Subscriber};
use tracing_subscriber::{
    layer::{Context, SubscriberExt},
    EnvFilter, Layer,
};

const FIXTURES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/public");

/// Counts request/response events from the HTTP trace layer.
struct HttpTraceEvents(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for HttpTraceEvents {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if event.metadata().target().starts_with("tower_http::trace") {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[tokio::test]
async fn test_requests_are_traced_under_default_filter() {
    let seen = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(DEFAULT_LOG_FILTER))
        .with(HttpTraceEvents(seen.clone()));
    let _guard = tracing::subscriber::set_default(subscriber);

    let service = StorefrontService::new(
        Arc::new(InMemoryCartRepository::new()),
        Arc::new(InMemoryOrderRepository::new()),
    );
    let app = build_router(AppState::new(service), FIXTURES);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let _ = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();

    // one event when the request starts, one when the response is produced
    assert!(seen.load(Ordering::SeqCst) >= 2);
}
