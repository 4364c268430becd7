pub mod handler;
pub mod middleware;

use axum::{middleware as axum_mw, Router};
use ipecho_core::access_log::LogSink;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    /// Where access-log lines go. Injected so tests can buffer them.
    pub sink: Arc<dyn LogSink>,
}

pub fn build_router(state: AppState) -> Router {
    // Every path and method resolves the caller's IP, matching the
    // catch-all root route of the original service. The access-log layer
    // wraps everything so each request produces exactly one line.
    Router::new()
        .route("/", axum::routing::any(handler::ip::ip_handler))
        .fallback(handler::ip::ip_handler)
        .layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::access_log::access_log_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
