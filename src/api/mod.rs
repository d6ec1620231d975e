pub mod errors;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::PageLensConfig;

/// Shared application state: configuration only. Requests are independent;
/// no mutable state crosses them.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<PageLensConfig>,
}

impl AppState {
    pub fn new(config: PageLensConfig) -> Self {
        Self { config: Arc::new(config) }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(routes::health::health_check))
        .route("/api/v1/analyze-page", post(routes::analyze::analyze_page))
        .route(
            "/api/v1/analyze-with-local-llm",
            post(routes::assess::analyze_with_local_llm),
        )
        .route(
            "/api/v1/analyze-with-hosted-llm",
            post(routes::assess::analyze_with_hosted_llm),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
