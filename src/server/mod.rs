pub mod routes;
pub mod types;

use crate::state::AppState;
use axum::routing::post;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Build the HTTP router. The pricing front end is served from a different
/// origin, hence the permissive CORS layer.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/bs/price", post(routes::price))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
