//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{id}`         - Cloaked link resolution (public)
//! - `POST /update/{id}`  - Register or replace a link pair (public)
//!
//! # Middleware
//!
//! - **Tracing** - Access log with method, URI, User-Agent, status and latency
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// All public routes, without state or middleware.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(redirect_handler))
        .merge(api::routes::update_routes())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = routes().with_state(state).layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
