//! API route configuration.
//!
//! The update path carries no authentication.

use crate::api::handlers::update_link_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// Link management routes.
///
/// # Endpoints
///
/// - `POST /update/{id}` - Register or replace the real/bot pair for `id`
pub fn update_routes() -> Router<AppState> {
    Router::new().route("/update/{id}", post(update_link_handler))
}
