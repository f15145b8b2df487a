//! Handler for the link update endpoint.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::update_link::UpdateLinkRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Registers or replaces the destination pair for an identifier.
///
/// # Endpoint
///
/// `POST /update/{id}`
///
/// # Request Body
///
/// ```json
/// {
///   "real": "https://a.example",
///   "bot": "https://b.example"
/// }
/// ```
///
/// The body is decoded regardless of `Content-Type`. Missing or `null`
/// fields are stored as empty strings, and data after the first JSON value
/// is ignored.
///
/// # Errors
///
/// Returns 400 Bad Request if the body does not decode into the expected
/// shape. The registry is left unmodified in that case.
pub async fn update_link_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, &'static str), AppError> {
    let payload = UpdateLinkRequest::from_body(&body).map_err(AppError::malformed_payload)?;

    state.link_service.update(&id, payload.into()).await?;

    Ok((StatusCode::OK, "Links updated successfully"))
}
