//! Handler for cloaked link resolution.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};

use crate::domain::resolution::Resolution;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::probe::{has_probe_marker, probe_target_literal};

/// Probe page that reloads the current path with the marker appended.
///
/// `target` is a ready-to-embed JavaScript string literal.
#[derive(Template, WebTemplate)]
#[template(path = "probe.html")]
pub struct ProbeTemplate {
    pub target: String,
}

/// Resolves an identifier to a redirect or the JavaScript probe page.
///
/// # Endpoint
///
/// `GET /{id}`
///
/// # Responses
///
/// - **302 Found** to the bot target for crawler User-Agents
/// - **200 OK** probe page for browsers without the `js` query parameter
/// - **302 Found** to the real target for browsers with the `js` parameter
///
/// # Errors
///
/// Returns 404 Not Found if the identifier is not registered.
/// Returns 500 if the stored target cannot be sent as a `Location` header.
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<Response, AppError> {
    // Non-UTF-8 bytes must not hide a signature elsewhere in the header.
    let user_agent = headers
        .get(header::USER_AGENT)
        .map(|v| String::from_utf8_lossy(v.as_bytes()));

    let resolution = state
        .link_service
        .resolve(&id, user_agent.as_deref(), has_probe_marker(uri.query()))
        .await?;

    match resolution {
        Resolution::RedirectTo(target) => found(&id, target),
        Resolution::ServeProbe => Ok(ProbeTemplate {
            target: probe_target_literal(uri.path()),
        }
        .into_response()),
    }
}

/// Builds a `302 Found` response pointing at `target`.
fn found(id: &str, target: String) -> Result<Response, AppError> {
    let location = HeaderValue::try_from(target).map_err(|_| AppError::invalid_target(id))?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
