//! Outcome of resolving an identifier for a single request.

/// What the HTTP layer should send back for a resolved identifier.
///
/// A missing identifier is reported as [`crate::error::AppError::NotFound`]
/// rather than as a variant here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Redirect the client to the contained URL.
    RedirectTo(String),
    /// Send the JavaScript probe page that reloads the path with the marker.
    ServeProbe,
}
