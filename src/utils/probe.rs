//! JavaScript probe marker helpers.
//!
//! The probe page reloads the current path with `?js=enabled`. Only the
//! presence of the `js` key matters on the follow-up request; its value is
//! ignored.

use url::form_urlencoded;

/// Query parameter carried by clients that executed the probe script.
pub const PROBE_PARAM: &str = "js";

/// Value appended by the probe script.
pub const PROBE_VALUE: &str = "enabled";

/// Returns true if `query` contains the probe marker key.
///
/// ```
/// use link_cloaker::utils::probe::has_probe_marker;
///
/// assert!(has_probe_marker(Some("js=enabled")));
/// assert!(has_probe_marker(Some("utm=x&js")));
/// assert!(!has_probe_marker(Some("jsx=1")));
/// assert!(!has_probe_marker(None));
/// ```
pub fn has_probe_marker(query: Option<&str>) -> bool {
    query.is_some_and(|q| {
        form_urlencoded::parse(q.as_bytes()).any(|(key, _)| key == PROBE_PARAM)
    })
}

/// Builds the probe redirect target for `path` as a JavaScript string literal.
///
/// The literal is JSON-quoted with `<`, `>`, `&` and the line separators
/// escaped, so it can be embedded directly inside a `<script>` element.
pub fn probe_target_literal(path: &str) -> String {
    let target = format!("{path}?{PROBE_PARAM}={PROBE_VALUE}");

    serde_json::Value::String(target)
        .to_string()
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}
