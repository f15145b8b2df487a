//! HTTP access log middleware.

use axum::http::{Request, header};
use std::borrow::Cow;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnResponse, MakeSpan, TraceLayer};
use tracing::{Level, Span};

/// Span factory recording the request line and User-Agent.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessLogSpan;

impl<B> MakeSpan<B> for AccessLogSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let user_agent = request
            .headers()
            .get(header::USER_AGENT)
            .map_or(Cow::Borrowed("-"), |v| String::from_utf8_lossy(v.as_bytes()));

        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            version = ?request.version(),
            user_agent = %user_agent,
        )
    }
}

/// Creates the access log layer.
///
/// Each request gets an `INFO` span with method, URI (including the query,
/// so probe follow-ups are visible), HTTP version and User-Agent. The
/// response is logged at `INFO` with status and latency in milliseconds.
///
/// ```text
/// INFO request{method=GET uri=/x1?js=enabled version=HTTP/1.1 user_agent=Mozilla/5.0}: finished processing request latency=0 ms status=302
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, AccessLogSpan> {
    TraceLayer::new_for_http()
        .make_span_with(AccessLogSpan)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
