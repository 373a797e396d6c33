//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// # Logging Behavior
///
/// **On Request:**
/// - Creates a span at `INFO` level with:
///   - HTTP method
///   - URI path
///   - HTTP version
///
/// **On Response:**
/// - Logs at `INFO` level with:
///   - Status code
///   - Latency in milliseconds
///
/// Failures (5xx) are additionally reported at `ERROR` level by the default
/// classifier.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET uri=/unshorten?slug=abc123 version=HTTP/1.1}: started processing request
/// INFO request{method=GET uri=/unshorten?slug=abc123 version=HTTP/1.1}: finished processing request latency=3 ms status=200
/// ```
///
/// # Integration
///
/// ```rust,ignore
/// let app = api::routes::public_routes()
///     .with_state(state)
///     .layer(tracing::layer());
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
