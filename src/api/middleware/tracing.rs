//! Request span and response logging for every HTTP call.

use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Builds the `TraceLayer` applied around the whole router.
///
/// Each request opens an `INFO` span carrying the method, path and HTTP
/// version; the response is logged into that span with its status code
/// and latency in milliseconds, so a single line like
///
/// ```text
/// INFO request{method=POST uri=/api/owners version=HTTP/1.1}: Response 201 Created in 4ms
/// ```
///
/// ties the outcome back to the request that caused it. Server errors
/// are classified as failures by the default tower-http classifier.
pub fn layer()
-> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
