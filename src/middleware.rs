//! Request logging middleware.
//!
//! Generates a UUID v4 for each incoming request and creates a tracing span
//! that wraps the entire request lifecycle. Once the inner service has produced
//! a response, a single event records the status and the elapsed time, so every
//! request yields exactly one log line carrying method, path and duration.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

/// Middleware that times the request and logs it on completion.
///
/// Applied with `Router::layer`, so it decorates the whole routing table,
/// fallback included, rather than individual handlers.
pub async fn request_log_layer(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %path,
    );

    let start = Instant::now();

    async move {
        let response = next.run(request).await;
        let elapsed = start.elapsed();

        tracing::info!(
            %method,
            %path,
            status = response.status().as_u16(),
            ?elapsed,
            "Request completed"
        );

        response
    }
    .instrument(span)
    .await
}
