//! Health check endpoint for container orchestration.
//!
//! Provides a simple liveness probe that returns 200 OK when the process is running.
//! Used by Kubernetes, ECS, systemd, and load balancers to verify the service is alive.

use axum::response::IntoResponse;
use http::header::CONTENT_TYPE;

use crate::config::CONTENT_TYPE_TEXT;

/// Health check handler.
///
/// This is a liveness probe: it does nothing that can fail, no hostname
/// lookup and no encoding, so it only checks that the process can respond.
pub async fn healthz() -> impl IntoResponse {
    ([(CONTENT_TYPE, CONTENT_TYPE_TEXT)], "ok\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util;
    use http::StatusCode;

    #[tokio::test]
    async fn test_healthz_body_and_content_type() {
        let response = healthz().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], CONTENT_TYPE_TEXT);
        assert_eq!(test_util::body_string(response).await, "ok\n");
    }
}
