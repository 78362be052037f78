//! HTTP route handlers.
//!
//! Two endpoints: `/healthz` for liveness probes and the greeting, which is
//! mounted at `/` and as the fallback so every other path gets it too.
//!
//! Request logging is applied as the outermost layer over the finished router.

pub mod greeting;
pub mod health;

use axum::{middleware, routing::any, Router};

use crate::middleware::request_log_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes and the request logging layer.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", any(health::healthz))
        .route("/", any(greeting::greet))
        .fallback(greeting::greet)
        .with_state(state)
        .layer(middleware::from_fn(request_log_layer))
}
