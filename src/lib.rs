//! hello-web: a minimal HTTP service.
//!
//! Serves a liveness probe at `/healthz` and a JSON greeting everywhere else,
//! reporting the build metadata compiled into the binary, the current UTC time
//! and the host name.

pub mod build_info;
pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;

#[cfg(test)]
mod test_util;
