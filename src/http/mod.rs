//! HTTP server module.
//!
//! Binds the TCP listener and drives each accepted connection with hyper's
//! HTTP/1 connection builder, which is where the read-header timeout lives.
//! There is no graceful shutdown: the process serves until it is killed.

mod server;

pub use server::{bind, serve, start_server, ServerError};
