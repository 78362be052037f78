//! Listener binding and the connection accept loop.

use std::io::ErrorKind;
use std::net::SocketAddr;

use axum::Router;
use hyper::server::conn::http1;
use hyper_util::rt::{TokioIo, TokioTimer};
use hyper_util::service::TowerToHyperService;
use tokio::net::{TcpListener, TcpStream};

use crate::config::{HttpServerConfig, ACCEPT_ERROR_BACKOFF, FALLBACK_HOST, READ_HEADER_TIMEOUT};

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind server on {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
}

/// Bind the listener and serve `app` on it.
///
/// Only returns on a bind failure; once serving, the loop runs for the life of the process.
pub async fn start_server(app: Router, config: &HttpServerConfig) -> Result<(), ServerError> {
    let listener = bind(config).await?;
    serve(listener, app).await;
    Ok(())
}

/// Bind a TCP listener on the configured host and port.
///
/// The port string is passed through untouched, so a non-numeric value fails here.
/// The default `::` host accepts IPv4 and IPv6 clients; on hosts without IPv6
/// it falls back to the IPv4 wildcard.
pub async fn bind(config: &HttpServerConfig) -> Result<TcpListener, ServerError> {
    let listener = match bind_addr(&config.bind_addr()).await {
        Err(ServerError::Bind { addr, source })
            if config.is_dual_stack() && source.kind() != ErrorKind::AddrInUse =>
        {
            tracing::warn!(%addr, error = %source, "IPv6 bind failed, listening on IPv4 only");
            let ipv4 = HttpServerConfig {
                host: FALLBACK_HOST.to_string(),
                port: config.port.clone(),
            };
            bind_addr(&ipv4.bind_addr()).await?
        }
        result => result?,
    };

    if let Ok(local_addr) = listener.local_addr() {
        tracing::debug!(%local_addr, "Listener bound");
    }
    Ok(listener)
}

async fn bind_addr(addr: &str) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.to_string(),
            source,
        })
}

/// Accept connections forever, one task per connection.
pub async fn serve(listener: TcpListener, app: Router) {
    loop {
        let (stream, peer_addr) = match listener.accept().await {
            Ok(conn) => conn,
            Err(e) => {
                // Usually transient (fd exhaustion, aborted handshake)
                tracing::warn!(error = %e, "Failed to accept connection");
                tokio::time::sleep(ACCEPT_ERROR_BACKOFF).await;
                continue;
            }
        };

        tokio::spawn(serve_connection(stream, peer_addr, app.clone()));
    }
}

/// Serve a single HTTP/1 connection with the read-header timeout applied.
///
/// hyper arms the header timer whenever it waits for a request head, including
/// while a keep-alive connection sits idle between requests, so idle connections
/// are closed after the same timeout.
async fn serve_connection(stream: TcpStream, peer_addr: SocketAddr, app: Router) {
    let io = TokioIo::new(stream);
    let service = TowerToHyperService::new(app);

    let mut builder = http1::Builder::new();
    builder
        .timer(TokioTimer::new())
        .header_read_timeout(READ_HEADER_TIMEOUT);

    if let Err(err) = builder.serve_connection(io, service).await {
        tracing::debug!(%peer_addr, error = %err, "Connection closed with error");
    }
}
