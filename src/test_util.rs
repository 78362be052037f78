//! Helpers for driving a `Router` in unit tests without opening a socket.

use std::io;
use std::sync::{Arc, Mutex};

use axum::{body::Body, response::Response, Router};
use hyper::service::Service;
use hyper_util::service::TowerToHyperService;
use tracing::subscriber::DefaultGuard;

/// Send a GET request for `uri` through the router.
pub async fn call(app: Router, uri: &str) -> Response {
    send(app, "GET", uri).await
}

/// Send a body-less request with the given method through the router.
pub async fn send(app: Router, method: &str, uri: &str) -> Response {
    let request = http::Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    TowerToHyperService::new(app).call(request).await.unwrap()
}

pub async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Collects formatted log output in memory.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl LogCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a plain-text subscriber writing here for the current thread.
    pub fn set_default(&self) -> DefaultGuard {
        let writer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .with_max_level(tracing::Level::INFO)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap();
        String::from_utf8_lossy(&bytes)
            .lines()
            .map(str::to_owned)
            .collect()
    }

    /// Lines produced by the request logging layer.
    pub fn completed_lines(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|line| line.contains("Request completed"))
            .collect()
    }
}
