//! Greeting endpoint reporting build metadata, time and host.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use chrono::{SecondsFormat, Utc};
use http::header::CONTENT_TYPE;
use serde::Serialize;

use crate::build_info::BuildInfo;
use crate::config::{CONTENT_TYPE_JSON, GREETING_MESSAGE};
use crate::error::AppError;
use crate::state::AppState;

/// Body of the greeting endpoint. Built fresh for every request.
#[derive(Debug, Serialize)]
pub struct GreetingResponse<'a> {
    pub message: &'a str,
    pub version: &'a str,
    pub git_sha: &'a str,
    pub build_time: &'a str,
    pub time_utc: String,
    pub hostname: String,
}

impl<'a> GreetingResponse<'a> {
    pub fn new(build: &'a BuildInfo, time_utc: String, hostname: String) -> Self {
        Self {
            message: GREETING_MESSAGE,
            version: &build.version,
            git_sha: &build.git_sha,
            build_time: &build.build_time,
            time_utc,
            hostname,
        }
    }

    /// Pretty JSON (two-space indent) terminated by a newline.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut body = serde_json::to_string_pretty(self)?;
        body.push('\n');
        Ok(body)
    }
}

/// Current UTC time as RFC 3339 with second precision, e.g. `2024-01-15T10:30:00Z`.
pub fn now_utc() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Host name of the machine or container, empty if it cannot be represented.
pub fn resolve_hostname() -> String {
    gethostname::gethostname()
        .into_string()
        .unwrap_or_default()
}

/// Root handler, also mounted as the router fallback.
pub async fn greet(State(state): State<AppState>) -> Result<Response, AppError> {
    let greeting = GreetingResponse::new(&state.build, now_utc(), resolve_hostname());
    let body = greeting.to_json()?;
    Ok(([(CONTENT_TYPE, CONTENT_TYPE_JSON)], body).into_response())
}
