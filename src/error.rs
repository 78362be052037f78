use axum::{
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
};

use crate::config::CONTENT_TYPE_TEXT;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Internal error: {:?}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(CONTENT_TYPE, CONTENT_TYPE_TEXT)],
            "internal server error\n",
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::Error as _;

    #[test]
    fn test_encode_error_is_500() {
        let err = AppError::from(serde_json::Error::custom("boom"));
        assert!(err.to_string().contains("boom"));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.headers()[CONTENT_TYPE], CONTENT_TYPE_TEXT);
    }
}
