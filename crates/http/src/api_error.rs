//! Typed API error for HTTP handlers.
//!
//! Converts domain errors into proper HTTP responses with JSON body and
//! status codes. Handlers return `Result<Json<T>, ApiError>` instead of
//! losing error context with bare `StatusCode`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use weatherlog_provider::ProviderError;
use weatherlog_store::StoreError;

/// API error with HTTP status code and human-readable message.
///
/// Converts to JSON response: `{"detail": "message"}`.
///
/// `Internal` logs the real error server-side and returns a static
/// message to the client — no error detail leakage.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request — the provider rejected the request in-band.
    BadRequest(String),
    /// 404 Not Found — record missing, or section missing within a record.
    NotFound(String),
    /// 502 Bad Gateway — the provider could not be reached.
    BadGateway(String),
    /// Upstream HTTP failure — the provider's status code, surfaced as-is.
    Upstream { code: u16, message: String },
    /// 500 Internal Server Error — unexpected failure. Details logged, not exposed.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
            Self::Upstream { code, message } => {
                (StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_GATEWAY), message)
            },
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned())
            },
        };
        let body = serde_json::json!({"detail": detail});
        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => Self::NotFound("weather record not found".to_owned()),
        }
    }
}

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Rejected { detail } => {
                Self::BadRequest(format!("weather provider error: {detail}"))
            },
            ProviderError::Transport(e) => Self::BadGateway(format!("network error: {e}")),
            ProviderError::HttpStatus { code, body } => {
                tracing::warn!(code, body = %body, "provider returned HTTP error");
                Self::Upstream {
                    code,
                    message: format!("error from weather provider (status {code})"),
                }
            },
            err @ (ProviderError::JsonParse { .. } | ProviderError::ClientInit(_)) => {
                Self::Internal(anyhow::Error::new(err))
            },
        }
    }
}
