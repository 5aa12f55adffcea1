//! Proxy errors and their HTTP rendering.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use portfolio_core::PortfolioError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    /// A required setting is missing or invalid
    #[error("Server misconfigured: {0}")]
    NotConfigured(String),

    /// Third-party API failed or answered non-2xx
    #[error("{0}")]
    Upstream(String),

    #[error("{0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ProxyError::NotFound(_) => StatusCode::NOT_FOUND,
            ProxyError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ProxyError::NotConfigured(_) | ProxyError::Internal(_) | ProxyError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<PortfolioError> for ProxyError {
    fn from(err: PortfolioError) -> Self {
        match err {
            PortfolioError::NotConfigured(what) => ProxyError::NotConfigured(what),
            PortfolioError::Network(_)
            | PortfolioError::Timeout(_)
            | PortfolioError::Upstream { .. }
            | PortfolioError::Parse(_) => ProxyError::Upstream(err.to_string()),
            other => ProxyError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
