//! Axum-specific error types and mappings.
//!
//! [`HttpError`] renders as JSON for the `/api` routes; [`PageError`] wraps
//! it for the HTML routes and renders the error page instead.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use orbitdash_core::{CoreError, RepositoryError, UpstreamError};
use serde::Serialize;
use thiserror::Error;

use crate::views;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An upstream answered badly or not at all.
    #[error("Bad gateway: {message}")]
    BadGateway {
        service: &'static str,
        message: String,
    },

    /// An upstream lacks the configuration it needs.
    #[error("Service unavailable: {message}")]
    NotConfigured {
        service: &'static str,
        message: String,
    },

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HttpError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::BadGateway { .. } => StatusCode::BAD_GATEWAY,
            Self::NotConfigured { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable discriminant for clients.
    const fn error_type(&self) -> Option<&'static str> {
        match self {
            Self::BadGateway { .. } => Some("UPSTREAM_ERROR"),
            Self::NotConfigured { .. } => Some("UPSTREAM_NOT_CONFIGURED"),
            _ => None,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::NotFound(msg) | Self::BadRequest(msg) | Self::Internal(msg) => msg.clone(),
            Self::BadGateway { message, .. } | Self::NotConfigured { message, .. } => {
                message.clone()
            }
        }
    }
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
    #[serde(skip_serializing_if = "Option::is_none", rename = "type")]
    error_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    service: Option<&'static str>,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!(status = status.as_u16(), error = %self, "request failed");
        }

        let service = match &self {
            Self::BadGateway { service, .. } | Self::NotConfigured { service, .. } => {
                Some(*service)
            }
            _ => None,
        };
        let body = ErrorBody {
            error: self.message(),
            status: status.as_u16(),
            error_type: self.error_type(),
            service,
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => repo_err.into(),
            CoreError::Upstream(upstream_err) => upstream_err.into(),
            CoreError::Validation(msg) => Self::BadRequest(msg),
        }
    }
}

impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => Self::NotFound(msg),
            RepositoryError::Storage(msg) => Self::Internal(format!("Storage: {msg}")),
            RepositoryError::Constraint(msg) => Self::BadRequest(msg),
        }
    }
}

impl From<UpstreamError> for HttpError {
    fn from(err: UpstreamError) -> Self {
        let service = err.service();
        match err {
            UpstreamError::NotConfigured { .. } => Self::NotConfigured {
                service,
                message: err.to_string(),
            },
            UpstreamError::Unavailable { .. }
            | UpstreamError::Status { .. }
            | UpstreamError::InvalidResponse { .. } => Self::BadGateway {
                service,
                message: err.to_string(),
            },
        }
    }
}

/// Error for routes that answer with HTML.
#[derive(Debug)]
pub struct PageError(pub HttpError);

impl PageError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self(HttpError::NotFound(what.into()))
    }
}

impl From<HttpError> for PageError {
    fn from(err: HttpError) -> Self {
        Self(err)
    }
}

impl From<CoreError> for PageError {
    fn from(err: CoreError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.0.status();
        if status.is_server_error() {
            tracing::warn!(status = status.as_u16(), error = %self.0, "page failed");
        }
        let markup = views::error_page(status, &self.0.message());
        (status, Html(markup.into_string())).into_response()
    }
}
