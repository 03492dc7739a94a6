use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Failure of a page or form handler. Every variant still produces a response.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("render error: {0}")]
    Render(#[from] minijinja::Error),
}

impl From<ServiceError> for PageError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) => PageError::Validation(msg),
            ServiceError::NotFound(msg) => PageError::NotFound(msg),
            ServiceError::Db(msg) => PageError::Storage(msg),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::Validation(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            PageError::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            PageError::Storage(msg) => {
                error!(error = %msg, "storage error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            }
            PageError::Render(e) => {
                error!(error = %e, "template render failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("template setup failed: {0}")]
    Views(#[from] minijinja::Error),
}
