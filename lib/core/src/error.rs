use axum::http::StatusCode;
use thiserror::Error;

// ── ServiceError ────────────────────────────────────────────────────

/// Unified request-boundary error type.
///
/// Every failure a render request can hit maps to one of these kinds.
/// Handlers never surface the raw fault: each kind is converted into a
/// rendered error document at the API boundary, with `status_code()`
/// supplying the HTTP status. Display strings are user-facing and end
/// up inside the document, so they stay short and in product language.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Required caller input absent or empty. HTTP 400.
    #[error("{0}")]
    MissingParam(String),

    /// Upstream fetch failed at the network layer. The transport detail
    /// is kept for logging; the display message stays generic. HTTP 500.
    #[error("API地址无法访问")]
    Unreachable(String),

    /// Upstream fetch exceeded its deadline. HTTP 500.
    #[error("API请求超时")]
    Timeout,

    /// Upstream answered with a non-success status. HTTP 500.
    #[error("API返回错误: {0}")]
    BadStatus(u16),

    /// Upstream body parsed but is not the expected shape. HTTP 500.
    #[error("{0}")]
    BadPayload(String),
}

impl ServiceError {
    /// HTTP status code for this error.
    ///
    /// Caller-input problems are 400; everything upstream is 500, the
    /// failure happened while producing the response body.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::MissingParam(_) => StatusCode::BAD_REQUEST,
            ServiceError::Unreachable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServiceError::Timeout => StatusCode::INTERNAL_SERVER_ERROR,
            ServiceError::BadStatus(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServiceError::BadPayload(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
