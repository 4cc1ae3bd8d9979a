//! HTTP-facing error type of the quote server.
//!
//! Every variant is rendered as `{"error": "<text>"}` with a matching status.
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;
use quote_common::QuoteError;
use quote_common::quote::ErrorBody;
use thiserror::Error;

/// Request failure returned by handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// 400 - invalid or incomplete request body.
    #[error("{0}")]
    BadRequest(String),

    /// 404 - nothing to return.
    #[error("{0}")]
    NotFound(String),

    /// 500 - storage failure.
    #[error("{0}")]
    Internal(#[from] QuoteError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(e) => {
                error!("Internal error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
