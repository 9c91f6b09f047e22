use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use catalog_core::error::CoreError;
use catalog_store::StoreError;

use crate::response::Envelope;

/// Message returned for any failure of the backing file.
pub const STORAGE_FAILURE: &str = "storage failure";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds storage and body-decoding
/// failures. Implements [`IntoResponse`] to produce the standard envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `catalog_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The backing file could not be read or written.
    #[error("Storage error: {0}")]
    Storage(StoreError),

    /// The request body could not be read.
    #[error("Unreadable request body: {0}")]
    BodyRead(#[from] BytesRejection),

    /// The request body was not valid JSON for the expected payload.
    #[error("Invalid request body: {0}")]
    Body(#[from] serde_json::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Core(core) => AppError::Core(core),
            other => AppError::Storage(other),
        }
    }
}

/// HTTP status for each domain error kind.
pub fn core_status(err: &CoreError) -> StatusCode {
    match err {
        CoreError::InvalidId
        | CoreError::InvalidQuery
        | CoreError::InvalidValues
        | CoreError::InvalidDate
        | CoreError::UniqueCodeValue
        | CoreError::InvalidRequestBody => StatusCode::BAD_REQUEST,
        CoreError::NotFound { .. } => StatusCode::NOT_FOUND,
        CoreError::Unauthorized => StatusCode::UNAUTHORIZED,
        CoreError::NoProducts | CoreError::AlreadyExists { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => {
                let status = core_status(core);
                if status.is_server_error() {
                    tracing::warn!(error = %core, "Catalog error");
                }
                (status, core.to_string())
            }
            AppError::Storage(err) => {
                tracing::error!(error = %err, "Storage error");
                (StatusCode::INTERNAL_SERVER_ERROR, STORAGE_FAILURE.to_string())
            }
            AppError::BodyRead(_) | AppError::Body(_) => {
                tracing::debug!(error = %self, "Rejected request body");
                (
                    StatusCode::BAD_REQUEST,
                    CoreError::InvalidRequestBody.to_string(),
                )
            }
        };

        Envelope::error(status, message).into_response()
    }
}
