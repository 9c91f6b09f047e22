//! Request handlers.
//!
//! Handlers decode the request, delegate to [`ProductService`] and wrap the
//! result in the response envelope; errors are mapped via [`AppError`].
//!
//! [`ProductService`]: crate::service::ProductService
//! [`AppError`]: crate::error::AppError

pub mod product;

use axum::http::StatusCode;

use crate::response::Envelope;

/// Fallback for unknown routes.
pub async fn not_found() -> Envelope<()> {
    Envelope::error(StatusCode::NOT_FOUND, "resource not found")
}

/// Fallback for a known path hit with a method it does not serve.
pub async fn method_not_allowed() -> Envelope<()> {
    Envelope::error(StatusCode::METHOD_NOT_ALLOWED, "method not allowed")
}
