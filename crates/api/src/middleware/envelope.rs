//! Envelope for responses produced outside the handlers.
//!
//! The timeout and panic layers answer on their own, with an empty body.
//! These hooks give those answers the same `{code, body, error}` shape as
//! everything else.

use std::any::Any;

use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::response::Envelope;

/// Wrap a bodiless error response (for example the timeout layer's 408) in
/// the envelope. Responses that already carry a content type pass through.
pub async fn envelope_bare_errors(response: Response) -> Response {
    let status = response.status();
    let is_error = status.is_client_error() || status.is_server_error();
    if !is_error || response.headers().contains_key(CONTENT_TYPE) {
        return response;
    }

    let message = status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_lowercase();
    Envelope::error(status, message).into_response()
}

/// Panic handler for `CatchPanicLayer::custom`.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    tracing::error!(panic = detail, "Handler panicked");

    Envelope::error(StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
}
