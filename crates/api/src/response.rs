//! Uniform response envelope.
//!
//! Every response, success or failure, is `{ "code", "body", "error" }`:
//! `code` repeats the HTTP status, `body` carries the payload (or `null`),
//! and `error` is empty on success.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub code: u16,
    pub body: Option<T>,
    pub error: String,
}

impl<T: Serialize> Envelope<T> {
    /// 200 with `body`.
    pub fn ok(body: T) -> Self {
        Self::with_status(StatusCode::OK, body)
    }

    /// 201 with `body`.
    pub fn created(body: T) -> Self {
        Self::with_status(StatusCode::CREATED, body)
    }

    pub fn with_status(status: StatusCode, body: T) -> Self {
        Self {
            code: status.as_u16(),
            body: Some(body),
            error: String::new(),
        }
    }
}

impl Envelope<()> {
    /// 204 with a `null` body.
    pub fn no_content() -> Self {
        Self {
            code: StatusCode::NO_CONTENT.as_u16(),
            body: None,
            error: String::new(),
        }
    }

    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            body: None,
            error: message.into(),
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
