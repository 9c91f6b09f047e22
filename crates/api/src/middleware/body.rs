//! JSON request bodies decoded whatever the `content-type` header says.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Extractor that reads the whole body and decodes it as JSON.
///
/// Unlike `axum::Json` it does not require `content-type:
/// application/json`, so plain `curl -d '{...}'` clients are accepted. Any
/// read or decode failure is an [`AppError`] answered with
/// `invalid request body`.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        let value = serde_json::from_slice(&bytes)?;
        Ok(Self(value))
    }
}
