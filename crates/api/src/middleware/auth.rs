//! Shared-secret token extractor for mutating handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use catalog_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Name of the header carrying the shared secret.
pub const TOKEN_HEADER: &str = "token";

/// Proof that the request carried the configured API key in its `token`
/// header.
///
/// Put it first in a handler's argument list so the request is rejected
/// before the body is read:
///
/// ```ignore
/// async fn create(_token: RequireToken, State(state): State<AppState>) -> AppResult<()> {
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RequireToken;

impl FromRequestParts<AppState> for RequireToken {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let expected = state.config.api_key.as_deref();
        let provided = parts
            .headers
            .get(TOKEN_HEADER)
            .and_then(|v| v.to_str().ok());

        match (expected, provided) {
            (Some(expected), Some(provided)) if expected == provided => Ok(RequireToken),
            _ => {
                tracing::warn!(
                    method = %parts.method,
                    path = %parts.uri.path(),
                    "Rejected request with invalid token"
                );
                Err(AppError::Core(CoreError::Unauthorized))
            }
        }
    }
}
