//! Request guards and response hooks.
//!
//! - [`auth::RequireToken`] -- Requires the shared-secret `token` header.
//! - [`body::JsonBody`] -- Decodes JSON bodies regardless of content type.
//! - [`envelope`] -- Envelopes the timeout and panic responses.

pub mod auth;
pub mod body;
pub mod envelope;
