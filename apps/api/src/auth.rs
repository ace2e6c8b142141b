//! Session gating. Sign-in itself belongs to the platform fronting this
//! API; it forwards its per-request verdict in a header, and endpoints that
//! list or read resumes reject the request before any store access happens.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::errors::AppError;

/// Header the fronting platform sets once sign-in completes.
pub const SESSION_HEADER: &str = "x-session-active";

/// Extractor asserting an active session. Rejects with `Unauthorized`.
pub struct ActiveSession;

#[async_trait]
impl<S> FromRequestParts<S> for ActiveSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let active = parts
            .headers
            .get(SESSION_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        if active {
            Ok(ActiveSession)
        } else {
            Err(AppError::Unauthorized)
        }
    }
}
