use axum::{extract::FromRequestParts, http::request::Parts};

use crate::server::error::AppError;

/// Header carrying the id of the calling user.
pub const SHARER_USER_ID_HEADER: &str = "X-Sharer-User-Id";

/// Id of the calling user, taken from the `X-Sharer-User-Id` header.
///
/// Extraction only checks that the header is present and numeric. Whether the
/// user exists is decided by the service that handles the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharerUserId(pub i32);

impl<S> FromRequestParts<S> for SharerUserId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(SHARER_USER_ID_HEADER) else {
            return Err(AppError::BadRequest(format!(
                "Missing required header {}",
                SHARER_USER_ID_HEADER
            )));
        };

        value
            .to_str()
            .ok()
            .and_then(|v| v.trim().parse::<i32>().ok())
            .map(SharerUserId)
            .ok_or_else(|| {
                AppError::BadRequest(format!(
                    "Header {} must be a numeric user id",
                    SHARER_USER_ID_HEADER
                ))
            })
    }
}
