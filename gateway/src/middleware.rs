use axum::{
    extract::{FromRequest, FromRequestParts},
    http::request::Parts,
};

use crate::error::GatewayError;

/// Header carrying the id of the calling user.
pub const SHARER_USER_ID_HEADER: &str = "X-Sharer-User-Id";

/// Id of the calling user, taken from the `X-Sharer-User-Id` header and
/// forwarded to the server unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharerUserId(pub i32);

impl<S> FromRequestParts<S> for SharerUserId
where
    S: Send + Sync,
{
    type Rejection = GatewayError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts.headers.get(SHARER_USER_ID_HEADER).ok_or_else(|| {
            GatewayError::BadRequest(format!(
                "Missing required header {}",
                SHARER_USER_ID_HEADER
            ))
        })?;

        value
            .to_str()
            .ok()
            .and_then(|v| v.trim().parse::<i32>().ok())
            .map(SharerUserId)
            .ok_or_else(|| {
                GatewayError::BadRequest(format!(
                    "Header {} must be a numeric user id",
                    SHARER_USER_ID_HEADER
                ))
            })
    }
}

/// JSON body whose rejection is a `GatewayError::BadRequest`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(GatewayError))]
pub struct AppJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(GatewayError))]
pub struct AppQuery<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(GatewayError))]
pub struct AppPath<T>(pub T);
