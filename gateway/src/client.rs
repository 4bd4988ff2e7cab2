//! HTTP client for the ShareIt server.
//!
//! The gateway never interprets server responses: whatever status and body the
//! server returns is handed back to the caller as is.

use axum::{
    body::Bytes,
    http::{header::CONTENT_TYPE, Method, StatusCode},
    response::{IntoResponse, Response},
};
use reqwest::RequestBuilder;
use url::Url;

use crate::{error::GatewayError, middleware::SHARER_USER_ID_HEADER};

#[derive(Clone)]
pub struct ShareItClient {
    http: reqwest::Client,
    base_url: Url,
}

/// Status and raw body of a server response.
#[derive(Debug)]
pub struct Upstream {
    pub status: StatusCode,
    pub body: Bytes,
}

impl ShareItClient {
    pub fn new(base_url: Url) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder().build()?;

        Ok(Self { http, base_url })
    }

    /// Starts a request to `path` on the server, acting as `user_id` when given.
    ///
    /// `path` is resolved against the server base URL, so it should be absolute
    /// (`/items/1`).
    pub fn request(
        &self,
        method: Method,
        path: &str,
        user_id: Option<i32>,
    ) -> Result<RequestBuilder, GatewayError> {
        let url = self.base_url.join(path).map_err(|e| {
            GatewayError::Internal(format!("Invalid upstream path {}: {}", path, e))
        })?;

        let mut builder = self.http.request(method, url);
        if let Some(user_id) = user_id {
            builder = builder.header(SHARER_USER_ID_HEADER, user_id.to_string());
        }

        Ok(builder)
    }

    /// Sends a prepared request and collects the response.
    ///
    /// # Returns
    /// - `Ok(Upstream)` - Any response the server produced, error statuses included
    /// - `Err(GatewayError::Upstream)` - The server could not be reached
    pub async fn send(builder: RequestBuilder) -> Result<Upstream, GatewayError> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        tracing::debug!("Upstream responded with {}", status);

        Ok(Upstream { status, body })
    }
}

impl IntoResponse for Upstream {
    fn into_response(self) -> Response {
        if self.body.is_empty() {
            return self.status.into_response();
        }

        (self.status, [(CONTENT_TYPE, "application/json")], self.body).into_response()
    }
}
