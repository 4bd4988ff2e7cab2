use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable is set but cannot be parsed.
    #[error("Invalid value for environment variable {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Request body or query parameters failed validation.
    ///
    /// Results in 400 Bad Request. The request never reaches the server.
    #[error("{0}")]
    Validation(String),

    /// The booking state filter is not one of the known states.
    #[error("{0}")]
    UnsupportedState(String),

    /// Malformed `X-Sharer-User-Id` header, body, query string or path.
    #[error("{0}")]
    BadRequest(String),

    /// The server could not be reached or its response could not be read.
    ///
    /// Results in 502 Bad Gateway.
    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("{0}")]
    Internal(String),
}

impl From<ValidationErrors> for GatewayError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl From<JsonRejection> for GatewayError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for GatewayError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for GatewayError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl GatewayError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::UnsupportedState(_) | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Config(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error body, same shape as the server's.
#[derive(Serialize)]
pub struct ErrorDto {
    pub error: String,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = if status.is_client_error() {
            tracing::warn!("{}: {}", status, self);
            self.to_string()
        } else {
            tracing::error!("{}: {}", status, self);
            status
                .canonical_reason()
                .unwrap_or("Internal server error")
                .to_string()
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
