//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::config::ConfigError};

/// Top-level application error type.
///
/// Business rule violations carry their own message, which is returned to the
/// client in the `{"error": ...}` body. Infrastructure failures are logged in full
/// and answered with a generic message.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// A request field is missing or violates a business rule.
    ///
    /// Results in 400 Bad Request.
    #[error("{0}")]
    Validation(String),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// The caller exists but is not allowed to act on the resource.
    ///
    /// Reported as 404 Not Found so that callers cannot probe for resources
    /// they have no access to.
    #[error("{0}")]
    NoRights(String),

    /// Another user already registered the email address.
    ///
    /// Results in 409 Conflict.
    #[error("{0}")]
    DuplicateEmail(String),

    /// The booking state filter is not one of the known states.
    ///
    /// Results in 400 Bad Request with message `Unknown state: <value>`.
    #[error("{0}")]
    UnsupportedState(String),

    /// Malformed header or query parameter.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// HTTP status code the error is rendered with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::UnsupportedState(_) | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound(_) | Self::NoRights(_) => StatusCode::NOT_FOUND,
            Self::DuplicateEmail(_) => StatusCode::CONFLICT,
            Self::ConfigErr(_) | Self::DbErr(_) | Self::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

/// Converts application errors into HTTP responses.
///
/// Client errors are logged at warn level and echo their message. Everything else
/// goes through `InternalServerError`, which logs the details and hides them from
/// the client.
///
/// # Returns
/// - 400 Bad Request - For `Validation`, `UnsupportedState` and `BadRequest`
/// - 404 Not Found - For `NotFound` and `NoRights`
/// - 409 Conflict - For `DuplicateEmail`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            return InternalServerError(self).into_response();
        }

        tracing::warn!("{}: {}", status, self);

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
