//! Body, query and path extractors whose rejections are `AppError::BadRequest`,
//! so malformed input gets a 400 with the usual `{"error": ...}` body.

use axum::extract::{FromRequest, FromRequestParts};

use crate::server::error::AppError;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
