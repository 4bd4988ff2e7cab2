use axum::{extract::State, http::Method};
use validator::Validate;

use crate::{
    client::{ShareItClient, Upstream},
    dto::user::{CreateUserDto, UpdateUserDto},
    error::GatewayError,
    middleware::{AppJson, AppPath},
    state::AppState,
};

pub async fn create_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateUserDto>,
) -> Result<Upstream, GatewayError> {
    payload.validate()?;

    tracing::info!("Creating user {:?}", payload.email);

    let request = state
        .client
        .request(Method::POST, "/users", None)?
        .json(&payload);

    ShareItClient::send(request).await
}

pub async fn get_users(State(state): State<AppState>) -> Result<Upstream, GatewayError> {
    let request = state.client.request(Method::GET, "/users", None)?;

    ShareItClient::send(request).await
}

pub async fn get_user(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<i32>,
) -> Result<Upstream, GatewayError> {
    let request = state
        .client
        .request(Method::GET, &format!("/users/{}", user_id), None)?;

    ShareItClient::send(request).await
}

pub async fn update_user(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateUserDto>,
) -> Result<Upstream, GatewayError> {
    payload.validate()?;

    tracing::info!("Updating user {}", user_id);

    let request = state
        .client
        .request(Method::PATCH, &format!("/users/{}", user_id), None)?
        .json(&payload);

    ShareItClient::send(request).await
}

pub async fn delete_user(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<i32>,
) -> Result<Upstream, GatewayError> {
    tracing::info!("Deleting user {}", user_id);

    let request = state
        .client
        .request(Method::DELETE, &format!("/users/{}", user_id), None)?;

    ShareItClient::send(request).await
}
