use axum::{extract::State, http::Method};
use validator::Validate;

use crate::{
    client::{ShareItClient, Upstream},
    dto::{page::PageParams, request::CreateItemRequestDto},
    error::GatewayError,
    middleware::{AppJson, AppPath, AppQuery, SharerUserId},
    state::AppState,
};

pub async fn create_request(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    AppJson(payload): AppJson<CreateItemRequestDto>,
) -> Result<Upstream, GatewayError> {
    payload.validate()?;

    tracing::info!("Creating item request for user {}", user_id);

    let request = state
        .client
        .request(Method::POST, "/requests", Some(user_id))?
        .json(&payload);

    ShareItClient::send(request).await
}

pub async fn get_own_requests(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
) -> Result<Upstream, GatewayError> {
    let request = state
        .client
        .request(Method::GET, "/requests", Some(user_id))?;

    ShareItClient::send(request).await
}

pub async fn get_other_requests(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    AppQuery(params): AppQuery<PageParams>,
) -> Result<Upstream, GatewayError> {
    params.validate()?;

    let request = state
        .client
        .request(Method::GET, "/requests/all", Some(user_id))?
        .query(&params);

    ShareItClient::send(request).await
}

pub async fn get_request(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    AppPath(request_id): AppPath<i32>,
) -> Result<Upstream, GatewayError> {
    let request = state.client.request(
        Method::GET,
        &format!("/requests/{}", request_id),
        Some(user_id),
    )?;

    ShareItClient::send(request).await
}
