use axum::{extract::State, http::Method};
use validator::Validate;

use crate::{
    client::{ShareItClient, Upstream},
    dto::{
        item::{CreateCommentDto, CreateItemDto, SearchParams, UpdateItemDto},
        page::PageParams,
    },
    error::GatewayError,
    middleware::{AppJson, AppPath, AppQuery, SharerUserId},
    state::AppState,
};

pub async fn create_item(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    AppJson(payload): AppJson<CreateItemDto>,
) -> Result<Upstream, GatewayError> {
    payload.validate()?;

    tracing::info!("Creating item {:?} for user {}", payload.name, user_id);

    let request = state
        .client
        .request(Method::POST, "/items", Some(user_id))?
        .json(&payload);

    ShareItClient::send(request).await
}

pub async fn get_items(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    AppQuery(params): AppQuery<PageParams>,
) -> Result<Upstream, GatewayError> {
    params.validate()?;

    let request = state
        .client
        .request(Method::GET, "/items", Some(user_id))?
        .query(&params);

    ShareItClient::send(request).await
}

pub async fn get_item(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    AppPath(item_id): AppPath<i32>,
) -> Result<Upstream, GatewayError> {
    let request =
        state
            .client
            .request(Method::GET, &format!("/items/{}", item_id), Some(user_id))?;

    ShareItClient::send(request).await
}

pub async fn update_item(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    AppPath(item_id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateItemDto>,
) -> Result<Upstream, GatewayError> {
    payload.validate()?;

    tracing::info!("Updating item {} for user {}", item_id, user_id);

    let request = state
        .client
        .request(Method::PATCH, &format!("/items/{}", item_id), Some(user_id))?
        .json(&payload);

    ShareItClient::send(request).await
}

pub async fn delete_item(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    AppPath(item_id): AppPath<i32>,
) -> Result<Upstream, GatewayError> {
    tracing::info!("Deleting item {} for user {}", item_id, user_id);

    let request = state.client.request(
        Method::DELETE,
        &format!("/items/{}", item_id),
        Some(user_id),
    )?;

    ShareItClient::send(request).await
}

pub async fn search_items(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    AppQuery(params): AppQuery<SearchParams>,
) -> Result<Upstream, GatewayError> {
    params.validate()?;

    let request = state
        .client
        .request(Method::GET, "/items/search", Some(user_id))?
        .query(&params);

    ShareItClient::send(request).await
}

pub async fn add_comment(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    AppPath(item_id): AppPath<i32>,
    AppJson(payload): AppJson<CreateCommentDto>,
) -> Result<Upstream, GatewayError> {
    payload.validate()?;

    tracing::info!("User {} commenting on item {}", user_id, item_id);

    let request = state
        .client
        .request(
            Method::POST,
            &format!("/items/{}/comment", item_id),
            Some(user_id),
        )?
        .json(&payload);

    ShareItClient::send(request).await
}
