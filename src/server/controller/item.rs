use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        comment::{CommentDto, CreateCommentDto},
        item::{CreateItemDto, ItemDto, UpdateItemDto},
    },
    server::{
        error::AppError,
        middleware::{
            extract::{AppJson, AppPath, AppQuery},
            sharer::SharerUserId,
        },
        model::{
            comment::CreateCommentParams,
            item::{CreateItemParams, Item, UpdateItemParams},
        },
        service::item::ItemService,
        state::AppState,
        util::pagination::{Page, PaginationParams},
    },
};

/// Tag for grouping item endpoints in OpenAPI documentation
pub static ITEM_TAG: &str = "item";

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub from: Option<i64>,
    #[serde(default)]
    pub size: Option<i64>,
}

impl SearchParams {
    fn page(&self) -> Result<Page, AppError> {
        let defaults = PaginationParams::default();
        Page::new(
            self.from.unwrap_or(defaults.from),
            self.size.unwrap_or(defaults.size),
        )
    }
}

fn into_dtos(items: Vec<Item>) -> Vec<ItemDto> {
    items.into_iter().map(Item::into_dto).collect()
}

/// List a new item owned by the caller.
///
/// # Returns
/// - `200 OK` - The created item
/// - `400 Bad Request` - Missing header, blank name, missing description or availability
/// - `404 Not Found` - Caller or referenced item request not found
#[utoipa::path(
    post,
    path = "/items",
    tag = ITEM_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID")
    ),
    request_body = CreateItemDto,
    responses(
        (status = 200, description = "Successfully created item", body = ItemDto),
        (status = 400, description = "Invalid item data", body = ErrorDto),
        (status = 404, description = "User or item request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_item(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    AppJson(payload): AppJson<CreateItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ItemService::new(&state.db);

    let item = service
        .create(CreateItemParams::from_dto(user_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// List the caller's items with their last/next bookings and comments.
#[utoipa::path(
    get,
    path = "/items",
    tag = ITEM_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID"),
        ("from" = Option<i64>, Query, description = "Index of the first element (default: 0)"),
        ("size" = Option<i64>, Query, description = "Page size (default: 10)")
    ),
    responses(
        (status = 200, description = "The caller's items", body = Vec<ItemDto>),
        (status = 400, description = "Invalid pagination or header", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_items(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    AppQuery(params): AppQuery<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = Page::try_from(params)?;
    let service = ItemService::new(&state.db);

    let items = service.get_by_owner(user_id, page).await?;

    Ok((StatusCode::OK, Json(into_dtos(items))))
}

/// Get an item. Last/next bookings are only included for the owner.
#[utoipa::path(
    get,
    path = "/items/{item_id}",
    tag = ITEM_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID"),
        ("item_id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "The item", body = ItemDto),
        (status = 404, description = "User or item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_item(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    AppPath(item_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ItemService::new(&state.db);

    let item = service.get(user_id, item_id).await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// Update an item owned by the caller.
#[utoipa::path(
    patch,
    path = "/items/{item_id}",
    tag = ITEM_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID"),
        ("item_id" = i32, Path, description = "Item ID")
    ),
    request_body = UpdateItemDto,
    responses(
        (status = 200, description = "Successfully updated item", body = ItemDto),
        (status = 400, description = "Invalid item data", body = ErrorDto),
        (status = 404, description = "User or item not found, or caller is not the owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_item(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    AppPath(item_id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ItemService::new(&state.db);

    let item = service
        .update(UpdateItemParams::from_dto(user_id, item_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// Delete an item owned by the caller.
#[utoipa::path(
    delete,
    path = "/items/{item_id}",
    tag = ITEM_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID"),
        ("item_id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted item"),
        (status = 404, description = "User or item not found, or caller is not the owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_item(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    AppPath(item_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ItemService::new(&state.db);

    service.delete(user_id, item_id).await?;

    Ok(StatusCode::OK)
}

/// Search available items by name or description.
///
/// Blank text returns an empty list.
#[utoipa::path(
    get,
    path = "/items/search",
    tag = ITEM_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID"),
        ("text" = Option<String>, Query, description = "Text to look for, case-insensitive"),
        ("from" = Option<i64>, Query, description = "Index of the first element (default: 0)"),
        ("size" = Option<i64>, Query, description = "Page size (default: 10)")
    ),
    responses(
        (status = 200, description = "Matching available items", body = Vec<ItemDto>),
        (status = 400, description = "Invalid pagination or header", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_items(
    State(state): State<AppState>,
    SharerUserId(_user_id): SharerUserId,
    AppQuery(params): AppQuery<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = params.page()?;
    let service = ItemService::new(&state.db);

    let items = service.search(&params.text, page).await?;

    Ok((StatusCode::OK, Json(into_dtos(items))))
}

/// Comment on an item after a finished approved booking.
#[utoipa::path(
    post,
    path = "/items/{item_id}/comment",
    tag = ITEM_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID"),
        ("item_id" = i32, Path, description = "Item ID")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 200, description = "Successfully created comment", body = CommentDto),
        (status = 400, description = "Blank text or no finished booking", body = ErrorDto),
        (status = 404, description = "User or item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    AppPath(item_id): AppPath<i32>,
    AppJson(payload): AppJson<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ItemService::new(&state.db);

    let comment = service
        .add_comment(CreateCommentParams::from_dto(user_id, item_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(comment.into_dto())))
}
