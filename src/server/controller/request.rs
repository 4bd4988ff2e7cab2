use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        request::{CreateItemRequestDto, ItemRequestDto},
    },
    server::{
        error::AppError,
        middleware::{
            extract::{AppJson, AppPath, AppQuery},
            sharer::SharerUserId,
        },
        model::request::{CreateItemRequestParams, ItemRequest},
        service::request::ItemRequestService,
        state::AppState,
        util::pagination::{Page, PaginationParams},
    },
};

/// Tag for grouping item request endpoints in OpenAPI documentation
pub static REQUEST_TAG: &str = "request";

fn into_dtos(requests: Vec<ItemRequest>) -> Vec<ItemRequestDto> {
    requests.into_iter().map(ItemRequest::into_dto).collect()
}

/// Post a request for an item nobody lists yet.
#[utoipa::path(
    post,
    path = "/requests",
    tag = REQUEST_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID")
    ),
    request_body = CreateItemRequestDto,
    responses(
        (status = 200, description = "Successfully created item request", body = ItemRequestDto),
        (status = 400, description = "Blank description", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_request(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    AppJson(payload): AppJson<CreateItemRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ItemRequestService::new(&state.db);

    let request = service
        .create(CreateItemRequestParams::from_dto(user_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}

/// List the caller's own requests, newest first.
#[utoipa::path(
    get,
    path = "/requests",
    tag = REQUEST_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID")
    ),
    responses(
        (status = 200, description = "The caller's item requests", body = Vec<ItemRequestDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_own_requests(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
) -> Result<impl IntoResponse, AppError> {
    let service = ItemRequestService::new(&state.db);

    let requests = service.get_own(user_id).await?;

    Ok((StatusCode::OK, Json(into_dtos(requests))))
}

/// List other users' requests, newest first.
#[utoipa::path(
    get,
    path = "/requests/all",
    tag = REQUEST_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID"),
        ("from" = Option<i64>, Query, description = "Index of the first element (default: 0)"),
        ("size" = Option<i64>, Query, description = "Page size (default: 10)")
    ),
    responses(
        (status = 200, description = "Other users' item requests", body = Vec<ItemRequestDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_requests(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    AppQuery(params): AppQuery<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = Page::try_from(params)?;
    let service = ItemRequestService::new(&state.db);

    let requests = service.get_others(user_id, page).await?;

    Ok((StatusCode::OK, Json(into_dtos(requests))))
}

/// Get an item request with the items answering it.
#[utoipa::path(
    get,
    path = "/requests/{request_id}",
    tag = REQUEST_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID"),
        ("request_id" = i32, Path, description = "Item request ID")
    ),
    responses(
        (status = 200, description = "The item request", body = ItemRequestDto),
        (status = 404, description = "User or item request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_request(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    AppPath(request_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ItemRequestService::new(&state.db);

    let request = service.get(user_id, request_id).await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}
