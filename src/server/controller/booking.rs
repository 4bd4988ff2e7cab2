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
        booking::{BookingDto, CreateBookingDto},
    },
    server::{
        error::AppError,
        middleware::{
            extract::{AppJson, AppPath, AppQuery},
            sharer::SharerUserId,
        },
        model::booking::{Booking, CreateBookingParams},
        service::booking::BookingService,
        state::AppState,
        util::pagination::{Page, PaginationParams},
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

#[derive(Deserialize)]
pub struct BookingListParams {
    #[serde(default = "default_state")]
    pub state: String,
    #[serde(default)]
    pub from: Option<i64>,
    #[serde(default)]
    pub size: Option<i64>,
}

fn default_state() -> String {
    "ALL".to_string()
}

impl BookingListParams {
    fn page(&self) -> Result<Page, AppError> {
        let defaults = PaginationParams::default();
        Page::new(
            self.from.unwrap_or(defaults.from),
            self.size.unwrap_or(defaults.size),
        )
    }
}

#[derive(Deserialize)]
pub struct ApproveParams {
    pub approved: bool,
}

fn into_dtos(bookings: Vec<Booking>) -> Vec<BookingDto> {
    bookings.into_iter().map(Booking::into_dto).collect()
}

/// Request a booking of someone else's item.
///
/// # Returns
/// - `200 OK` - The booking with status `WAITING`
/// - `400 Bad Request` - Missing fields, item unavailable, or period not in the future
/// - `404 Not Found` - Caller or item not found, or caller owns the item
#[utoipa::path(
    post,
    path = "/bookings",
    tag = BOOKING_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID")
    ),
    request_body = CreateBookingDto,
    responses(
        (status = 200, description = "Successfully created booking", body = BookingDto),
        (status = 400, description = "Invalid booking data", body = ErrorDto),
        (status = 404, description = "User or item not found, or caller owns the item", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    AppJson(payload): AppJson<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db);

    let booking = service
        .create(CreateBookingParams::from_dto(user_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// Approve or reject a waiting booking of the caller's item.
#[utoipa::path(
    patch,
    path = "/bookings/{booking_id}",
    tag = BOOKING_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID"),
        ("booking_id" = i32, Path, description = "Booking ID"),
        ("approved" = bool, Query, description = "true to approve, false to reject")
    ),
    responses(
        (status = 200, description = "Booking with its new status", body = BookingDto),
        (status = 400, description = "Booking is not waiting", body = ErrorDto),
        (status = 404, description = "Booking not found or caller is not the owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_booking(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    AppPath(booking_id): AppPath<i32>,
    AppQuery(params): AppQuery<ApproveParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db);

    let booking = service
        .approve(user_id, booking_id, params.approved)
        .await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// Get a booking visible to the caller as booker or item owner.
#[utoipa::path(
    get,
    path = "/bookings/{booking_id}",
    tag = BOOKING_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID"),
        ("booking_id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "The booking", body = BookingDto),
        (status = 404, description = "Booking not found or not visible", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    AppPath(booking_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db);

    let booking = service.get(user_id, booking_id).await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// List the caller's bookings filtered by state, latest start first.
#[utoipa::path(
    get,
    path = "/bookings",
    tag = BOOKING_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID"),
        ("state" = Option<String>, Query, description = "ALL, CURRENT, PAST, FUTURE, WAITING or REJECTED (default: ALL)"),
        ("from" = Option<i64>, Query, description = "Index of the first element (default: 0)"),
        ("size" = Option<i64>, Query, description = "Page size (default: 10)")
    ),
    responses(
        (status = 200, description = "The caller's bookings", body = Vec<BookingDto>),
        (status = 400, description = "Unknown state or invalid pagination", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bookings(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    AppQuery(params): AppQuery<BookingListParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = params.page()?;
    let service = BookingService::new(&state.db);

    let bookings = service.get_by_booker(user_id, &params.state, page).await?;

    Ok((StatusCode::OK, Json(into_dtos(bookings))))
}

/// List bookings of the caller's items filtered by state, latest start first.
#[utoipa::path(
    get,
    path = "/bookings/owner",
    tag = BOOKING_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID"),
        ("state" = Option<String>, Query, description = "ALL, CURRENT, PAST, FUTURE, WAITING or REJECTED (default: ALL)"),
        ("from" = Option<i64>, Query, description = "Index of the first element (default: 0)"),
        ("size" = Option<i64>, Query, description = "Page size (default: 10)")
    ),
    responses(
        (status = 200, description = "Bookings of the caller's items", body = Vec<BookingDto>),
        (status = 400, description = "Unknown state or invalid pagination", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_owner_bookings(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    AppQuery(params): AppQuery<BookingListParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = params.page()?;
    let service = BookingService::new(&state.db);

    let bookings = service.get_by_owner(user_id, &params.state, page).await?;

    Ok((StatusCode::OK, Json(into_dtos(bookings))))
}
