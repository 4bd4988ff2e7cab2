use axum::{extract::State, http::Method};
use validator::Validate;

use crate::{
    client::{ShareItClient, Upstream},
    dto::booking::{ApproveParams, BookingListParams, BookingState, CreateBookingDto},
    error::GatewayError,
    middleware::{AppJson, AppPath, AppQuery, SharerUserId},
    state::AppState,
};

/// Validates a booking request before forwarding it.
///
/// Missing fields and an end not after the start are rejected here with 400.
/// Availability, ownership and the future-period rule are left to the server.
pub async fn create_booking(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    AppJson(payload): AppJson<CreateBookingDto>,
) -> Result<Upstream, GatewayError> {
    payload.validate()?;

    tracing::info!(
        "Creating booking of item {:?}, userId={}",
        payload.item_id,
        user_id
    );

    let request = state
        .client
        .request(Method::POST, "/bookings", Some(user_id))?
        .json(&payload);

    ShareItClient::send(request).await
}

pub async fn approve_booking(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    AppPath(booking_id): AppPath<i32>,
    AppQuery(params): AppQuery<ApproveParams>,
) -> Result<Upstream, GatewayError> {
    tracing::info!(
        "Approve booking {}, userId={}, approved={}",
        booking_id,
        user_id,
        params.approved
    );

    let request = state
        .client
        .request(
            Method::PATCH,
            &format!("/bookings/{}", booking_id),
            Some(user_id),
        )?
        .query(&params);

    ShareItClient::send(request).await
}

pub async fn get_booking(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    AppPath(booking_id): AppPath<i32>,
) -> Result<Upstream, GatewayError> {
    let request = state.client.request(
        Method::GET,
        &format!("/bookings/{}", booking_id),
        Some(user_id),
    )?;

    ShareItClient::send(request).await
}

pub async fn get_booker_bookings(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    AppQuery(params): AppQuery<BookingListParams>,
) -> Result<Upstream, GatewayError> {
    list_bookings(&state, "/bookings", user_id, params).await
}

pub async fn get_owner_bookings(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    AppQuery(params): AppQuery<BookingListParams>,
) -> Result<Upstream, GatewayError> {
    list_bookings(&state, "/bookings/owner", user_id, params).await
}

async fn list_bookings(
    state: &AppState,
    path: &str,
    user_id: i32,
    params: BookingListParams,
) -> Result<Upstream, GatewayError> {
    BookingState::parse(&params.state)?;
    params.validate()?;

    tracing::info!(
        "Get bookings with state {}, userId={}, from={}, size={}",
        params.state,
        user_id,
        params.from,
        params.size
    );

    let request = state
        .client
        .request(Method::GET, path, Some(user_id))?
        .query(&params);

    ShareItClient::send(request).await
}
