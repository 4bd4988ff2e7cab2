use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    model::{
        api::ErrorDto,
        booking::{BookedItemDto, BookerDto, BookingDto, CreateBookingDto},
        comment::{CommentDto, CreateCommentDto},
        item::{CreateItemDto, ItemBookingDto, ItemDto, UpdateItemDto},
        request::{CreateItemRequestDto, ItemRequestDto, RequestedItemDto},
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        controller::{
            booking::{
                self, approve_booking, create_booking, get_booking, get_bookings,
                get_owner_bookings,
            },
            item::{
                self, create_comment, create_item, delete_item, get_item, get_items,
                search_items, update_item,
            },
            request::{
                self, create_request, get_all_requests, get_own_requests, get_request,
            },
            user::{self, create_user, delete_user, get_user, get_users, update_user},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "ShareIt", description = "Item sharing API"),
    paths(
        user::create_user,
        user::get_users,
        user::get_user,
        user::update_user,
        user::delete_user,
        item::create_item,
        item::get_items,
        item::get_item,
        item::update_item,
        item::delete_item,
        item::search_items,
        item::create_comment,
        booking::create_booking,
        booking::approve_booking,
        booking::get_booking,
        booking::get_bookings,
        booking::get_owner_bookings,
        request::create_request,
        request::get_own_requests,
        request::get_all_requests,
        request::get_request,
    ),
    components(schemas(
        ErrorDto,
        UserDto,
        CreateUserDto,
        UpdateUserDto,
        ItemDto,
        ItemBookingDto,
        CreateItemDto,
        UpdateItemDto,
        CommentDto,
        CreateCommentDto,
        BookingDto,
        BookerDto,
        BookedItemDto,
        CreateBookingDto,
        ItemRequestDto,
        RequestedItemDto,
        CreateItemRequestDto,
    )),
    tags(
        (name = "user", description = "User registration and profile"),
        (name = "item", description = "Items, search and comments"),
        (name = "booking", description = "Bookings and their approval"),
        (name = "request", description = "Requests for items nobody lists yet")
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user).get(get_users))
        .route(
            "/users/{user_id}",
            get(get_user).patch(update_user).delete(delete_user),
        )
        .route("/items", post(create_item).get(get_items))
        .route("/items/search", get(search_items))
        .route(
            "/items/{item_id}",
            get(get_item).patch(update_item).delete(delete_item),
        )
        .route("/items/{item_id}/comment", post(create_comment))
        .route("/bookings", post(create_booking).get(get_bookings))
        .route("/bookings/owner", get(get_owner_bookings))
        .route(
            "/bookings/{booking_id}",
            get(get_booking).patch(approve_booking),
        )
        .route("/requests", post(create_request).get(get_own_requests))
        .route("/requests/all", get(get_all_requests))
        .route("/requests/{request_id}", get(get_request))
        .route("/api-docs/openapi.json", get(openapi_json))
}
