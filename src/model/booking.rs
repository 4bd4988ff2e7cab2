use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookerDto {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookedItemDto {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: i32,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// One of `WAITING`, `APPROVED`, `REJECTED`, `CANCELED`.
    pub status: String,
    pub booker: BookerDto,
    pub item: BookedItemDto,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingDto {
    pub item_id: Option<i32>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}
