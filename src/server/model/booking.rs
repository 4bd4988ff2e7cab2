//! Booking domain models and parameters.
//!
//! Bookings move through a small state machine: they are created as `Waiting`, and
//! the item owner turns them into `Approved` or `Rejected` exactly once. `Canceled`
//! is a recognised stored status that no operation currently produces.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use sea_orm::DbErr;

use crate::{
    model::booking::{BookedItemDto, BookerDto, BookingDto, CreateBookingDto},
    server::error::AppError,
};

/// Stored status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Waiting,
    Approved,
    Rejected,
    Canceled,
}

impl BookingStatus {
    /// Textual form stored in the `status` column and sent over the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "WAITING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::Canceled => "CANCELED",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = DbErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WAITING" => Ok(Self::Waiting),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            "CANCELED" => Ok(Self::Canceled),
            other => Err(DbErr::Custom(format!("Unknown booking status: {}", other))),
        }
    }
}

/// Filter applied when listing bookings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingState {
    All,
    /// Started and not yet ended.
    Current,
    /// Already ended.
    Past,
    /// Not yet started.
    Future,
    Waiting,
    Rejected,
}

impl BookingState {
    /// Parses a state name. Names are case-sensitive.
    ///
    /// # Returns
    /// - `Ok(BookingState)` - Known state
    /// - `Err(AppError::UnsupportedState)` - Message `Unknown state: <value>`
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "ALL" => Ok(Self::All),
            "CURRENT" => Ok(Self::Current),
            "PAST" => Ok(Self::Past),
            "FUTURE" => Ok(Self::Future),
            "WAITING" => Ok(Self::Waiting),
            "REJECTED" => Ok(Self::Rejected),
            other => Err(AppError::UnsupportedState(format!(
                "Unknown state: {}",
                other
            ))),
        }
    }
}

/// Booking together with the names of its item and booker.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub status: BookingStatus,
    pub item_id: i32,
    pub item_name: String,
    pub item_owner_id: i32,
    pub booker_id: i32,
    pub booker_name: String,
}

impl Booking {
    /// Converts a booking entity and its related rows at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Booking)` - Converted domain model
    /// - `Err(DbErr::Custom)` - Stored status is not a known value
    pub fn from_entity(
        entity: entity::booking::Model,
        item: entity::item::Model,
        booker: entity::user::Model,
    ) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            start: entity.start,
            end: entity.end,
            status: entity.status.parse()?,
            item_id: item.id,
            item_name: item.name,
            item_owner_id: item.owner_id,
            booker_id: booker.id,
            booker_name: booker.name,
        })
    }

    /// Whether `user_id` is the booker or the owner of the booked item.
    pub fn is_visible_to(&self, user_id: i32) -> bool {
        self.booker_id == user_id || self.item_owner_id == user_id
    }

    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            start: self.start,
            end: self.end,
            status: self.status.to_string(),
            booker: BookerDto {
                id: self.booker_id,
                name: self.booker_name,
            },
            item: BookedItemDto {
                id: self.item_id,
                name: self.item_name,
            },
        }
    }
}

/// Parameters for requesting a booking.
#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    pub booker_id: i32,
    pub item_id: Option<i32>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl CreateBookingParams {
    pub fn from_dto(booker_id: i32, dto: CreateBookingDto) -> Self {
        Self {
            booker_id,
            item_id: dto.item_id,
            start: dto.start,
            end: dto.end,
        }
    }
}

/// Validated booking ready to be stored with status `WAITING`.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub booker_id: i32,
    pub item_id: i32,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}
