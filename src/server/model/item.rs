//! Item domain models and parameters.

use chrono::NaiveDateTime;

use crate::{
    model::item::{CreateItemDto, ItemBookingDto, ItemDto, UpdateItemDto},
    server::model::comment::Comment,
};

/// Booking summary shown to an item's owner as the last or next booking.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemBooking {
    pub id: i32,
    pub booker_id: i32,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl ItemBooking {
    pub fn from_entity(entity: entity::booking::Model) -> Self {
        Self {
            id: entity.id,
            booker_id: entity.booker_id,
            start: entity.start,
            end: entity.end,
        }
    }

    pub fn into_dto(self) -> ItemBookingDto {
        ItemBookingDto {
            id: self.id,
            booker_id: self.booker_id,
            start: self.start,
            end: self.end,
        }
    }
}

/// Item with the details attached for the caller.
///
/// `last_booking` and `next_booking` are only filled in for the item's owner.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: i32,
    pub request_id: Option<i32>,
    pub last_booking: Option<ItemBooking>,
    pub next_booking: Option<ItemBooking>,
    pub comments: Vec<Comment>,
}

impl Item {
    /// Converts an entity model to an item without bookings or comments.
    pub fn from_entity(entity: entity::item::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            available: entity.available,
            owner_id: entity.owner_id,
            request_id: entity.request_id,
            last_booking: None,
            next_booking: None,
            comments: Vec::new(),
        }
    }

    pub fn into_dto(self) -> ItemDto {
        ItemDto {
            id: self.id,
            name: self.name,
            description: self.description,
            available: self.available,
            owner_id: self.owner_id,
            request_id: self.request_id,
            last_booking: self.last_booking.map(ItemBooking::into_dto),
            next_booking: self.next_booking.map(ItemBooking::into_dto),
            comments: self.comments.into_iter().map(Comment::into_dto).collect(),
        }
    }
}

/// Parameters for listing a new item.
#[derive(Debug, Clone)]
pub struct CreateItemParams {
    pub owner_id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
    pub request_id: Option<i32>,
}

impl CreateItemParams {
    pub fn from_dto(owner_id: i32, dto: CreateItemDto) -> Self {
        Self {
            owner_id,
            name: dto.name,
            description: dto.description,
            available: dto.available,
            request_id: dto.request_id,
        }
    }
}

/// Validated item ready to be stored.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub owner_id: i32,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub request_id: Option<i32>,
}

/// Parameters for a partial item update. `None` leaves the field unchanged.
#[derive(Debug, Clone)]
pub struct UpdateItemParams {
    pub caller_id: i32,
    pub item_id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
}

impl UpdateItemParams {
    pub fn from_dto(caller_id: i32, item_id: i32, dto: UpdateItemDto) -> Self {
        Self {
            caller_id,
            item_id,
            name: dto.name,
            description: dto.description,
            available: dto.available,
        }
    }
}
