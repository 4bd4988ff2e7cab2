//! Item request domain models and parameters.

use chrono::NaiveDateTime;

use crate::model::request::{CreateItemRequestDto, ItemRequestDto, RequestedItemDto};

/// Item listed in answer to a request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestedItem {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: i32,
    pub request_id: i32,
}

impl RequestedItem {
    /// Converts an item entity linked to `request_id`.
    pub fn from_entity(entity: entity::item::Model, request_id: i32) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            available: entity.available,
            owner_id: entity.owner_id,
            request_id,
        }
    }

    pub fn into_dto(self) -> RequestedItemDto {
        RequestedItemDto {
            id: self.id,
            name: self.name,
            description: self.description,
            available: self.available,
            owner_id: self.owner_id,
            request_id: self.request_id,
        }
    }
}

/// A user's request for an item nobody lists yet, with the items that answer it.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRequest {
    pub id: i32,
    pub description: String,
    pub requestor_id: i32,
    pub created: NaiveDateTime,
    pub items: Vec<RequestedItem>,
}

impl ItemRequest {
    pub fn from_entity(entity: entity::item_request::Model, items: Vec<entity::item::Model>) -> Self {
        let id = entity.id;

        Self {
            id,
            description: entity.description,
            requestor_id: entity.requestor_id,
            created: entity.created,
            items: items
                .into_iter()
                .map(|item| RequestedItem::from_entity(item, id))
                .collect(),
        }
    }

    pub fn into_dto(self) -> ItemRequestDto {
        ItemRequestDto {
            id: self.id,
            description: self.description,
            requestor_id: self.requestor_id,
            created: self.created,
            items: self
                .items
                .into_iter()
                .map(RequestedItem::into_dto)
                .collect(),
        }
    }
}

/// Parameters for posting an item request.
#[derive(Debug, Clone)]
pub struct CreateItemRequestParams {
    pub requestor_id: i32,
    pub description: Option<String>,
}

impl CreateItemRequestParams {
    pub fn from_dto(requestor_id: i32, dto: CreateItemRequestDto) -> Self {
        Self {
            requestor_id,
            description: dto.description,
        }
    }
}
