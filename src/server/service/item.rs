//! Item service for business logic.
//!
//! Owners see the last and next approved bookings of their items. Everybody sees
//! the comments.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        booking::BookingRepository, comment::CommentRepository, item::ItemRepository,
        item_request::ItemRequestRepository,
    },
    error::AppError,
    model::{
        comment::{Comment, CreateCommentParams, NewComment},
        item::{CreateItemParams, Item, ItemBooking, NewItem, UpdateItemParams},
    },
    service::user::UserService,
    util::{
        pagination::Page,
        time::now,
        validation::{reject_blank, require_non_blank},
    },
};

pub struct ItemService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a new item owned by the caller
    ///
    /// # Returns
    /// - `Ok(Item)` - The created item
    /// - `Err(AppError::NotFound)` - Owner or referenced item request does not exist
    /// - `Err(AppError::Validation)` - Name blank, description or availability missing
    pub async fn create(&self, params: CreateItemParams) -> Result<Item, AppError> {
        let name = require_non_blank(params.name, "name")?;
        let description = params
            .description
            .ok_or_else(|| AppError::Validation("description is required".to_string()))?;
        let available = params
            .available
            .ok_or_else(|| AppError::Validation("available is required".to_string()))?;

        UserService::new(self.db).get(params.owner_id).await?;

        if let Some(request_id) = params.request_id {
            if ItemRequestRepository::new(self.db)
                .find_by_id(request_id)
                .await?
                .is_none()
            {
                return Err(AppError::NotFound(format!(
                    "Item request with id {} not found",
                    request_id
                )));
            }
        }

        let item = ItemRepository::new(self.db)
            .create(NewItem {
                owner_id: params.owner_id,
                name,
                description,
                available,
                request_id: params.request_id,
            })
            .await?;

        tracing::info!("User {} listed item {}", item.owner_id, item.id);

        Ok(Item::from_entity(item))
    }

    /// Gets an item with comments, and with last/next bookings if the caller owns it
    pub async fn get(&self, caller_id: i32, item_id: i32) -> Result<Item, AppError> {
        UserService::new(self.db).get(caller_id).await?;

        let item = self.find_item(item_id).await?;
        let is_owner = item.owner_id == caller_id;

        let mut items = self.enrich(vec![item], is_owner).await?;

        items
            .pop()
            .ok_or_else(|| AppError::InternalError(format!("Item {} lost while loading", item_id)))
    }

    /// Gets a page of the caller's items, each with bookings and comments
    pub async fn get_by_owner(&self, owner_id: i32, page: Page) -> Result<Vec<Item>, AppError> {
        UserService::new(self.db).get(owner_id).await?;

        let items = ItemRepository::new(self.db)
            .get_by_owner_paginated(owner_id, page.page, page.per_page)
            .await?;

        self.enrich(items, true).await
    }

    /// Updates an item owned by the caller
    ///
    /// # Returns
    /// - `Ok(Item)` - The updated item
    /// - `Err(AppError::NotFound)` - Caller or item missing, or the caller is not the owner
    /// - `Err(AppError::Validation)` - Name provided but blank
    pub async fn update(&self, params: UpdateItemParams) -> Result<Item, AppError> {
        reject_blank(&params.name, "name")?;

        UserService::new(self.db).get(params.caller_id).await?;

        let item = self.find_item(params.item_id).await?;
        if item.owner_id != params.caller_id {
            return Err(AppError::NotFound(format!(
                "Item with id {} does not belong to user {}",
                params.item_id, params.caller_id
            )));
        }

        let item = ItemRepository::new(self.db)
            .update(
                params.item_id,
                params.name,
                params.description,
                params.available,
            )
            .await?;

        tracing::info!("User {} updated item {}", params.caller_id, item.id);

        let mut items = self.enrich(vec![item], true).await?;

        items.pop().ok_or_else(|| {
            AppError::InternalError(format!("Item {} lost while loading", params.item_id))
        })
    }

    /// Deletes an item owned by the caller
    ///
    /// # Returns
    /// - `Ok(())` - Item deleted
    /// - `Err(AppError::NotFound)` - Caller or item missing
    /// - `Err(AppError::NoRights)` - Caller is not the owner
    pub async fn delete(&self, caller_id: i32, item_id: i32) -> Result<(), AppError> {
        UserService::new(self.db).get(caller_id).await?;

        let item = self.find_item(item_id).await?;
        if item.owner_id != caller_id {
            return Err(AppError::NoRights(format!(
                "User {} cannot delete item {}",
                caller_id, item_id
            )));
        }

        ItemRepository::new(self.db).delete(item_id).await?;

        tracing::info!("User {} deleted item {}", caller_id, item_id);

        Ok(())
    }

    /// Searches available items by name or description, ignoring case
    ///
    /// Blank text yields an empty list without touching the database. Matching
    /// folds case with Unicode rules on both backends (`ILIKE` on Postgres,
    /// `str::to_lowercase` on SQLite) and treats `%` and `_` as plain characters.
    pub async fn search(&self, text: &str, page: Page) -> Result<Vec<Item>, AppError> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let items = ItemRepository::new(self.db)
            .search_available(text, page.page, page.per_page)
            .await?;

        Ok(items.into_iter().map(Item::from_entity).collect())
    }

    /// Adds a comment from a user who has finished an approved booking of the item
    ///
    /// # Returns
    /// - `Ok(Comment)` - The stored comment
    /// - `Err(AppError::Validation)` - Text blank, or no finished approved booking
    /// - `Err(AppError::NotFound)` - Author or item missing
    pub async fn add_comment(&self, params: CreateCommentParams) -> Result<Comment, AppError> {
        let text = require_non_blank(params.text, "text")?;

        UserService::new(self.db).get(params.author_id).await?;
        self.find_item(params.item_id).await?;

        let now = now();
        let has_booked = BookingRepository::new(self.db)
            .has_finished_approved(params.author_id, params.item_id, now)
            .await?;
        if !has_booked {
            return Err(AppError::Validation(format!(
                "User {} has no finished booking of item {}",
                params.author_id, params.item_id
            )));
        }

        let comment = CommentRepository::new(self.db)
            .create(NewComment {
                author_id: params.author_id,
                item_id: params.item_id,
                text,
                created: now,
            })
            .await?;

        tracing::info!(
            "User {} commented on item {}",
            params.author_id,
            params.item_id
        );

        Ok(comment)
    }

    async fn find_item(&self, item_id: i32) -> Result<entity::item::Model, AppError> {
        ItemRepository::new(self.db)
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Item with id {} not found", item_id)))
    }

    /// Converts items to domain models with comments and, for owners, last/next bookings
    async fn enrich(
        &self,
        items: Vec<entity::item::Model>,
        with_bookings: bool,
    ) -> Result<Vec<Item>, AppError> {
        let item_ids: Vec<i32> = items.iter().map(|i| i.id).collect();

        let mut comments = CommentRepository::new(self.db)
            .get_by_item_ids(&item_ids)
            .await?;

        let mut bookings = if with_bookings {
            BookingRepository::new(self.db)
                .get_last_and_next(&item_ids, now())
                .await?
        } else {
            Default::default()
        };

        Ok(items
            .into_iter()
            .map(|entity| {
                let id = entity.id;
                let mut item = Item::from_entity(entity);
                item.comments = comments.remove(&id).unwrap_or_default();
                if let Some(last_and_next) = bookings.remove(&id) {
                    item.last_booking = last_and_next.last.map(ItemBooking::from_entity);
                    item.next_booking = last_and_next.next.map(ItemBooking::from_entity);
                }
                item
            })
            .collect())
    }
}
