//! Item request factory for creating test item request entities.

use crate::factory::helpers::{next_id, now};
use chrono::NaiveDateTime;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test item requests with customizable fields.
pub struct ItemRequestFactory<'a> {
    db: &'a DatabaseConnection,
    requestor_id: i32,
    description: String,
    created: NaiveDateTime,
}

impl<'a> ItemRequestFactory<'a> {
    /// Creates a new ItemRequestFactory with default values.
    ///
    /// Defaults:
    /// - description: `"Looking for item {id}"`
    /// - created: now
    pub fn new(db: &'a DatabaseConnection, requestor_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            requestor_id,
            description: format!("Looking for item {}", id),
            created: now(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn created(mut self, created: NaiveDateTime) -> Self {
        self.created = created;
        self
    }

    /// Builds and inserts the item request entity into the database.
    pub async fn build(self) -> Result<entity::item_request::Model, DbErr> {
        entity::item_request::ActiveModel {
            id: ActiveValue::NotSet,
            description: ActiveValue::Set(self.description),
            requestor_id: ActiveValue::Set(self.requestor_id),
            created: ActiveValue::Set(self.created),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an item request with default values for the given requestor.
pub async fn create_item_request(
    db: &DatabaseConnection,
    requestor_id: i32,
) -> Result<entity::item_request::Model, DbErr> {
    ItemRequestFactory::new(db, requestor_id).build().await
}
