use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct ItemRequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemRequestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        requestor_id: i32,
        description: String,
        created: NaiveDateTime,
    ) -> Result<entity::item_request::Model, DbErr> {
        entity::item_request::ActiveModel {
            description: ActiveValue::Set(description),
            requestor_id: ActiveValue::Set(requestor_id),
            created: ActiveValue::Set(created),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::item_request::Model>, DbErr> {
        entity::prelude::ItemRequest::find_by_id(id).one(self.db).await
    }

    /// Gets all requests posted by the user, newest first
    pub async fn get_by_requestor(
        &self,
        requestor_id: i32,
    ) -> Result<Vec<entity::item_request::Model>, DbErr> {
        entity::prelude::ItemRequest::find()
            .filter(entity::item_request::Column::RequestorId.eq(requestor_id))
            .order_by_desc(entity::item_request::Column::Created)
            .order_by_desc(entity::item_request::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a page of requests posted by everyone except the user, newest first
    pub async fn get_others_paginated(
        &self,
        requestor_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<Vec<entity::item_request::Model>, DbErr> {
        entity::prelude::ItemRequest::find()
            .filter(entity::item_request::Column::RequestorId.ne(requestor_id))
            .order_by_desc(entity::item_request::Column::Created)
            .order_by_desc(entity::item_request::Column::Id)
            .paginate(self.db, per_page)
            .fetch_page(page)
            .await
    }
}
