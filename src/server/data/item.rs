use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait,
    DatabaseConnection, DbBackend, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::item::NewItem;

pub struct ItemRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new item
    pub async fn create(&self, item: NewItem) -> Result<entity::item::Model, DbErr> {
        entity::item::ActiveModel {
            name: ActiveValue::Set(item.name),
            description: ActiveValue::Set(item.description),
            available: ActiveValue::Set(item.available),
            owner_id: ActiveValue::Set(item.owner_id),
            request_id: ActiveValue::Set(item.request_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::item::Model>, DbErr> {
        entity::prelude::Item::find_by_id(id).one(self.db).await
    }

    /// Gets a page of the owner's items ordered by id
    pub async fn get_by_owner_paginated(
        &self,
        owner_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<Vec<entity::item::Model>, DbErr> {
        entity::prelude::Item::find()
            .filter(entity::item::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::item::Column::Id)
            .paginate(self.db, per_page)
            .fetch_page(page)
            .await
    }

    /// Searches available items whose name or description contains `text`,
    /// ignoring case, ordered by id
    ///
    /// Case folding is Unicode-aware on every backend. Postgres runs `ILIKE` with
    /// `%`, `_` and `!` in `text` escaped. SQLite's `LOWER` and `LIKE` only fold
    /// ASCII, so there the available items are loaded and matched with
    /// `str::to_lowercase`, then paged in memory.
    pub async fn search_available(
        &self,
        text: &str,
        page: u64,
        per_page: u64,
    ) -> Result<Vec<entity::item::Model>, DbErr> {
        let available = entity::prelude::Item::find()
            .filter(entity::item::Column::Available.eq(true))
            .order_by_asc(entity::item::Column::Id);

        if self.db.get_database_backend() == DbBackend::Postgres {
            let pattern = like_pattern(text);

            return available
                .filter(Expr::cust_with_values(
                    "(name ILIKE ? ESCAPE '!' OR description ILIKE ? ESCAPE '!')",
                    [pattern.clone(), pattern],
                ))
                .paginate(self.db, per_page)
                .fetch_page(page)
                .await;
        }

        let needle = text.to_lowercase();
        let skip = page.saturating_mul(per_page) as usize;

        Ok(available
            .all(self.db)
            .await?
            .into_iter()
            .filter(|item| {
                item.name.to_lowercase().contains(&needle)
                    || item.description.to_lowercase().contains(&needle)
            })
            .skip(skip)
            .take(per_page as usize)
            .collect())
    }

    /// Updates the provided fields of an item, leaving `None` fields untouched
    pub async fn update(
        &self,
        id: i32,
        name: Option<String>,
        description: Option<String>,
        available: Option<bool>,
    ) -> Result<entity::item::Model, DbErr> {
        let item = entity::prelude::Item::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Item with id {} not found", id)))?;

        let mut active_model: entity::item::ActiveModel = item.into();
        if let Some(name) = name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(available) = available {
            active_model.available = ActiveValue::Set(available);
        }

        active_model.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Item::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    /// Gets the items answering each of the given requests, keyed by request id
    pub async fn get_by_request_ids(
        &self,
        request_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<entity::item::Model>>, DbErr> {
        if request_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let items = entity::prelude::Item::find()
            .filter(entity::item::Column::RequestId.is_in(request_ids.iter().copied()))
            .order_by_asc(entity::item::Column::Id)
            .all(self.db)
            .await?;

        let mut by_request: HashMap<i32, Vec<entity::item::Model>> = HashMap::new();
        for item in items {
            if let Some(request_id) = item.request_id {
                by_request.entry(request_id).or_default().push(item);
            }
        }

        Ok(by_request)
    }
}

/// Wraps `text` in `%` for a contains match, escaping LIKE wildcards with `!`
fn like_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '%' | '_' | '!') {
            pattern.push('!');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
