use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::comment::{Comment, NewComment};

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a comment and returns it with the author's name
    pub async fn create(&self, comment: NewComment) -> Result<Comment, DbErr> {
        let entity = entity::comment::ActiveModel {
            text: ActiveValue::Set(comment.text),
            item_id: ActiveValue::Set(comment.item_id),
            author_id: ActiveValue::Set(comment.author_id),
            created: ActiveValue::Set(comment.created),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let author = entity::prelude::User::find_by_id(entity.author_id)
            .one(self.db)
            .await?;

        Ok(Comment::from_entity(entity, author))
    }

    /// Gets comments of the given items, oldest first, keyed by item id
    pub async fn get_by_item_ids(
        &self,
        item_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<Comment>>, DbErr> {
        if item_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let comments = entity::prelude::Comment::find()
            .find_also_related(entity::prelude::User)
            .filter(entity::comment::Column::ItemId.is_in(item_ids.iter().copied()))
            .order_by_asc(entity::comment::Column::Created)
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await?;

        let mut by_item: HashMap<i32, Vec<Comment>> = HashMap::new();
        for (comment, author) in comments {
            by_item
                .entry(comment.item_id)
                .or_default()
                .push(Comment::from_entity(comment, author));
        }

        Ok(by_item)
    }
}
