//! Comment domain models and parameters.

use chrono::NaiveDateTime;

use crate::model::comment::{CommentDto, CreateCommentDto};

/// Comment left on an item by a past booker.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub text: String,
    pub item_id: i32,
    /// Name of the author at the time of reading, or an empty string if the
    /// author could not be loaded.
    pub author_name: String,
    pub created: NaiveDateTime,
}

impl Comment {
    /// Converts a comment entity and its (optional) author to a domain model.
    pub fn from_entity(entity: entity::comment::Model, author: Option<entity::user::Model>) -> Self {
        Self {
            id: entity.id,
            text: entity.text,
            item_id: entity.item_id,
            author_name: author.map(|a| a.name).unwrap_or_default(),
            created: entity.created,
        }
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            text: self.text,
            author_name: self.author_name,
            created: self.created,
        }
    }
}

/// Parameters for commenting on an item.
#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub author_id: i32,
    pub item_id: i32,
    pub text: Option<String>,
}

impl CreateCommentParams {
    pub fn from_dto(author_id: i32, item_id: i32, dto: CreateCommentDto) -> Self {
        Self {
            author_id,
            item_id,
            text: dto.text,
        }
    }
}

/// Validated comment ready to be stored.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub author_id: i32,
    pub item_id: i32,
    pub text: String,
    pub created: NaiveDateTime,
}
