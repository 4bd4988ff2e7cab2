use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{
    not_blank,
    page::{default_from, default_size},
};

#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemDto {
    #[validate(
        required(message = "name is required"),
        custom(function = "not_blank", message = "name must not be blank")
    )]
    pub name: Option<String>,
    #[validate(required(message = "description is required"))]
    pub description: Option<String>,
    #[validate(required(message = "available is required"))]
    pub available: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UpdateItemDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "not_blank", message = "name must not be blank"))]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateCommentDto {
    #[validate(
        required(message = "text is required"),
        custom(function = "not_blank", message = "text must not be blank")
    )]
    pub text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct SearchParams {
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_from")]
    #[validate(range(min = 0, message = "from must not be negative"))]
    pub from: i64,
    #[serde(default = "default_size")]
    #[validate(range(min = 1, message = "size must be positive"))]
    pub size: i64,
}
