use serde::{Deserialize, Serialize};
use validator::Validate;

use super::not_blank;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateItemRequestDto {
    #[validate(
        required(message = "description is required"),
        custom(function = "not_blank", message = "description must not be blank")
    )]
    pub description: Option<String>,
}
