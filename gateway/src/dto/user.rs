use serde::{Deserialize, Serialize};
use validator::Validate;

use super::not_blank;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateUserDto {
    #[validate(
        required(message = "name is required"),
        custom(function = "not_blank", message = "name must not be blank")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "email is required"),
        email(message = "email must be a valid address")
    )]
    pub email: Option<String>,
}

/// Partial update; absent fields are left out of the forwarded body.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UpdateUserDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "not_blank", message = "name must not be blank"))]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
}
