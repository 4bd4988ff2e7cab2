//! User domain models and parameters.

use crate::model::user::{CreateUserDto, UpdateUserDto, UserDto};

/// Registered user of the sharing service.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    /// Unique across all users.
    pub email: String,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
        }
    }
}

/// Parameters for registering a user.
///
/// Fields stay optional until the service validates them.
#[derive(Debug, Clone, Default)]
pub struct CreateUserParams {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl CreateUserParams {
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
        }
    }
}

/// Parameters for a partial user update. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UpdateUserParams {
    pub fn from_dto(id: i32, dto: UpdateUserDto) -> Self {
        Self {
            id,
            name: dto.name,
            email: dto.email,
        }
    }
}
