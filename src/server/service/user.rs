//! User service for business logic.
//!
//! This module provides the `UserService` for registering and maintaining users. It
//! owns input validation and the email uniqueness rule.

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParams, UpdateUserParams, User},
    util::validation::{reject_blank, require_non_blank, validate_email},
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Validation)` - Name or email missing or blank, or email malformed
    /// - `Err(AppError::DuplicateEmail)` - Email already registered
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let name = require_non_blank(params.name, "name")?;
        let email = require_non_blank(params.email, "email")?;
        validate_email(&email)?;

        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&email).await?.is_some() {
            return Err(duplicate_email(&email));
        }

        let user = user_repo
            .create(name, email.clone())
            .await
            .map_err(|e| map_unique_violation(e, &email))?;

        tracing::info!("Created user {} ({})", user.id, user.email);

        Ok(user)
    }

    /// Gets a user by id.
    ///
    /// Other services call this to check that the caller exists.
    ///
    /// # Returns
    /// - `Ok(User)` - The user
    /// - `Err(AppError::NotFound)` - No user with this id
    pub async fn get(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
    }

    /// Lists all users ordered by id.
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    /// Updates name and/or email of a user.
    ///
    /// Submitting the user's current email again is not a conflict.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with this id
    /// - `Err(AppError::Validation)` - A provided value is blank or the email malformed
    /// - `Err(AppError::DuplicateEmail)` - Email used by another user
    pub async fn update(&self, params: UpdateUserParams) -> Result<User, AppError> {
        reject_blank(&params.name, "name")?;
        reject_blank(&params.email, "email")?;
        if let Some(email) = &params.email {
            validate_email(email)?;
        }

        let user = self.get(params.id).await?;
        let user_repo = UserRepository::new(self.db);

        if let Some(email) = &params.email {
            if let Some(existing) = user_repo.find_by_email(email).await? {
                if existing.id != user.id {
                    return Err(duplicate_email(email));
                }
            }
        }

        let email = params.email.clone().unwrap_or_default();
        let updated = user_repo
            .update(params.id, params.name, params.email)
            .await
            .map_err(|e| map_unique_violation(e, &email))?;

        tracing::info!("Updated user {}", updated.id);

        Ok(updated)
    }

    /// Deletes a user and, through cascades, everything they own.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::NotFound)` - No user with this id
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !UserRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("User with id {} not found", id)));
        }

        tracing::info!("Deleted user {}", id);

        Ok(())
    }
}

fn duplicate_email(email: &str) -> AppError {
    AppError::DuplicateEmail(format!("Email {} is already registered", email))
}

/// Maps a unique index violation to `DuplicateEmail`; other errors pass through.
///
/// Covers the race where two requests register the same email between the
/// lookup and the insert.
fn map_unique_violation(err: DbErr, email: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => duplicate_email(email),
        _ => AppError::DbErr(err),
    }
}
