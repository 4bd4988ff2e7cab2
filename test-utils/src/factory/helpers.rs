//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use chrono::{Local, NaiveDateTime};
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names and emails in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Current local time truncated to whole seconds.
///
/// Timestamps round-trip through SQLite text columns, so sub-second precision
/// would make equality assertions flaky.
pub fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now - chrono::Duration::nanoseconds(now.and_utc().timestamp_subsec_nanos() as i64)
}

/// Creates an owner, a second user acting as booker, an available item owned
/// by the first user, and a WAITING booking of that item starting tomorrow.
///
/// # Returns
/// - `Ok((owner, booker, item, booking))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::user::Model,
        entity::item::Model,
        entity::booking::Model,
    ),
    DbErr,
> {
    let owner = crate::factory::user::create_user(db).await?;
    let booker = crate::factory::user::create_user(db).await?;
    let item = crate::factory::item::create_item(db, owner.id).await?;
    let booking = crate::factory::booking::create_booking(db, item.id, booker.id).await?;

    Ok((owner, booker, item, booking))
}

/// Creates an owner with a single available item.
///
/// # Returns
/// - `Ok((owner, item))` - The owner and the item
/// - `Err(DbErr)` - Database error during creation
pub async fn create_item_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::item::Model), DbErr> {
    let owner = crate::factory::user::create_user(db).await?;
    let item = crate::factory::item::create_item(db, owner.id).await?;

    Ok((owner, item))
}
