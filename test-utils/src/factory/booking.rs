//! Booking factory for creating test booking entities.
//!
//! Factories bypass the service layer, so they can create bookings in the past
//! or in any status, which the booking service would reject.

use crate::factory::helpers::now;
use chrono::{Duration, NaiveDateTime};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::booking::BookingFactory;
///
/// let booking = BookingFactory::new(&db, item.id, booker.id)
///     .status("APPROVED")
///     .past()
///     .build()
///     .await?;
/// ```
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    item_id: i32,
    booker_id: i32,
    start: NaiveDateTime,
    end: NaiveDateTime,
    status: String,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - start: 1 day from now
    /// - end: 2 days from now
    /// - status: `"WAITING"`
    pub fn new(db: &'a DatabaseConnection, item_id: i32, booker_id: i32) -> Self {
        let now = now();
        Self {
            db,
            item_id,
            booker_id,
            start: now + Duration::days(1),
            end: now + Duration::days(2),
            status: "WAITING".to_string(),
        }
    }

    /// Sets both ends of the booking period.
    pub fn period(mut self, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Places the booking entirely in the past (2 days ago until 1 day ago).
    pub fn past(self) -> Self {
        let now = now();
        self.period(now - Duration::days(2), now - Duration::days(1))
    }

    /// Places the booking around now (started 1 day ago, ends in 1 day).
    pub fn current(self) -> Self {
        let now = now();
        self.period(now - Duration::days(1), now + Duration::days(1))
    }

    /// Sets the status, one of `WAITING`, `APPROVED`, `REJECTED`, `CANCELED`.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the booking entity into the database.
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            id: ActiveValue::NotSet,
            start: ActiveValue::Set(self.start),
            end: ActiveValue::Set(self.end),
            item_id: ActiveValue::Set(self.item_id),
            booker_id: ActiveValue::Set(self.booker_id),
            status: ActiveValue::Set(self.status),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a WAITING booking starting tomorrow.
pub async fn create_booking(
    db: &DatabaseConnection,
    item_id: i32,
    booker_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, item_id, booker_id).build().await
}
