//! Booking data repository.
//!
//! Listing queries join the booked item so that owner filters and item names are
//! available in one round trip. Bookers are loaded afterwards in a single batch.

use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::booking::{Booking, BookingState, BookingStatus, NewBooking};

/// Approved bookings bracketing "now" for one item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LastAndNext {
    /// Latest approved booking that has already started.
    pub last: Option<entity::booking::Model>,
    /// Earliest approved booking that has not started yet.
    pub next: Option<entity::booking::Model>,
}

pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new booking with status `WAITING`
    pub async fn create(&self, booking: NewBooking) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            start: ActiveValue::Set(booking.start),
            end: ActiveValue::Set(booking.end),
            item_id: ActiveValue::Set(booking.item_id),
            booker_id: ActiveValue::Set(booking.booker_id),
            status: ActiveValue::Set(BookingStatus::Waiting.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a booking by id together with its item and booker
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Booking>, DbErr> {
        let row = entity::prelude::Booking::find_by_id(id)
            .find_also_related(entity::prelude::Item)
            .one(self.db)
            .await?;

        match row {
            Some(row) => Ok(self.with_bookers(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    /// Sets the status of a booking
    pub async fn update_status(&self, id: i32, status: BookingStatus) -> Result<(), DbErr> {
        let booking = entity::prelude::Booking::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Booking with id {} not found",
                id
            )))?;

        let mut active_model: entity::booking::ActiveModel = booking.into();
        active_model.status = ActiveValue::Set(status.as_str().to_string());
        active_model.update(self.db).await?;

        Ok(())
    }

    /// Gets a page of the booker's bookings matching `state`, latest start first
    pub async fn get_by_booker(
        &self,
        booker_id: i32,
        state: BookingState,
        now: NaiveDateTime,
        page: u64,
        per_page: u64,
    ) -> Result<Vec<Booking>, DbErr> {
        let rows = entity::prelude::Booking::find()
            .find_also_related(entity::prelude::Item)
            .filter(entity::booking::Column::BookerId.eq(booker_id))
            .filter(state_condition(state, now))
            .order_by_desc(entity::booking::Column::Start)
            .order_by_desc(entity::booking::Column::Id)
            .paginate(self.db, per_page)
            .fetch_page(page)
            .await?;

        self.with_bookers(rows).await
    }

    /// Gets a page of bookings on the owner's items matching `state`, latest start first
    pub async fn get_by_item_owner(
        &self,
        owner_id: i32,
        state: BookingState,
        now: NaiveDateTime,
        page: u64,
        per_page: u64,
    ) -> Result<Vec<Booking>, DbErr> {
        let rows = entity::prelude::Booking::find()
            .find_also_related(entity::prelude::Item)
            .filter(entity::item::Column::OwnerId.eq(owner_id))
            .filter(state_condition(state, now))
            .order_by_desc(entity::booking::Column::Start)
            .order_by_desc(entity::booking::Column::Id)
            .paginate(self.db, per_page)
            .fetch_page(page)
            .await?;

        self.with_bookers(rows).await
    }

    /// Gets the last and next approved bookings for each of the given items
    ///
    /// Items without approved bookings are absent from the map.
    pub async fn get_last_and_next(
        &self,
        item_ids: &[i32],
        now: NaiveDateTime,
    ) -> Result<HashMap<i32, LastAndNext>, DbErr> {
        if item_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let bookings = entity::prelude::Booking::find()
            .filter(entity::booking::Column::ItemId.is_in(item_ids.iter().copied()))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Approved.as_str()))
            .order_by_asc(entity::booking::Column::Start)
            .all(self.db)
            .await?;

        let mut result: HashMap<i32, LastAndNext> = HashMap::new();
        for booking in bookings {
            let entry = result.entry(booking.item_id).or_default();
            // Ordered by start ascending: the last started booking wins, the
            // first unstarted one is kept.
            if booking.start <= now {
                entry.last = Some(booking);
            } else if entry.next.is_none() {
                entry.next = Some(booking);
            }
        }

        Ok(result)
    }

    /// Whether the user has an approved booking of the item that ended before `now`
    pub async fn has_finished_approved(
        &self,
        booker_id: i32,
        item_id: i32,
        now: NaiveDateTime,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Booking::find()
            .filter(entity::booking::Column::BookerId.eq(booker_id))
            .filter(entity::booking::Column::ItemId.eq(item_id))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Approved.as_str()))
            .filter(entity::booking::Column::End.lt(now))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Attaches bookers to booking/item rows, preserving order
    async fn with_bookers(
        &self,
        rows: Vec<(entity::booking::Model, Option<entity::item::Model>)>,
    ) -> Result<Vec<Booking>, DbErr> {
        let booker_ids: Vec<i32> = rows.iter().map(|(b, _)| b.booker_id).collect();

        let bookers: HashMap<i32, entity::user::Model> = if !booker_ids.is_empty() {
            entity::prelude::User::find()
                .filter(entity::user::Column::Id.is_in(booker_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|u| (u.id, u))
                .collect()
        } else {
            HashMap::new()
        };

        rows.into_iter()
            .map(|(booking, item)| {
                let item = item.ok_or_else(|| {
                    DbErr::RecordNotFound(format!("Item of booking {} not found", booking.id))
                })?;
                let booker = bookers.get(&booking.booker_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!("Booker of booking {} not found", booking.id))
                })?;

                Booking::from_entity(booking, item, booker)
            })
            .collect()
    }
}

/// Builds the filter selecting bookings in `state` relative to `now`
fn state_condition(state: BookingState, now: NaiveDateTime) -> Condition {
    match state {
        BookingState::All => Condition::all(),
        BookingState::Current => Condition::all()
            .add(entity::booking::Column::Start.lt(now))
            .add(entity::booking::Column::End.gt(now)),
        BookingState::Past => Condition::all().add(entity::booking::Column::End.lt(now)),
        BookingState::Future => Condition::all().add(entity::booking::Column::Start.gt(now)),
        BookingState::Waiting => Condition::all()
            .add(entity::booking::Column::Status.eq(BookingStatus::Waiting.as_str())),
        BookingState::Rejected => Condition::all()
            .add(entity::booking::Column::Status.eq(BookingStatus::Rejected.as_str())),
    }
}
