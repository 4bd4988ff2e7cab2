//! Booking service for business logic.
//!
//! Owns the booking rules: who may book an item, when, who may see a booking,
//! and the one-way transition from `WAITING` to `APPROVED` or `REJECTED`.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{booking::BookingRepository, item::ItemRepository},
    error::AppError,
    model::booking::{Booking, BookingState, BookingStatus, CreateBookingParams, NewBooking},
    service::user::UserService,
    util::{pagination::Page, time::now},
};

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Requests a booking of an item for a future period
    ///
    /// # Returns
    /// - `Ok(Booking)` - The booking, with status `WAITING`
    /// - `Err(AppError::NotFound)` - Booker or item missing
    /// - `Err(AppError::Validation)` - Missing fields, item unavailable, or bad period
    /// - `Err(AppError::NoRights)` - Booker owns the item
    pub async fn create(&self, params: CreateBookingParams) -> Result<Booking, AppError> {
        let (Some(item_id), Some(start), Some(end)) = (params.item_id, params.start, params.end)
        else {
            return Err(AppError::Validation(
                "itemId, start and end are required".to_string(),
            ));
        };

        UserService::new(self.db).get(params.booker_id).await?;

        let item = ItemRepository::new(self.db)
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Item with id {} not found", item_id)))?;

        if !item.available {
            return Err(AppError::Validation(format!(
                "Item with id {} is not available",
                item_id
            )));
        }
        if item.owner_id == params.booker_id {
            return Err(AppError::NoRights(format!(
                "User {} cannot book their own item {}",
                params.booker_id, item_id
            )));
        }

        let now = now();
        if start <= now || end <= now {
            return Err(AppError::Validation(
                "Booking start and end must be in the future".to_string(),
            ));
        }
        if end <= start {
            return Err(AppError::Validation(
                "Booking end must be after its start".to_string(),
            ));
        }

        let repo = BookingRepository::new(self.db);
        let created = repo
            .create(NewBooking {
                booker_id: params.booker_id,
                item_id,
                start,
                end,
            })
            .await?;

        tracing::info!(
            "User {} requested booking {} of item {}",
            params.booker_id,
            created.id,
            item_id
        );

        self.find_booking(created.id).await
    }

    /// Approves or rejects a waiting booking on the caller's item
    ///
    /// # Returns
    /// - `Ok(Booking)` - The booking with its new status
    /// - `Err(AppError::NotFound)` - Caller or booking missing, or booking not visible to caller
    /// - `Err(AppError::Validation)` - Booking is no longer `WAITING`
    /// - `Err(AppError::NoRights)` - Caller is the booker, not the owner
    pub async fn approve(
        &self,
        caller_id: i32,
        booking_id: i32,
        approved: bool,
    ) -> Result<Booking, AppError> {
        UserService::new(self.db).get(caller_id).await?;

        let booking = self.find_booking(booking_id).await?;
        if !booking.is_visible_to(caller_id) {
            return Err(booking_not_found(booking_id));
        }
        if booking.status != BookingStatus::Waiting {
            return Err(AppError::Validation(format!(
                "Booking {} is already {}",
                booking_id, booking.status
            )));
        }
        if booking.item_owner_id != caller_id {
            return Err(AppError::NoRights(format!(
                "Only the owner of item {} can approve booking {}",
                booking.item_id, booking_id
            )));
        }

        let status = if approved {
            BookingStatus::Approved
        } else {
            BookingStatus::Rejected
        };

        BookingRepository::new(self.db)
            .update_status(booking_id, status)
            .await?;

        tracing::info!("User {} set booking {} to {}", caller_id, booking_id, status);

        Ok(Booking { status, ..booking })
    }

    /// Gets a booking visible to the caller as booker or item owner
    pub async fn get(&self, caller_id: i32, booking_id: i32) -> Result<Booking, AppError> {
        UserService::new(self.db).get(caller_id).await?;

        let booking = self.find_booking(booking_id).await?;
        if !booking.is_visible_to(caller_id) {
            return Err(AppError::NoRights(format!(
                "User {} cannot view booking {}",
                caller_id, booking_id
            )));
        }

        Ok(booking)
    }

    /// Gets a page of the caller's own bookings in `state`, latest start first
    pub async fn get_by_booker(
        &self,
        booker_id: i32,
        state: &str,
        page: Page,
    ) -> Result<Vec<Booking>, AppError> {
        let state = BookingState::parse(state)?;

        UserService::new(self.db).get(booker_id).await?;

        Ok(BookingRepository::new(self.db)
            .get_by_booker(booker_id, state, now(), page.page, page.per_page)
            .await?)
    }

    /// Gets a page of bookings of the caller's items in `state`, latest start first
    pub async fn get_by_owner(
        &self,
        owner_id: i32,
        state: &str,
        page: Page,
    ) -> Result<Vec<Booking>, AppError> {
        let state = BookingState::parse(state)?;

        UserService::new(self.db).get(owner_id).await?;

        Ok(BookingRepository::new(self.db)
            .get_by_item_owner(owner_id, state, now(), page.page, page.per_page)
            .await?)
    }

    async fn find_booking(&self, booking_id: i32) -> Result<Booking, AppError> {
        BookingRepository::new(self.db)
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| booking_not_found(booking_id))
    }
}

fn booking_not_found(booking_id: i32) -> AppError {
    AppError::NotFound(format!("Booking with id {} not found", booking_id))
}
