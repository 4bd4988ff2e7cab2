use crate::server::{
    error::AppError,
    model::booking::{BookingStatus, CreateBookingParams},
    service::booking::BookingService,
    util::pagination::Page,
};
use chrono::{Duration, Local, NaiveDateTime};
use test_utils::{
    builder::TestBuilder,
    factory::{self, booking::BookingFactory, item::ItemFactory},
};

mod approve;
mod create;
mod list;

fn first_page() -> Page {
    Page::new(0, 10).unwrap()
}

fn in_days(days: i64) -> NaiveDateTime {
    Local::now().naive_local() + Duration::days(days)
}
