use crate::server::{
    error::AppError,
    model::{
        comment::CreateCommentParams,
        item::{CreateItemParams, UpdateItemParams},
    },
    service::item::ItemService,
    util::pagination::Page,
};
use test_utils::{
    builder::TestBuilder,
    factory::{self, booking::BookingFactory, item::ItemFactory},
};

mod add_comment;
mod create;
mod search;
mod update;

fn first_page() -> Page {
    Page::new(0, 10).unwrap()
}
