use crate::server::data::item::ItemRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_owner_paginated;
