use crate::server::{
    error::AppError, model::request::CreateItemRequestParams,
    service::request::ItemRequestService, util::pagination::Page,
};
use test_utils::{
    builder::TestBuilder,
    factory::{self, item::ItemFactory},
};

mod create;
