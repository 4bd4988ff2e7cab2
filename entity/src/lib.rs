//! SeaORM entity definitions for the ShareIt schema.

pub mod prelude;

pub mod booking;
pub mod comment;
pub mod item;
pub mod item_request;
pub mod user;
