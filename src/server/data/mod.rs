//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models where the service layer needs more than the raw row.

pub mod booking;
pub mod comment;
pub mod item;
pub mod item_request;
pub mod user;
