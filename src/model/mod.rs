//! Wire DTOs shared by the HTTP API.
//!
//! Every DTO serializes with camelCase field names. Create and update payloads
//! keep their fields optional so that missing values reach the service layer
//! and are reported as validation errors instead of deserialization failures.

pub mod api;
pub mod booking;
pub mod comment;
pub mod item;
pub mod request;
pub mod user;
