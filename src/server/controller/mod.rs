//! HTTP request handlers.
//!
//! Controllers extract the caller and request data, convert DTOs into parameter
//! models, call the service layer, and convert the returned domain models back
//! into DTOs.

pub mod booking;
pub mod item;
pub mod request;
pub mod user;

#[cfg(test)]
mod test;
