//! Request bodies and query parameters accepted by the gateway.
//!
//! Every type derives `Validate`; controllers validate before anything is
//! forwarded. Field names mirror the server's camelCase JSON.

use validator::ValidationError;

pub mod booking;
pub mod item;
pub mod page;
pub mod request;
pub mod user;

/// Rejects strings made only of whitespace.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }

    Ok(())
}
