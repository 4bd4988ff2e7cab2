use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::page::{default_from, default_size};
use crate::error::GatewayError;

#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_period", skip_on_field_errors = true))]
pub struct CreateBookingDto {
    #[validate(required(message = "itemId is required"))]
    pub item_id: Option<i32>,
    #[validate(required(message = "start is required"))]
    pub start: Option<NaiveDateTime>,
    #[validate(required(message = "end is required"))]
    pub end: Option<NaiveDateTime>,
}

fn validate_period(dto: &CreateBookingDto) -> Result<(), ValidationError> {
    if let (Some(start), Some(end)) = (dto.start, dto.end) {
        if end <= start {
            return Err(ValidationError::new("period")
                .with_message("end must be after start".into()));
        }
    }

    Ok(())
}

/// Booking list filters understood by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingState {
    All,
    Current,
    Past,
    Future,
    Waiting,
    Rejected,
}

impl BookingState {
    /// Parses a state name; names are case-sensitive.
    pub fn parse(value: &str) -> Result<Self, GatewayError> {
        match value {
            "ALL" => Ok(Self::All),
            "CURRENT" => Ok(Self::Current),
            "PAST" => Ok(Self::Past),
            "FUTURE" => Ok(Self::Future),
            "WAITING" => Ok(Self::Waiting),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(GatewayError::UnsupportedState(format!(
                "Unknown state: {}",
                value
            ))),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct BookingListParams {
    #[serde(default = "default_state")]
    pub state: String,
    #[serde(default = "default_from")]
    #[validate(range(min = 0, message = "from must not be negative"))]
    pub from: i64,
    #[serde(default = "default_size")]
    #[validate(range(min = 1, message = "size must be positive"))]
    pub size: i64,
}

fn default_state() -> String {
    "ALL".to_string()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApproveParams {
    pub approved: bool,
}
