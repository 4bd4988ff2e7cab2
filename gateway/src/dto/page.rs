use serde::{Deserialize, Serialize};
use validator::Validate;

pub(crate) fn default_from() -> i64 {
    0
}

pub(crate) fn default_size() -> i64 {
    10
}

/// `from`/`size` window of a paginated listing.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct PageParams {
    #[serde(default = "default_from")]
    #[validate(range(min = 0, message = "from must not be negative"))]
    pub from: i64,
    #[serde(default = "default_size")]
    #[validate(range(min = 1, message = "size must be positive"))]
    pub size: i64,
}
