use serde::Deserialize;

use crate::server::error::AppError;

const DEFAULT_FROM: i64 = 0;
const DEFAULT_SIZE: i64 = 10;

/// `from`/`size` query parameters accepted by paginated endpoints.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PaginationParams {
    #[serde(default = "default_from")]
    pub from: i64,
    #[serde(default = "default_size")]
    pub size: i64,
}

fn default_from() -> i64 {
    DEFAULT_FROM
}

fn default_size() -> i64 {
    DEFAULT_SIZE
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            from: DEFAULT_FROM,
            size: DEFAULT_SIZE,
        }
    }
}

/// A validated page, as consumed by SeaORM's paginator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Zero-based page index.
    pub page: u64,
    pub per_page: u64,
}

impl Page {
    /// Converts an element offset and page size into a page index.
    ///
    /// The offset is rounded down to the start of its page, so `from = 15, size = 10`
    /// yields the second page (elements 10..20).
    ///
    /// # Returns
    /// - `Ok(Page)` - Valid page
    /// - `Err(AppError::BadRequest)` - `from` is negative or `size` is not positive
    pub fn new(from: i64, size: i64) -> Result<Self, AppError> {
        if from < 0 {
            return Err(AppError::BadRequest(format!(
                "Parameter from must not be negative, got {}",
                from
            )));
        }
        if size <= 0 {
            return Err(AppError::BadRequest(format!(
                "Parameter size must be positive, got {}",
                size
            )));
        }

        Ok(Self {
            page: (from / size) as u64,
            per_page: size as u64,
        })
    }
}

impl TryFrom<PaginationParams> for Page {
    type Error = AppError;

    fn try_from(params: PaginationParams) -> Result<Self, Self::Error> {
        Page::new(params.from, params.size)
    }
}
