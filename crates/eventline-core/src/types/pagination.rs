//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::result::AppResult;

/// Default page number.
const DEFAULT_PAGE: i64 = 1;
/// Default page size.
const DEFAULT_LIMIT: i64 = 10;

/// Request parameters for paginated queries.
///
/// Values below 1 are rejected rather than clamped — the API reports them
/// as a validation failure.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    #[serde(default = "default_page")]
    pub page: i64,
    /// Number of items per page.
    #[serde(default = "default_limit")]
    pub limit: i64,
}

impl PageRequest {
    /// Create a new page request.
    pub fn new(page: i64, limit: i64) -> Self {
        Self { page, limit }
    }

    /// Reject non-positive page or limit values.
    pub fn validate(&self) -> AppResult<()> {
        if self.page < 1 || self.limit < 1 {
            return Err(AppError::validation(
                "page and limit must be positive integers.",
            ));
        }
        Ok(())
    }

    /// Calculate the SQL `OFFSET` value.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Paginated response wrapper: total count, echoed page/limit, page slice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// Total number of items across all pages.
    pub total: u64,
    /// Current page number (1-based).
    pub page: i64,
    /// Number of items per page.
    pub limit: i64,
    /// The items on this page.
    pub data: Vec<T>,
}

impl<T> PageResponse<T> {
    /// Create a new paginated response.
    pub fn new(total: u64, page: &PageRequest, data: Vec<T>) -> Self {
        Self {
            total,
            page: page.page,
            limit: page.limit,
            data,
        }
    }
}

fn default_page() -> i64 {
    DEFAULT_PAGE
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}
