//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use crate::config::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Pagination query parameters (reusable across all list endpoints)
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct PaginationParams {
    /// Page number, 1-indexed
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page, capped at the server maximum
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

fn default_page() -> u64 {
    DEFAULT_PAGE_NUMBER
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl PaginationParams {
    /// Page number with the lower bound enforced
    pub fn page(&self) -> u64 {
        self.page.max(1)
    }

    /// Page size clamped to the allowed range
    pub fn limit(&self) -> u64 {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }

    /// Calculate offset for database query.
    ///
    /// Saturating math: an absurd page number yields the largest
    /// representable offset (an empty page) rather than overflow.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit())
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Offset pagination envelope (reusable for all list responses)
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    /// Page slice, ordered as returned by the store
    pub items: Vec<T>,
    /// Total row count of the unfiltered query
    pub total: u64,
    /// Requested page size
    pub limit: u64,
    /// Offset of the first item in this page
    pub offset: u64,
}

impl<T> Paginated<T> {
    /// Create an envelope for the given page slice
    pub fn new(items: Vec<T>, page: u64, page_size: u64, total: u64) -> Self {
        Self {
            items,
            total,
            limit: page_size,
            offset: page.saturating_sub(1).saturating_mul(page_size),
        }
    }
}
