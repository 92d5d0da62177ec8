use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::shared::constants::MAX_PAGE_SIZE;

/// Uniform response envelope used by every endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>) -> Self {
        Self {
            success: true,
            data,
            message,
        }
    }

    pub fn error(message: Option<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message,
        }
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Query parameters accepted by every `/paginate` listing endpoint.
/// `limit` defaults per entity (branch: 10, developer/company: 20), so it is
/// optional here and resolved in the handler.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct PaginateQuery {
    /// Page number (1-indexed; values below 1 are floored to 1)
    #[param(minimum = 1)]
    pub page: Option<i64>,

    /// Number of items per page
    #[param(minimum = 1, maximum = 100)]
    pub limit: Option<i64>,

    /// Case-insensitive substring search across the entity's text columns
    pub search: Option<String>,
}

impl PaginateQuery {
    /// 1-based page, floored to 1
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    /// Effective page size, clamped to [1, MAX_PAGE_SIZE]
    pub fn limit_or(&self, default: i64) -> i64 {
        self.limit.unwrap_or(default).clamp(1, MAX_PAGE_SIZE)
    }

    /// SQL OFFSET for the effective page
    pub fn offset(&self, limit: i64) -> i64 {
        (self.page() - 1) * limit
    }

    /// Search term, absent when empty
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }
}

/// One page of rows plus the filtered total
#[derive(Debug, Clone)]
pub struct Paged<T> {
    pub rows: Vec<T>,
    pub total: i64,
    pub total_pages: i64,
}

impl<T> Paged<T> {
    pub fn new(rows: Vec<T>, total: i64, limit: i64) -> Self {
        Self {
            rows,
            total,
            total_pages: total_pages(total, limit),
        }
    }
}

/// ceil(total / limit); 0 rows means 0 pages
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if limit <= 0 {
        return 0;
    }
    (total + limit - 1) / limit
}

/// Top-level shape of paginated listing responses:
/// `{ success, data, page, totalPages, total }`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub success: bool,
    pub data: Vec<T>,
    pub page: i64,
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
    pub total: i64,
}

impl<T> PaginatedResponse<T> {
    pub fn new(page: i64, paged: Paged<T>) -> Self {
        Self {
            success: true,
            data: paged.rows,
            page,
            total_pages: paged.total_pages,
            total: paged.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(45, 20), 3);
        assert_eq!(total_pages(40, 20), 2);
        assert_eq!(total_pages(0, 20), 0);
        assert_eq!(total_pages(1, 20), 1);
    }

    #[test]
    fn page_floors_to_one() {
        let q = PaginateQuery {
            page: Some(0),
            limit: None,
            search: None,
        };
        assert_eq!(q.page(), 1);
        assert_eq!(q.offset(10), 0);

        let q = PaginateQuery {
            page: Some(-3),
            limit: None,
            search: None,
        };
        assert_eq!(q.page(), 1);
    }

    #[test]
    fn offset_uses_effective_page_and_limit() {
        let q = PaginateQuery {
            page: Some(3),
            limit: Some(20),
            search: None,
        };
        let limit = q.limit_or(10);
        assert_eq!(limit, 20);
        assert_eq!(q.offset(limit), 40);
    }

    #[test]
    fn limit_clamps_to_max() {
        let q = PaginateQuery {
            page: None,
            limit: Some(10_000),
            search: None,
        };
        assert_eq!(q.limit_or(10), MAX_PAGE_SIZE);
    }

    #[test]
    fn empty_search_is_absent() {
        let q = PaginateQuery {
            page: None,
            limit: None,
            search: Some(String::new()),
        };
        assert_eq!(q.search_term(), None);
    }
}
