//! Type definitions module
//!
//! - `pagination` - Cursor pagination policy for list endpoints
//! - `response` - API response envelope

pub mod pagination;
pub mod response;

pub use pagination::{CursorPagination, PageLimit, SortOrder, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
pub use response::{ApiResponse, HealthResponse};
