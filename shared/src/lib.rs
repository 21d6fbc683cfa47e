//! Shared utilities and common types for the account service
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Stable error codes
//! - Pagination policy and the API response envelope
//! - Validation helpers

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CorsConfig, DatabaseConfig, Environment, JwtConfig, LoggingConfig,
    ReportingConfig, ServerConfig,
};
pub use errors::error_codes;
pub use types::{ApiResponse, CursorPagination, PageLimit, SortOrder};
pub use utils::validation;
