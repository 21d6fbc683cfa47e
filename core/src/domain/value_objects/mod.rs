//! Value objects representing immutable domain concepts.

pub mod auth_result;
pub mod list_query;

// Re-export commonly used types
pub use auth_result::AuthResult;
pub use list_query::ListAccountsQuery;
