//! Database module - MySQL implementations using SQLx
//!
//! - Connection pool management and migrations
//! - The account repository implementation
//! - Mapping of SQLx errors onto the domain taxonomy

pub mod connection;
pub mod mysql;

use acct_core::errors::DomainError;
use tracing::{error, warn};

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::MySqlAccountRepository;

/// Translate a SQLx error into a domain error
///
/// Unique violations become `AlreadyExists`; pool exhaustion, a closed pool
/// and I/O failures are transient and become `Unavailable`; everything else
/// is `Internal`.
pub fn map_sqlx_error(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            DomainError::already_exists("user")
        }
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            warn!(error = %err, "database unavailable");
            DomainError::unavailable(err.to_string())
        }
        _ => {
            error!(error = %err, "database query failed");
            DomainError::internal(err.to_string())
        }
    }
}
