//! # Infrastructure Layer
//!
//! Concrete implementations of the core contracts backed by external systems:
//!
//! - **Database**: MySQL connection pool and the account store using SQLx
//!
//! Every store failure leaves this crate as a `DomainError`; the
//! [`InfrastructureError`] type covers pool setup and migrations.

use acct_core::errors::DomainError;

/// Database module - MySQL implementations using SQLx
pub mod database;

pub use database::{DatabasePool, MySqlAccountRepository};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Database(e) => database::map_sqlx_error(e),
            other => DomainError::internal(other.to_string()),
        }
    }
}
