//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Token signing and expiry configuration
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `reporting` - Background reporting jobs
//! - `server` - HTTP server and CORS configuration

pub mod auth;
pub mod database;
pub mod environment;
pub mod reporting;
pub mod server;

use serde::Deserialize;

pub use auth::JwtConfig;
pub use database::DatabaseConfig;
pub use environment::{Environment, LoggingConfig};
pub use reporting::ReportingConfig;
pub use server::{CorsConfig, ServerConfig};

/// Complete application configuration combining all sub-configurations
///
/// Every section except `auth` falls back to its defaults when absent. The
/// signing secret has no default and must be supplied.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Environment the process runs in
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Token signing configuration
    pub auth: JwtConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Background reporting configuration
    #[serde(default)]
    pub reporting: ReportingConfig,
}

impl AppConfig {
    /// Build a configuration around a signing secret with every other section defaulted
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            environment: Environment::default(),
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: JwtConfig::new(secret),
            cors: CorsConfig::default(),
            logging: LoggingConfig::default(),
            reporting: ReportingConfig::default(),
        }
    }

    /// Check invariants that serde cannot express
    pub fn validate(&self) -> Result<(), String> {
        self.auth.validate()?;
        if self.server.port == 0 {
            return Err("server.port must be non-zero".to_string());
        }
        if self.database.max_connections == 0 {
            return Err("database.max_connections must be at least 1".to_string());
        }
        Ok(())
    }
}
