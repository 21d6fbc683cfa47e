//! Token signing and expiry configuration

use chrono::Duration;
use serde::Deserialize;
use std::fmt;

/// JWT configuration
///
/// The secret is required and never printed; `Debug` redacts it.
#[derive(Clone, Deserialize)]
pub struct JwtConfig {
    /// HMAC signing secret
    pub secret: String,

    /// Access token lifetime in seconds
    #[serde(default = "default_access_token_ttl")]
    pub access_token_ttl_secs: i64,

    /// Refresh token lifetime in seconds
    #[serde(default = "default_refresh_token_ttl")]
    pub refresh_token_ttl_secs: i64,
}

impl JwtConfig {
    /// Create a new JWT configuration with the default lifetimes
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            access_token_ttl_secs: default_access_token_ttl(),
            refresh_token_ttl_secs: default_refresh_token_ttl(),
        }
    }

    /// Access token lifetime
    pub fn access_token_ttl(&self) -> Duration {
        Duration::seconds(self.access_token_ttl_secs)
    }

    /// Refresh token lifetime
    pub fn refresh_token_ttl(&self) -> Duration {
        Duration::seconds(self.refresh_token_ttl_secs)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.secret.trim().is_empty() {
            return Err("auth.secret must be set".to_string());
        }
        if self.access_token_ttl_secs <= 0 || self.refresh_token_ttl_secs <= 0 {
            return Err("token lifetimes must be positive".to_string());
        }
        Ok(())
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("access_token_ttl_secs", &self.access_token_ttl_secs)
            .field("refresh_token_ttl_secs", &self.refresh_token_ttl_secs)
            .finish()
    }
}

fn default_access_token_ttl() -> i64 {
    15 * 60
}

fn default_refresh_token_ttl() -> i64 {
    168 * 60 * 60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lifetimes() {
        let config = JwtConfig::new("secret");
        assert_eq!(config.access_token_ttl(), Duration::minutes(15));
        assert_eq!(config.refresh_token_ttl(), Duration::hours(168));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = JwtConfig::new("super-secret-value");
        let printed = format!("{:?}", config);
        assert!(!printed.contains("super-secret-value"));
        assert!(printed.contains("<redacted>"));
    }
}
