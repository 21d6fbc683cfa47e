//! Token claims for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::account::{Account, AccountId};
use crate::errors::TokenError;

/// Kind of token, carried in the `type` claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of a short-lived access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (account ID)
    pub sub: String,

    /// Display name at issuance
    pub name: String,

    /// Email at issuance
    pub email: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl AccessClaims {
    /// Creates access claims for an account
    ///
    /// # Arguments
    ///
    /// * `account` - The account the token is issued for
    /// * `now` - Issuance instant
    /// * `ttl` - Lifetime of the token
    pub fn new(account: &Account, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            sub: account.id().to_string(),
            name: account.name().to_string(),
            email: account.email().to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }
}

/// Payload of a long-lived refresh token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshClaims {
    /// Subject (account ID)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl RefreshClaims {
    /// Creates refresh claims for an account identifier
    pub fn new(account_id: AccountId, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            sub: account_id.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }
}

/// Signed token payload, discriminated by its `type` tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Claims {
    Access(AccessClaims),
    Refresh(RefreshClaims),
}

impl Claims {
    pub fn kind(&self) -> TokenKind {
        match self {
            Claims::Access(_) => TokenKind::Access,
            Claims::Refresh(_) => TokenKind::Refresh,
        }
    }

    pub fn subject(&self) -> &str {
        match self {
            Claims::Access(c) => &c.sub,
            Claims::Refresh(c) => &c.sub,
        }
    }

    pub fn expires_at(&self) -> i64 {
        match self {
            Claims::Access(c) => c.exp,
            Claims::Refresh(c) => c.exp,
        }
    }

    pub fn jti(&self) -> &str {
        match self {
            Claims::Access(c) => &c.jti,
            Claims::Refresh(c) => &c.jti,
        }
    }

    /// Subject parsed as an account identifier
    pub fn account_id(&self) -> Result<AccountId, TokenError> {
        AccountId::parse(self.subject()).map_err(|_| TokenError::InvalidSubject)
    }
}

impl From<AccessClaims> for Claims {
    fn from(claims: AccessClaims) -> Self {
        Claims::Access(claims)
    }
}

impl From<RefreshClaims> for Claims {
    fn from(claims: RefreshClaims) -> Self {
        Claims::Refresh(claims)
    }
}
