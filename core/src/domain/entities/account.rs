//! Account entity representing a registered user.

use std::fmt;
use std::str::FromStr;

use acct_shared::utils::validation::{limits, validators};
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationError;

/// Length of a bcrypt digest in its modular crypt format
pub const PASSWORD_HASH_LEN: usize = 60;

/// Opaque, immutable account identifier
///
/// Backed by a UUIDv7, so identifiers issued later sort after earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(Uuid);

impl AccountId {
    /// Issue a fresh time-ordered identifier
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Parse the textual form, rejecting anything that is not a UUID
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        Uuid::parse_str(value.trim())
            .map(Self)
            .map_err(|_| ValidationError::InvalidFormat {
                field: "id".to_string(),
            })
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for AccountId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A bcrypt digest; never the raw password
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(digest: impl Into<String>) -> Result<Self, ValidationError> {
        let digest = digest.into();
        if digest.len() != PASSWORD_HASH_LEN {
            return Err(ValidationError::InvalidFormat {
                field: "password_hash".to_string(),
            });
        }
        Ok(Self(digest))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}

/// Validated account data that has not been persisted yet
///
/// The store assigns the identifier when it persists the account.
#[derive(Debug, Clone)]
pub struct NewAccount {
    name: String,
    email: String,
    password_hash: PasswordHash,
    created_at: DateTime<Utc>,
}

impl NewAccount {
    /// Validates name and email and stamps the creation time
    ///
    /// # Arguments
    ///
    /// * `name` - Display name, 2 to 100 characters
    /// * `email` - Email address, 5 to 200 characters
    /// * `password_hash` - Digest produced by the credential codec
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: PasswordHash,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let email = email.into();
        validate_name(&name)?;
        validate_email(&email)?;

        Ok(Self {
            name,
            email,
            password_hash,
            // Stores keep millisecond precision
            created_at: Utc::now().trunc_subsecs(3),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Attach the store-assigned identifier
    pub fn into_account(self, id: AccountId) -> Account {
        Account {
            id,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            created_at: self.created_at,
        }
    }
}

/// A persisted account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    name: String,
    email: String,
    password_hash: PasswordHash,
    created_at: DateTime<Utc>,
}

impl Account {
    /// Rebuild an account read back from a store, re-checking its invariants
    pub fn restore(
        id: AccountId,
        name: String,
        email: String,
        password_hash: PasswordHash,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        validate_name(&name)?;
        validate_email(&email)?;
        Ok(Self {
            id,
            name,
            email,
            password_hash,
            created_at,
        })
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replace name and email; nothing changes unless both are valid
    pub fn update_profile(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let name = name.into();
        let email = email.into();
        validate_name(&name)?;
        validate_email(&email)?;

        self.name = name;
        self.email = email;
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if !validators::not_empty(name) {
        return Err(ValidationError::RequiredField {
            field: "name".to_string(),
        });
    }
    if !validators::length_between(name, limits::NAME_MIN, limits::NAME_MAX) {
        return Err(ValidationError::InvalidLength {
            field: "name".to_string(),
            min: limits::NAME_MIN,
            max: limits::NAME_MAX,
        });
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    if !validators::not_empty(email) {
        return Err(ValidationError::RequiredField {
            field: "email".to_string(),
        });
    }
    if !validators::length_between(email, limits::EMAIL_MIN, limits::EMAIL_MAX) {
        return Err(ValidationError::InvalidLength {
            field: "email".to_string(),
            min: limits::EMAIL_MIN,
            max: limits::EMAIL_MAX,
        });
    }
    if !validators::is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}
