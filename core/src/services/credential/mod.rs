//! Password hashing and verification with bcrypt
//!
//! Hashing is deliberately slow; async callers go through the `*_blocking`
//! helpers, which move the work onto tokio's blocking pool.

use std::sync::Arc;

use bcrypt::{hash, verify, DEFAULT_COST};
use tokio::sync::OnceCell;
use tracing::error;

use crate::domain::entities::account::PasswordHash;
use crate::errors::{AuthError, DomainError, DomainResult};

/// Password hashed once per codec to give unknown accounts a digest to check against
const DECOY_PASSWORD: &str = "decoy-password-never-matches";

/// Self-salting password codec
///
/// Clones share the decoy digest used by [`Self::reject_blocking`].
#[derive(Debug, Clone)]
pub struct CredentialCodec {
    cost: u32,
    decoy: Arc<OnceCell<PasswordHash>>,
}

impl Default for CredentialCodec {
    fn default() -> Self {
        Self::with_cost(DEFAULT_COST)
    }
}

impl CredentialCodec {
    /// Codec with an explicit bcrypt work factor
    pub fn with_cost(cost: u32) -> Self {
        Self {
            cost,
            decoy: Arc::new(OnceCell::new()),
        }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a raw password; every call draws a fresh salt
    pub fn hash(&self, password: &str) -> DomainResult<PasswordHash> {
        let digest = hash(password, self.cost).map_err(|e| {
            error!(error = %e, "password hashing failed");
            DomainError::internal("password hashing failed")
        })?;

        PasswordHash::new(digest).map_err(|_| DomainError::internal("unexpected digest length"))
    }

    /// Check a candidate password against a stored digest
    ///
    /// Fails closed: a mismatch and a malformed digest are both
    /// `InvalidCredentials`.
    pub fn verify(&self, digest: &PasswordHash, candidate: &str) -> DomainResult<()> {
        match verify(candidate, digest.as_str()) {
            Ok(true) => Ok(()),
            Ok(false) | Err(_) => Err(AuthError::InvalidCredentials.into()),
        }
    }

    /// [`Self::hash`] on the blocking thread pool
    pub async fn hash_blocking(&self, password: String) -> DomainResult<PasswordHash> {
        let codec = self.clone();
        tokio::task::spawn_blocking(move || codec.hash(&password))
            .await
            .map_err(|e| {
                error!(error = %e, "password hashing task failed");
                DomainError::internal("password hashing task failed")
            })?
    }

    /// [`Self::verify`] on the blocking thread pool
    pub async fn verify_blocking(&self, digest: PasswordHash, candidate: String) -> DomainResult<()> {
        let codec = self.clone();
        tokio::task::spawn_blocking(move || codec.verify(&digest, &candidate))
            .await
            .map_err(|e| {
                error!(error = %e, "password verification task failed");
                DomainError::internal("password verification task failed")
            })?
    }

    /// Spend one verification on a decoy digest of the same cost, then fail
    ///
    /// Used when there is no stored digest to check, so the caller's
    /// rejection takes as long as a wrong password does. Always
    /// `InvalidCredentials`, unless the decoy itself cannot be produced.
    pub async fn reject_blocking(&self, candidate: String) -> DomainResult<()> {
        let decoy = self
            .decoy
            .get_or_try_init(|| self.hash_blocking(DECOY_PASSWORD.to_string()))
            .await?
            .clone();

        // A candidate equal to the decoy password still fails
        let _ = self.verify_blocking(decoy, candidate).await;
        Err(AuthError::InvalidCredentials.into())
    }

    /// Whether the decoy digest has been computed
    pub fn has_decoy(&self) -> bool {
        self.decoy.initialized()
    }
}
