//! Access guard: turns an `Authorization` header into an account identifier
//!
//! Every check runs on every request, including the account existence check,
//! so a deleted account is locked out even while its tokens are unexpired.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::entities::account::AccountId;
use crate::domain::entities::token::TokenKind;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::AccountRepository;
use crate::services::token::TokenService;

#[cfg(test)]
mod tests;

/// Scheme prefix expected in the `Authorization` header
pub const BEARER_PREFIX: &str = "Bearer ";

/// Object-safe entry point used by the HTTP middleware
#[async_trait]
pub trait BearerAuthorizer: Send + Sync {
    /// Authorize a raw `Authorization` header value
    ///
    /// # Returns
    ///
    /// * `Ok(AccountId)` - The authenticated account
    /// * `Err(DomainError)` - `InvalidInput` for a missing or malformed header,
    ///   `Unauthorized` for a bad token or a vanished account
    async fn authorize(&self, authorization: Option<&str>) -> DomainResult<AccountId>;
}

/// Access guard backed by the token service and the account store
pub struct AccessGuard<R>
where
    R: AccountRepository,
{
    repository: Arc<R>,
    token_service: Arc<TokenService>,
}

impl<R> AccessGuard<R>
where
    R: AccountRepository,
{
    pub fn new(repository: Arc<R>, token_service: Arc<TokenService>) -> Self {
        Self {
            repository,
            token_service,
        }
    }
}

#[async_trait]
impl<R> BearerAuthorizer for AccessGuard<R>
where
    R: AccountRepository,
{
    async fn authorize(&self, authorization: Option<&str>) -> DomainResult<AccountId> {
        // Step 1: Header present
        let header = authorization.ok_or(AuthError::MissingAuthorizationHeader)?;

        // Step 2: Bearer scheme
        let token = header
            .strip_prefix(BEARER_PREFIX)
            .ok_or(AuthError::InvalidBearerToken)?;

        // Step 3: Valid access token
        let claims = self
            .token_service
            .verify_typed(token, TokenKind::Access)?;
        let account_id = claims.account_id()?;

        // Step 4: Account still exists
        if !self.repository.exists_by_id(account_id).await? {
            warn!(account_id = %account_id, "token presented for missing account");
            return Err(AuthError::UserNotFound.into());
        }

        debug!(account_id = %account_id, "request authorized");
        Ok(account_id)
    }
}
