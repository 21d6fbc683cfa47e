//! Account service implementation

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::domain::entities::account::{Account, AccountId};
use crate::domain::value_objects::ListAccountsQuery;
use crate::errors::{DomainError, DomainResult, ErrorKind};
use crate::repositories::AccountRepository;

/// Service for everything done to an account after registration
pub struct AccountService<R>
where
    R: AccountRepository,
{
    repository: Arc<R>,
}

impl<R> AccountService<R>
where
    R: AccountRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Total number of accounts
    pub async fn count(&self) -> DomainResult<u64> {
        self.repository.count().await.map_err(|e| {
            error!(error = %e, "failed to count accounts");
            e
        })
    }

    /// One page of accounts
    pub async fn list(&self, query: &ListAccountsQuery) -> DomainResult<Vec<Account>> {
        self.repository.list(query).await.map_err(|e| {
            error!(error = %e, "failed to list accounts");
            e
        })
    }

    /// Fetch an account or fail with `NotFound`
    pub async fn get(&self, id: AccountId) -> DomainResult<Account> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("user"))
    }

    /// Replace name and email of an account
    ///
    /// # Arguments
    ///
    /// * `id` - Account to update
    /// * `name` - New display name
    /// * `email` - New email; must not belong to another account
    ///
    /// # Returns
    ///
    /// The updated account. Identifier, password hash and creation time are
    /// left untouched.
    pub async fn update_profile(&self, id: AccountId, name: &str, email: &str) -> DomainResult<Account> {
        // Step 1: Load the current state
        let mut account = self.get(id).await?;

        // Step 2: Apply and validate the new values
        account.update_profile(name, email).map_err(|e| {
            warn!(account_id = %id, error = %e, "profile update rejected");
            DomainError::from(e)
        })?;

        // Step 3: The email must stay unique
        if let Some(owner) = self.repository.find_by_email(email).await? {
            if owner.id() != id {
                warn!(account_id = %id, "profile update rejected: email taken");
                return Err(DomainError::already_exists("user"));
            }
        }

        // Step 4: Persist
        self.repository.update(&account).await.map_err(|e| {
            if e.kind() != ErrorKind::AlreadyExists {
                error!(account_id = %id, error = %e, "failed to save profile");
            }
            e
        })?;

        info!(account_id = %id, "profile updated");
        Ok(account)
    }

    /// Delete an account; deleting an absent account is `NotFound`
    pub async fn delete(&self, id: AccountId) -> DomainResult<()> {
        let deleted = self.repository.delete(id).await.map_err(|e| {
            error!(account_id = %id, error = %e, "failed to delete account");
            e
        })?;

        if !deleted {
            return Err(DomainError::not_found("user"));
        }

        info!(account_id = %id, "account deleted");
        Ok(())
    }
}
