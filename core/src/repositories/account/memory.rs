//! In-memory implementation of AccountRepository
//!
//! Used by tests and by the server when no database is configured.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::account::{Account, AccountId, NewAccount};
use crate::domain::value_objects::ListAccountsQuery;
use crate::errors::DomainError;

use super::trait_::AccountRepository;

/// Account store kept in a map ordered by identifier
#[derive(Clone, Default)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<BTreeMap<AccountId, Account>>>,
}

impl InMemoryAccountRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn count(&self) -> Result<u64, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.len() as u64)
    }

    async fn list(&self, query: &ListAccountsQuery) -> Result<Vec<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        let limit = query.limit.get() as usize;

        let page = if query.order.is_ascending() {
            accounts
                .values()
                .filter(|a| query.is_after_cursor(&a.id()))
                .take(limit)
                .cloned()
                .collect()
        } else {
            accounts
                .values()
                .rev()
                .filter(|a| query.is_after_cursor(&a.id()))
                .take(limit)
                .cloned()
                .collect()
        };

        Ok(page)
    }

    async fn create(&self, account: NewAccount) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        if accounts.values().any(|a| a.email() == account.email()) {
            return Err(DomainError::already_exists("user"));
        }

        let account = account.into_account(AccountId::generate());
        accounts.insert(account.id(), account.clone());
        Ok(account)
    }

    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|a| a.email() == email).cloned())
    }

    async fn update(&self, account: &Account) -> Result<(), DomainError> {
        let mut accounts = self.accounts.write().await;

        if accounts
            .values()
            .any(|a| a.id() != account.id() && a.email() == account.email())
        {
            return Err(DomainError::already_exists("user"));
        }

        match accounts.get_mut(&account.id()) {
            Some(stored) => {
                stored
                    .update_profile(account.name(), account.email())
                    .map_err(DomainError::from)?;
                Ok(())
            }
            None => Err(DomainError::not_found("user")),
        }
    }

    async fn delete(&self, id: AccountId) -> Result<bool, DomainError> {
        let mut accounts = self.accounts.write().await;
        Ok(accounts.remove(&id).is_some())
    }

    async fn exists_by_id(&self, id: AccountId) -> Result<bool, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.contains_key(&id))
    }
}
