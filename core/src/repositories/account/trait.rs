//! Account repository trait defining the interface for account persistence.
//!
//! The trait is async-first and object-safe so services can hold any store
//! behind a generic parameter or an `Arc<dyn AccountRepository>`.

use async_trait::async_trait;

use crate::domain::entities::account::{Account, AccountId, NewAccount};
use crate::domain::value_objects::ListAccountsQuery;
use crate::errors::DomainError;

/// Repository trait for account persistence operations
///
/// Absence is never an error for lookups: `find_*` return `Ok(None)`.
/// Implementations map their own failures onto `DomainError`: a unique email
/// violation is `AlreadyExists`, timeouts and pool exhaustion are
/// `Unavailable`.
///
/// # Example
/// ```no_run
/// # use acct_core::repositories::AccountRepository;
/// # use acct_core::domain::entities::AccountId;
/// # async fn example(repo: &impl AccountRepository, id: AccountId) -> Result<(), Box<dyn std::error::Error>> {
/// match repo.find_by_id(id).await? {
///     Some(account) => println!("found {}", account.email()),
///     None => println!("no such account"),
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Total number of stored accounts
    async fn count(&self) -> Result<u64, DomainError>;

    /// One page of accounts ordered by identifier
    ///
    /// # Arguments
    /// * `query` - Cursor, page size and direction
    ///
    /// # Returns
    /// * `Ok(Vec<Account>)` - At most `query.limit` accounts, cursor row excluded
    async fn list(&self, query: &ListAccountsQuery) -> Result<Vec<Account>, DomainError>;

    /// Persist a new account and assign its identifier
    ///
    /// # Returns
    /// * `Ok(Account)` - The stored account
    /// * `Err(DomainError::AlreadyExists)` - The email is already taken
    async fn create(&self, account: NewAccount) -> Result<Account, DomainError>;

    /// Find an account by its identifier
    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, DomainError>;

    /// Find an account by its exact email
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Overwrite name and email of an existing account
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - No account with that identifier
    /// * `Err(DomainError::AlreadyExists)` - The new email belongs to another account
    async fn update(&self, account: &Account) -> Result<(), DomainError>;

    /// Delete an account
    ///
    /// # Returns
    /// * `Ok(true)` - Account was deleted
    /// * `Ok(false)` - Account not found
    async fn delete(&self, id: AccountId) -> Result<bool, DomainError>;

    /// Check whether an account still exists
    async fn exists_by_id(&self, id: AccountId) -> Result<bool, DomainError>;
}
