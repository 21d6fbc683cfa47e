//! MySQL implementation of the AccountRepository trait.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::{mysql::MySqlRow, MySqlPool, Row};

use acct_core::domain::entities::account::{Account, AccountId, NewAccount, PasswordHash};
use acct_core::domain::value_objects::ListAccountsQuery;
use acct_core::errors::DomainError;
use acct_core::repositories::AccountRepository;

use crate::database::map_sqlx_error;

const SELECT_COLUMNS: &str = "SELECT id, name, email, password_hash, created_at FROM accounts";

/// MySQL implementation of AccountRepository
///
/// Identifiers are stored in their hyphenated text form; ordering by the `id`
/// column therefore matches identifier ordering.
pub struct MySqlAccountRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlAccountRepository {
    /// Create a new MySQL account repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to an Account entity
    fn row_to_account(row: &MySqlRow) -> Result<Account, DomainError> {
        let id: String = row.try_get("id").map_err(map_sqlx_error)?;
        let name: String = row.try_get("name").map_err(map_sqlx_error)?;
        let email: String = row.try_get("email").map_err(map_sqlx_error)?;
        let password_hash: String = row.try_get("password_hash").map_err(map_sqlx_error)?;
        let created_at: NaiveDateTime = row.try_get("created_at").map_err(map_sqlx_error)?;

        let corrupt = |field: &str| DomainError::internal(format!("corrupt account row: {field}"));

        Account::restore(
            AccountId::parse(&id).map_err(|_| corrupt("id"))?,
            name,
            email,
            PasswordHash::new(password_hash).map_err(|_| corrupt("password_hash"))?,
            created_at.and_utc(),
        )
        .map_err(|_| corrupt("profile"))
    }

    fn list_sql(query: &ListAccountsQuery) -> String {
        let order = query.order.to_string();
        match (query.cursor.is_some(), query.order.is_ascending()) {
            (false, _) => format!("{SELECT_COLUMNS} ORDER BY id {order} LIMIT ?"),
            (true, true) => format!("{SELECT_COLUMNS} WHERE id > ? ORDER BY id {order} LIMIT ?"),
            (true, false) => format!("{SELECT_COLUMNS} WHERE id < ? ORDER BY id {order} LIMIT ?"),
        }
    }
}

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn count(&self) -> Result<u64, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM accounts")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(count.max(0) as u64)
    }

    async fn list(&self, query: &ListAccountsQuery) -> Result<Vec<Account>, DomainError> {
        let sql = Self::list_sql(query);

        let mut q = sqlx::query(&sql);
        if let Some(cursor) = query.cursor {
            q = q.bind(cursor.to_string());
        }
        let rows = q
            .bind(query.limit.as_i64())
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter().map(Self::row_to_account).collect()
    }

    async fn create(&self, account: NewAccount) -> Result<Account, DomainError> {
        let account = account.into_account(AccountId::generate());

        sqlx::query(
            r#"
            INSERT INTO accounts (id, name, email, password_hash, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(account.id().to_string())
        .bind(account.name())
        .bind(account.email())
        .bind(account.password_hash().as_str())
        .bind(account.created_at().naive_utc())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(account)
    }

    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, DomainError> {
        let sql = format!("{SELECT_COLUMNS} WHERE id = ? LIMIT 1");
        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.as_ref().map(Self::row_to_account).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let sql = format!("{SELECT_COLUMNS} WHERE email = ? LIMIT 1");
        let row = sqlx::query(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.as_ref().map(Self::row_to_account).transpose()
    }

    async fn update(&self, account: &Account) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE accounts SET name = ?, email = ? WHERE id = ?")
            .bind(account.name())
            .bind(account.email())
            .bind(account.id().to_string())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        // MySQL reports changed rows, so an unchanged profile also yields zero
        if result.rows_affected() == 0 && !self.exists_by_id(account.id()).await? {
            return Err(DomainError::not_found("user"));
        }

        Ok(())
    }

    async fn delete(&self, id: AccountId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists_by_id(&self, id: AccountId) -> Result<bool, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM accounts WHERE id = ?")
            .bind(id.to_string())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(count > 0)
    }
}
