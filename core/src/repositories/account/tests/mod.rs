//! Unit tests for the in-memory account repository

use acct_shared::types::{PageLimit, SortOrder};

use crate::domain::entities::account::{Account, AccountId, NewAccount, PasswordHash};
use crate::domain::value_objects::ListAccountsQuery;
use crate::errors::{DomainError, ErrorKind};
use crate::repositories::account::{AccountRepository, InMemoryAccountRepository};

fn new_account(name: &str, email: &str) -> NewAccount {
    let hash = PasswordHash::new(format!("$2b$04${}", "h".repeat(53))).unwrap();
    NewAccount::new(name, email, hash).unwrap()
}

async fn seed(repo: &InMemoryAccountRepository, n: usize) -> Vec<AccountId> {
    let mut ids = Vec::new();
    for i in 0..n {
        let account = repo
            .create(new_account(&format!("User {i}"), &format!("user{i}@x.com")))
            .await
            .unwrap();
        ids.push(account.id());
    }
    ids.sort();
    ids
}

fn ids(page: &[Account]) -> Vec<AccountId> {
    page.iter().map(Account::id).collect()
}

#[tokio::test]
async fn test_create_assigns_id_and_finds() {
    let repo = InMemoryAccountRepository::new();

    let created = repo.create(new_account("Ann", "ann@x.com")).await.unwrap();

    let by_id = repo.find_by_id(created.id()).await.unwrap();
    assert_eq!(by_id.as_ref(), Some(&created));

    let by_email = repo.find_by_email("ann@x.com").await.unwrap();
    assert_eq!(by_email.map(|a| a.id()), Some(created.id()));

    assert!(repo.exists_by_id(created.id()).await.unwrap());
    assert!(repo.find_by_email("bob@x.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_email_is_already_exists() {
    let repo = InMemoryAccountRepository::new();
    repo.create(new_account("Ann", "ann@x.com")).await.unwrap();

    let err = repo.create(new_account("Other", "ann@x.com")).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_update_overwrites_profile_only() {
    let repo = InMemoryAccountRepository::new();
    let mut account = repo.create(new_account("Ann", "ann@x.com")).await.unwrap();

    account.update_profile("Annie", "annie@x.com").unwrap();
    repo.update(&account).await.unwrap();

    let stored = repo.find_by_id(account.id()).await.unwrap().unwrap();
    assert_eq!(stored.name(), "Annie");
    assert_eq!(stored.email(), "annie@x.com");
    assert_eq!(stored.created_at(), account.created_at());
}

#[tokio::test]
async fn test_update_rejects_email_of_other_account() {
    let repo = InMemoryAccountRepository::new();
    repo.create(new_account("Ann", "ann@x.com")).await.unwrap();
    let mut bob = repo.create(new_account("Bob", "bob@x.com")).await.unwrap();

    bob.update_profile("Bob", "ann@x.com").unwrap();
    let err = repo.update(&bob).await.unwrap_err();
    assert!(matches!(err, DomainError::AlreadyExists { .. }));
}

#[tokio::test]
async fn test_update_missing_account_is_not_found() {
    let repo = InMemoryAccountRepository::new();
    let ghost = new_account("Ghost", "ghost@x.com").into_account(AccountId::generate());

    let err = repo.update(&ghost).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_delete_reports_presence() {
    let repo = InMemoryAccountRepository::new();
    let account = repo.create(new_account("Ann", "ann@x.com")).await.unwrap();

    assert!(repo.delete(account.id()).await.unwrap());
    assert!(!repo.delete(account.id()).await.unwrap());
    assert!(!repo.exists_by_id(account.id()).await.unwrap());
}

#[tokio::test]
async fn test_list_ascending_with_exclusive_cursor() {
    let repo = InMemoryAccountRepository::new();
    let all = seed(&repo, 5).await;

    let first = ListAccountsQuery::new(None, PageLimit::new(2), SortOrder::Asc);
    let page = repo.list(&first).await.unwrap();
    assert_eq!(ids(&page), all[..2].to_vec());

    let next = ListAccountsQuery::new(Some(all[1]), PageLimit::new(2), SortOrder::Asc);
    let page = repo.list(&next).await.unwrap();
    assert_eq!(ids(&page), all[2..4].to_vec());
}

#[tokio::test]
async fn test_list_descending_with_exclusive_cursor() {
    let repo = InMemoryAccountRepository::new();
    let all = seed(&repo, 4).await;

    let query = ListAccountsQuery::new(Some(all[3]), PageLimit::new(10), SortOrder::Desc);
    let page = repo.list(&query).await.unwrap();
    assert_eq!(ids(&page), vec![all[2], all[1], all[0]]);
}

#[tokio::test]
async fn test_list_respects_limit_ceiling() {
    let repo = InMemoryAccountRepository::new();
    seed(&repo, 12).await;

    let query = ListAccountsQuery::new(None, PageLimit::new(0), SortOrder::Desc);
    assert_eq!(repo.list(&query).await.unwrap().len(), 10);
}
