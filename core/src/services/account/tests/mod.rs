//! Tests for the account service

use std::sync::Arc;

use acct_shared::types::{PageLimit, SortOrder};

use crate::domain::entities::account::{AccountId, NewAccount, PasswordHash};
use crate::domain::value_objects::ListAccountsQuery;
use crate::errors::ErrorKind;
use crate::repositories::{AccountRepository, InMemoryAccountRepository};
use crate::services::account::AccountService;

fn new_account(name: &str, email: &str) -> NewAccount {
    let hash = PasswordHash::new(format!("$2b$04${}", "p".repeat(53))).unwrap();
    NewAccount::new(name, email, hash).unwrap()
}

async fn setup() -> (Arc<InMemoryAccountRepository>, AccountService<InMemoryAccountRepository>) {
    let repo = Arc::new(InMemoryAccountRepository::new());
    let service = AccountService::new(repo.clone());
    (repo, service)
}

#[tokio::test]
async fn test_get_missing_is_not_found() {
    let (_, service) = setup().await;
    let err = service.get(AccountId::generate()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_update_profile_keeps_identity_and_hash() {
    let (repo, service) = setup().await;
    let ann = repo.create(new_account("Ann", "ann@x.com")).await.unwrap();

    let updated = service
        .update_profile(ann.id(), "Annie", "annie@x.com")
        .await
        .unwrap();

    assert_eq!(updated.id(), ann.id());
    assert_eq!(updated.password_hash(), ann.password_hash());
    assert_eq!(updated.created_at(), ann.created_at());
    assert_eq!(service.get(ann.id()).await.unwrap().name(), "Annie");
}

#[tokio::test]
async fn test_update_profile_with_own_email_is_allowed() {
    let (repo, service) = setup().await;
    let ann = repo.create(new_account("Ann", "ann@x.com")).await.unwrap();

    let updated = service
        .update_profile(ann.id(), "Ann Smith", "ann@x.com")
        .await
        .unwrap();
    assert_eq!(updated.name(), "Ann Smith");
}

#[tokio::test]
async fn test_update_profile_errors() {
    let (repo, service) = setup().await;
    let ann = repo.create(new_account("Ann", "ann@x.com")).await.unwrap();
    repo.create(new_account("Bob", "bob@x.com")).await.unwrap();

    let taken = service
        .update_profile(ann.id(), "Ann", "bob@x.com")
        .await
        .unwrap_err();
    assert_eq!(taken.kind(), ErrorKind::AlreadyExists);

    let invalid = service
        .update_profile(ann.id(), "A", "ann@x.com")
        .await
        .unwrap_err();
    assert_eq!(invalid.kind(), ErrorKind::InvalidInput);

    let missing = service
        .update_profile(AccountId::generate(), "Ghost", "ghost@x.com")
        .await
        .unwrap_err();
    assert_eq!(missing.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_delete_then_delete_again() {
    let (repo, service) = setup().await;
    let ann = repo.create(new_account("Ann", "ann@x.com")).await.unwrap();

    service.delete(ann.id()).await.unwrap();
    let err = service.delete(ann.id()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(service.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_list_and_count() {
    let (repo, service) = setup().await;
    for i in 0..3 {
        repo.create(new_account(&format!("User {i}"), &format!("u{i}@x.com")))
            .await
            .unwrap();
    }

    assert_eq!(service.count().await.unwrap(), 3);

    let query = ListAccountsQuery::new(None, PageLimit::new(2), SortOrder::Asc);
    assert_eq!(service.list(&query).await.unwrap().len(), 2);
}
