//! Tests for the access guard

use std::sync::Arc;

use crate::domain::entities::account::{AccountId, NewAccount, PasswordHash};
use crate::errors::{AuthError, DomainError, ErrorKind};
use crate::repositories::{AccountRepository, InMemoryAccountRepository};
use crate::services::guard::{AccessGuard, BearerAuthorizer};
use crate::services::token::{TokenService, TokenServiceConfig};

struct Fixture {
    repo: Arc<InMemoryAccountRepository>,
    tokens: Arc<TokenService>,
    guard: AccessGuard<InMemoryAccountRepository>,
}

fn fixture() -> Fixture {
    let repo = Arc::new(InMemoryAccountRepository::new());
    let tokens = Arc::new(TokenService::new(TokenServiceConfig::new("guard-secret")).unwrap());
    let guard = AccessGuard::new(repo.clone(), tokens.clone());
    Fixture { repo, tokens, guard }
}

async fn registered(fixture: &Fixture) -> (AccountId, String) {
    let hash = PasswordHash::new(format!("$2b$04${}", "g".repeat(53))).unwrap();
    let account = fixture
        .repo
        .create(NewAccount::new("Ann", "ann@x.com", hash).unwrap())
        .await
        .unwrap();
    let token = fixture.tokens.issue_access_token(&account).unwrap();
    (account.id(), format!("Bearer {token}"))
}

#[tokio::test]
async fn test_valid_bearer_yields_account() {
    let fixture = fixture();
    let (id, header) = registered(&fixture).await;

    assert_eq!(fixture.guard.authorize(Some(&header)).await.unwrap(), id);
}

#[tokio::test]
async fn test_missing_header_is_bad_request() {
    let fixture = fixture();
    let err = fixture.guard.authorize(None).await.unwrap_err();

    assert!(matches!(
        err,
        DomainError::Auth(AuthError::MissingAuthorizationHeader)
    ));
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[tokio::test]
async fn test_non_bearer_scheme_is_bad_request() {
    let fixture = fixture();
    let (_, header) = registered(&fixture).await;
    let basic = header.replacen("Bearer ", "Basic ", 1);

    let err = fixture.guard.authorize(Some(&basic)).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::InvalidBearerToken)));
}

#[tokio::test]
async fn test_refresh_token_as_bearer_is_unauthorized() {
    let fixture = fixture();
    let (id, _) = registered(&fixture).await;
    let refresh = fixture.tokens.issue_refresh_token(id).unwrap();

    let err = fixture
        .guard
        .authorize(Some(&format!("Bearer {refresh}")))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
}

#[tokio::test]
async fn test_deleted_account_is_locked_out() {
    let fixture = fixture();
    let (id, header) = registered(&fixture).await;
    fixture.repo.delete(id).await.unwrap();

    let err = fixture.guard.authorize(Some(&header)).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::UserNotFound)));
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
}

#[tokio::test]
async fn test_guard_is_usable_as_trait_object() {
    let fixture = fixture();
    let (id, header) = registered(&fixture).await;
    let authorizer: Arc<dyn BearerAuthorizer> = Arc::new(fixture.guard);

    assert_eq!(authorizer.authorize(Some(&header)).await.unwrap(), id);
}
