//! Unit tests for domain error types

use crate::errors::{AuthError, DomainError, ErrorKind, TokenError, ValidationError};

#[test]
fn test_kinds_map_to_stable_codes() {
    let cases = [
        (DomainError::from(ValidationError::InvalidEmail), "INVALID_INPUT"),
        (DomainError::from(AuthError::InvalidCredentials), "INVALID_CREDENTIALS"),
        (DomainError::from(TokenError::TokenExpired), "UNAUTHORIZED"),
        (DomainError::from(AuthError::UserNotFound), "UNAUTHORIZED"),
        (DomainError::already_exists("user"), "ALREADY_EXISTS"),
        (DomainError::not_found("user"), "NOT_FOUND"),
        (DomainError::unavailable("pool timed out"), "SERVICE_UNAVAILABLE"),
        (DomainError::internal("boom"), "INTERNAL_ERROR"),
    ];

    for (error, code) in cases {
        assert_eq!(error.code(), code, "{error:?}");
    }
}

#[test]
fn test_bearer_problems_are_invalid_input() {
    assert_eq!(
        DomainError::from(AuthError::MissingAuthorizationHeader).kind(),
        ErrorKind::InvalidInput
    );
    assert_eq!(
        DomainError::from(AuthError::InvalidBearerToken).public_message(),
        "invalid bearer token"
    );
}

#[test]
fn test_token_generation_failure_is_internal() {
    let error = DomainError::from(TokenError::TokenGenerationFailed {
        message: "serializer exploded".to_string(),
    });
    assert_eq!(error.kind(), ErrorKind::Internal);
}

#[test]
fn test_internal_causes_are_not_exposed() {
    let error = DomainError::internal("connection string mysql://root:pw@db");
    assert!(!error.public_message().contains("mysql"));

    let error = DomainError::unavailable("pool timed out");
    assert!(!error.public_message().contains("pool"));
}

#[test]
fn test_specific_messages_are_surfaced() {
    let error = DomainError::from(ValidationError::InvalidLength {
        field: "name".to_string(),
        min: 2,
        max: 100,
    });
    assert_eq!(
        error.public_message(),
        "name must be between 2 and 100 characters"
    );
}
