//! # Account Service Core
//!
//! Core business logic and domain layer for the account service.
//! This crate contains domain entities, business services, the account
//! repository contract with an in-memory store, and error types.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    AccessClaims, Account, AccountId, AuthResult, Claims, ListAccountsQuery, NewAccount, PasswordHash,
    RefreshClaims, TokenKind,
};
pub use errors::{AuthError, DomainError, DomainResult, ErrorKind, TokenError, ValidationError};
pub use repositories::{AccountRepository, InMemoryAccountRepository};
pub use services::{
    AccessGuard, AccountService, AuthService, BearerAuthorizer, CredentialCodec, TokenService,
    TokenServiceConfig, UserCountReporter, UserCountReporterConfig, BEARER_PREFIX,
};
