//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

pub use types::{AuthError, ErrorKind, TokenError, ValidationError};

use acct_shared::errors::{error_codes, safe_messages};
use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Resource already exists: {resource}")]
    AlreadyExists { resource: String },

    #[error("Service unavailable: {message}")]
    Unavailable { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }

    pub fn already_exists(resource: impl Into<String>) -> Self {
        DomainError::AlreadyExists {
            resource: resource.into(),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        DomainError::Unavailable {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }

    /// Taxonomy class used by the transport layer
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::NotFound { .. } => ErrorKind::NotFound,
            DomainError::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            DomainError::Unavailable { .. } => ErrorKind::Unavailable,
            DomainError::Internal { .. } => ErrorKind::Internal,
            DomainError::Auth(e) => e.kind(),
            DomainError::Token(e) => e.kind(),
            DomainError::ValidationErr(_) => ErrorKind::InvalidInput,
        }
    }

    /// Stable code reported to callers
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// Message that is safe to return to callers
    ///
    /// Internal and transient failures never expose their cause.
    pub fn public_message(&self) -> String {
        match self.kind() {
            ErrorKind::Internal => safe_messages::INTERNAL.to_string(),
            ErrorKind::Unavailable => safe_messages::UNAVAILABLE.to_string(),
            _ => self.to_string(),
        }
    }
}

impl ErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => error_codes::INVALID_INPUT,
            ErrorKind::InvalidCredentials => error_codes::INVALID_CREDENTIALS,
            ErrorKind::Unauthorized => error_codes::UNAUTHORIZED,
            ErrorKind::AlreadyExists => error_codes::ALREADY_EXISTS,
            ErrorKind::NotFound => error_codes::NOT_FOUND,
            ErrorKind::Unavailable => error_codes::SERVICE_UNAVAILABLE,
            ErrorKind::Internal => error_codes::INTERNAL_ERROR,
        }
    }
}
