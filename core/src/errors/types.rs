//! Error type definitions for authentication, token handling and validation

use thiserror::Error;

/// Error classes every failure is reported as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    InvalidCredentials,
    Unauthorized,
    AlreadyExists,
    NotFound,
    Unavailable,
    Internal,
}

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// Login failed; never says whether the email or the password was wrong
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("authorization header missing")]
    MissingAuthorizationHeader,

    #[error("invalid bearer token")]
    InvalidBearerToken,

    /// The token is valid but its account no longer exists
    #[error("user not found")]
    UserNotFound,

    #[error("user already exists")]
    UserAlreadyExists,
}

impl AuthError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials => ErrorKind::InvalidCredentials,
            AuthError::MissingAuthorizationHeader | AuthError::InvalidBearerToken => {
                ErrorKind::InvalidInput
            }
            AuthError::UserNotFound => ErrorKind::Unauthorized,
            AuthError::UserAlreadyExists => ErrorKind::AlreadyExists,
        }
    }
}

/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("token expired")]
    TokenExpired,

    #[error("invalid token format")]
    InvalidTokenFormat,

    #[error("invalid token signature")]
    InvalidSignature,

    #[error("expected {expected} token, got {actual}")]
    WrongTokenType {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("invalid token subject")]
    InvalidSubject,

    #[error("token generation failed: {message}")]
    TokenGenerationFailed { message: String },
}

impl TokenError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TokenError::TokenGenerationFailed { .. } => ErrorKind::Internal,
            _ => ErrorKind::Unauthorized,
        }
    }
}

/// Validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{field} is required")]
    RequiredField { field: String },

    #[error("{field} must be between {min} and {max} characters")]
    InvalidLength {
        field: String,
        min: usize,
        max: usize,
    },

    #[error("invalid email")]
    InvalidEmail,

    #[error("invalid {field} format")]
    InvalidFormat { field: String },

    #[error("invalid cursor")]
    InvalidCursor,
}
