use serde::{Deserialize, Serialize};
use validator::Validate;

use acct_core::domain::AuthResult;

use super::user_dto::UserResponse;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 100, message = "name must be between 2 and 100 characters"))]
    pub name: String,
    #[validate(
        email(message = "invalid email format"),
        length(min = 5, max = 200, message = "email must be between 5 and 200 characters")
    )]
    pub email: String,
    #[validate(length(min = 8, max = 64, message = "password must be between 8 and 64 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 200, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "refresh_token is required"))]
    pub refresh_token: String,
}

/// Token pair handed back by register, login and refresh
///
/// `user` is `null` for a refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: Option<UserResponse>,
}

impl From<AuthResult> for AuthResponse {
    fn from(result: AuthResult) -> Self {
        Self {
            access_token: result.access_token,
            refresh_token: result.refresh_token,
            user: result.account.as_ref().map(UserResponse::from),
        }
    }
}
