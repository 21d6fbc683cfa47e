use serde::{Deserialize, Serialize};
use validator::Validate;

use acct_core::domain::Account;

/// Public view of an account; never carries the password hash
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    /// Creation time in Unix milliseconds
    pub created_at: i64,
}

impl From<&Account> for UserResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id().to_string(),
            email: account.email().to_string(),
            name: account.name().to_string(),
            created_at: account.created_at().timestamp_millis(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 2, max = 100, message = "name must be between 2 and 100 characters"))]
    pub name: String,
    #[validate(
        email(message = "invalid email format"),
        length(min = 5, max = 200, message = "email must be between 5 and 200 characters")
    )]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountResponse {
    pub count: u64,
}
