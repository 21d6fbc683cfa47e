//! Outcome of a successful register, login or refresh.

use crate::domain::entities::account::Account;

/// Tokens handed back to the caller, plus the account when one was loaded
///
/// A refresh carries no account and returns the presented refresh token as is.
#[derive(Debug, Clone)]
pub struct AuthResult {
    /// Signed access token
    pub access_token: String,

    /// Signed refresh token
    pub refresh_token: String,

    /// The authenticated account, absent for refresh
    pub account: Option<Account>,
}

impl AuthResult {
    pub fn new(access_token: String, refresh_token: String, account: Option<Account>) -> Self {
        Self {
            access_token,
            refresh_token,
            account,
        }
    }
}
