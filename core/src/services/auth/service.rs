//! Main authentication service implementation

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};

use crate::domain::entities::account::{Account, NewAccount};
use crate::domain::entities::token::TokenKind;
use crate::domain::value_objects::AuthResult;
use crate::errors::{AuthError, DomainError, DomainResult, ErrorKind};
use crate::repositories::AccountRepository;
use crate::services::credential::CredentialCodec;
use crate::services::token::TokenService;

/// Authentication service for the register, login and refresh flows
///
/// Holds no state of its own beyond shared handles.
pub struct AuthService<R>
where
    R: AccountRepository,
{
    /// Account repository for persistence
    repository: Arc<R>,
    /// Token service for JWT management
    token_service: Arc<TokenService>,
    /// Password codec
    codec: CredentialCodec,
}

impl<R> AuthService<R>
where
    R: AccountRepository,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `repository` - Account store
    /// * `token_service` - Signs and verifies tokens
    /// * `codec` - Password hashing
    pub fn new(repository: Arc<R>, token_service: Arc<TokenService>, codec: CredentialCodec) -> Self {
        Self {
            repository,
            token_service,
            codec,
        }
    }

    /// Register a new account and issue its first token pair
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResult)` - Access token, refresh token and the created account
    /// * `Err(DomainError)` - `AlreadyExists` if the email is taken,
    ///   `InvalidInput` if name or email are invalid
    pub async fn register(&self, name: &str, email: &str, password: &str) -> DomainResult<AuthResult> {
        // Step 1: Reject a taken email early
        if self.repository.find_by_email(email).await?.is_some() {
            warn!("registration rejected: email already registered");
            return Err(AuthError::UserAlreadyExists.into());
        }

        // Step 2: Hash the password and build the account
        let password_hash = self.codec.hash_blocking(password.to_string()).await?;
        let new_account = NewAccount::new(name, email, password_hash).map_err(|e| {
            warn!(error = %e, "registration rejected: invalid account data");
            DomainError::from(e)
        })?;

        // Step 3: Persist; a concurrent registration can still hit the unique index
        let account = self.repository.create(new_account).await.map_err(|e| {
            if e.kind() == ErrorKind::AlreadyExists {
                warn!("registration rejected: email already registered");
            } else {
                error!(error = %e, "failed to create account");
            }
            e
        })?;

        // Step 4: Issue both tokens for the new identifier
        info!(account_id = %account.id(), "account registered");
        self.issue_pair(account)
    }

    /// Authenticate with email and password
    ///
    /// An unknown email and a wrong password are indistinguishable to the
    /// caller; both are `InvalidCredentials`.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResult> {
        // Step 1: Look up the account
        let account = match self.repository.find_by_email(email).await? {
            Some(account) => account,
            None => {
                // Same bcrypt work as a wrong password, so timing does not reveal the account
                warn!("login rejected: unknown email");
                self.codec.reject_blocking(password.to_string()).await?;
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        // Step 2: Verify the password
        self.codec
            .verify_blocking(account.password_hash().clone(), password.to_string())
            .await
            .map_err(|e| {
                warn!(account_id = %account.id(), "login rejected: wrong password");
                e
            })?;

        // Step 3: Issue both tokens
        info!(account_id = %account.id(), "account logged in");
        self.issue_pair(account)
    }

    /// Exchange a refresh token for a new access token
    ///
    /// The refresh token itself is returned unchanged; no account is attached.
    pub async fn refresh_token(&self, refresh_token: &str) -> DomainResult<AuthResult> {
        // Step 1: Only a valid refresh token is accepted here
        let claims = self
            .token_service
            .verify_typed(refresh_token, TokenKind::Refresh)
            .map_err(|e| {
                warn!(error = %e, "refresh rejected");
                e
            })?;
        let account_id = claims.account_id()?;

        // Step 2: The account must still exist
        let account = self
            .repository
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| {
                warn!(account_id = %account_id, "refresh rejected: account no longer exists");
                DomainError::not_found("user")
            })?;

        // Step 3: New access token, same refresh token
        let access_token = self.token_service.issue_access_token(&account)?;
        Ok(AuthResult::new(access_token, refresh_token.to_string(), None))
    }

    fn issue_pair(&self, account: Account) -> DomainResult<AuthResult> {
        let now = Utc::now();
        let access_token = self
            .token_service
            .issue(&self.token_service.access_claims(&account, now))?;
        let refresh_token = self
            .token_service
            .issue(&self.token_service.refresh_claims(account.id(), now))?;

        Ok(AuthResult::new(access_token, refresh_token, Some(account)))
    }
}
