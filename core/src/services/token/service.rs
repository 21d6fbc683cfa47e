//! Main token service implementation

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::{debug, error};

use crate::domain::entities::account::{Account, AccountId};
use crate::domain::entities::token::{AccessClaims, Claims, RefreshClaims, TokenKind};
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenServiceConfig;

/// Signs and verifies access and refresh tokens
///
/// Stateless after construction; share it behind an `Arc`.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Secret and token lifetimes
    ///
    /// # Returns
    ///
    /// A new `TokenService`, or an error if the secret is empty
    pub fn new(config: TokenServiceConfig) -> DomainResult<Self> {
        if config.jwt_secret.trim().is_empty() {
            return Err(DomainError::internal("token signing secret is empty"));
        }

        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    pub fn config(&self) -> &TokenServiceConfig {
        &self.config
    }

    /// Expiry instant of an access token issued at `now`
    pub fn access_expires_at(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now + self.config.access_token_ttl
    }

    /// Expiry instant of a refresh token issued at `now`
    pub fn refresh_expires_at(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now + self.config.refresh_token_ttl
    }

    /// Access claims for an account, issued at `now`
    pub fn access_claims(&self, account: &Account, now: DateTime<Utc>) -> Claims {
        AccessClaims::new(account, now, self.config.access_token_ttl).into()
    }

    /// Refresh claims for an account identifier, issued at `now`
    pub fn refresh_claims(&self, account_id: AccountId, now: DateTime<Utc>) -> Claims {
        RefreshClaims::new(account_id, now, self.config.refresh_token_ttl).into()
    }

    /// Sign claims into a compact JWT
    pub fn issue(&self, claims: &Claims) -> DomainResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(|e| {
            error!(error = %e, kind = %claims.kind(), "failed to sign token");
            TokenError::TokenGenerationFailed {
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Issue a fresh access token for an account
    pub fn issue_access_token(&self, account: &Account) -> DomainResult<String> {
        self.issue(&self.access_claims(account, Utc::now()))
    }

    /// Issue a fresh refresh token for an account
    pub fn issue_refresh_token(&self, account_id: AccountId) -> DomainResult<String> {
        self.issue(&self.refresh_claims(account_id, Utc::now()))
    }

    /// Check signature and expiry and decode the claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims, of either kind
    /// * `Err(DomainError)` - `Unauthorized` for any invalid token
    pub fn verify(&self, token: &str) -> DomainResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!(error = %e, "token rejected");
                let err = match e.kind() {
                    JwtErrorKind::ExpiredSignature => TokenError::TokenExpired,
                    JwtErrorKind::InvalidSignature => TokenError::InvalidSignature,
                    _ => TokenError::InvalidTokenFormat,
                };
                err.into()
            })
    }

    /// Verify, then require the decoded `type` tag to equal `expected`
    pub fn verify_typed(&self, token: &str, expected: TokenKind) -> DomainResult<Claims> {
        let claims = self.verify(token)?;
        if claims.kind() != expected {
            return Err(TokenError::WrongTokenType {
                expected: expected.as_str(),
                actual: claims.kind().as_str(),
            }
            .into());
        }
        Ok(claims)
    }
}
