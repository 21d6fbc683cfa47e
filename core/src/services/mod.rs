//! Business services containing domain logic and use cases.

pub mod account;
pub mod auth;
pub mod credential;
pub mod guard;
pub mod report;
pub mod token;

// Re-export commonly used types
pub use account::AccountService;
pub use auth::AuthService;
pub use credential::CredentialCodec;
pub use guard::{AccessGuard, BearerAuthorizer, BEARER_PREFIX};
pub use report::{UserCountReporter, UserCountReporterConfig};
pub use token::{TokenService, TokenServiceConfig};
