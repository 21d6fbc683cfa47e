//! Domain entities representing core business objects.

pub mod account;
pub mod token;

// Re-export commonly used types
pub use account::{Account, AccountId, NewAccount, PasswordHash, PASSWORD_HASH_LEN};
pub use token::{AccessClaims, Claims, RefreshClaims, TokenKind};
