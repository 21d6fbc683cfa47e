//! Authentication service module
//!
//! Registration, login and access token refresh on top of the account store,
//! the credential codec and the token service.

mod service;

#[cfg(test)]
mod tests;

pub use service::AuthService;
