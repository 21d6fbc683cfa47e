//! Authentication route handlers
//!
//! Registration, password login and access token refresh. None of these
//! routes require a bearer token.

pub mod login;
pub mod refresh;
pub mod register;

pub use login::login;
pub use refresh::refresh;
pub use register::register;
