//! Token service module for JWT management
//!
//! This module handles:
//! - Signing access and refresh tokens (HS256)
//! - Verifying signature and expiry
//! - Rejecting tokens whose `type` tag does not match the expected kind

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
