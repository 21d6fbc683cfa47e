//! Repository contracts and the in-memory store

pub mod account;

pub use account::{AccountRepository, InMemoryAccountRepository};
