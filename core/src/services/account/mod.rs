//! Account service module: profile reads and updates, deletion, listing

mod service;

#[cfg(test)]
mod tests;

pub use service::AccountService;
