//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Pragmatic email shape: local part, `@`, dotted domain with a 2+ letter TLD
pub static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$")
        .expect("email regex is valid")
});

/// Length bounds for account fields, counted in characters
pub mod limits {
    pub const NAME_MIN: usize = 2;
    pub const NAME_MAX: usize = 100;
    pub const EMAIL_MIN: usize = 5;
    pub const EMAIL_MAX: usize = 200;
    pub const PASSWORD_MIN: usize = 8;
    pub const PASSWORD_MAX: usize = 64;
}

/// Common validation functions
pub mod validators {
    use super::EMAIL_REGEX;

    /// Check if a string is not empty
    pub fn not_empty(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if a string length in characters is within bounds
    pub fn length_between(value: &str, min: usize, max: usize) -> bool {
        let len = value.chars().count();
        len >= min && len <= max
    }

    /// Check if an email address has a valid shape
    pub fn is_valid_email(email: &str) -> bool {
        EMAIL_REGEX.is_match(email)
    }
}
