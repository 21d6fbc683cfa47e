//! Stable error codes shared by every layer that reports errors to callers

/// Codes carried in the `code` field of failed responses
pub mod error_codes {
    pub const INVALID_INPUT: &str = "INVALID_INPUT";
    pub const INVALID_CREDENTIALS: &str = "INVALID_CREDENTIALS";
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const ALREADY_EXISTS: &str = "ALREADY_EXISTS";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const SERVICE_UNAVAILABLE: &str = "SERVICE_UNAVAILABLE";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

/// Messages used where the underlying cause must not leak
pub mod safe_messages {
    pub const INTERNAL: &str = "internal server error";
    pub const UNAVAILABLE: &str = "service temporarily unavailable";
}
