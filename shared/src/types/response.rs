//! API response envelope

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Envelope wrapping every response body
///
/// Success carries `result`; failure carries a stable `code` and a message
/// that is safe to show to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,

    /// Stable error code (present on failure)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Human-readable message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Response payload (present on success)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(result: T) -> Self {
        Self {
            success: true,
            code: None,
            message: None,
            result: Some(result),
        }
    }

    /// Check if the response is successful
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Extract the payload, consuming the response
    pub fn into_result(self) -> Option<T> {
        self.result
    }
}

impl ApiResponse<()> {
    /// Successful response without a payload
    pub fn empty() -> Self {
        Self {
            success: true,
            code: None,
            message: None,
            result: None,
        }
    }

    /// Create an error response
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            code: Some(code.into()),
            message: Some(message.into()),
            result: None,
        }
    }
}

/// Liveness document served by the health endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy(version: impl Into<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            version: version.into(),
            timestamp: Utc::now(),
        }
    }
}
