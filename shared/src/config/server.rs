//! Server configuration module

use serde::Deserialize;

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: 0,
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// CORS configuration
///
/// Origins and methods are comma-separated lists so they can be set from a
/// single environment variable.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// Allowed origins, `*` for any
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: String,

    /// Allowed methods
    #[serde(default = "default_allowed_methods")]
    pub allowed_methods: String,

    /// Max age for preflight cache in seconds
    #[serde(default = "default_max_age")]
    pub max_age: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
            allowed_methods: default_allowed_methods(),
            max_age: default_max_age(),
        }
    }
}

impl CorsConfig {
    /// Parsed origin list, empty entries removed
    pub fn origins(&self) -> Vec<String> {
        split_list(&self.allowed_origins)
    }

    /// Parsed method list, upper-cased
    pub fn methods(&self) -> Vec<String> {
        split_list(&self.allowed_methods)
            .into_iter()
            .map(|m| m.to_uppercase())
            .collect()
    }

    /// Whether any origin is accepted
    pub fn allows_any_origin(&self) -> bool {
        self.origins().iter().any(|o| o == "*")
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn default_host() -> String {
    String::from("127.0.0.1")
}

fn default_port() -> u16 {
    8080
}

fn default_allowed_origins() -> String {
    String::from("*")
}

fn default_allowed_methods() -> String {
    String::from("GET,POST,PUT,DELETE,OPTIONS")
}

fn default_max_age() -> usize {
    3600
}
