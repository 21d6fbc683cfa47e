//! Background reporting configuration

use serde::Deserialize;

/// Configuration for the periodic user count report
#[derive(Debug, Clone, Deserialize)]
pub struct ReportingConfig {
    /// Whether the report runs at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Seconds between two reports
    #[serde(default = "default_interval")]
    pub user_count_interval_secs: u64,
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            user_count_interval_secs: default_interval(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_interval() -> u64 {
    3600
}
