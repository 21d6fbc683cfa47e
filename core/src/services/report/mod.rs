//! Periodic user count report
//!
//! Runs as a background task that logs the current number of accounts.

use std::sync::Arc;
use std::time::Duration;

use acct_shared::config::ReportingConfig;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{error, info, warn};

use crate::errors::DomainResult;
use crate::repositories::AccountRepository;

/// Configuration for the user count reporter
#[derive(Debug, Clone)]
pub struct UserCountReporterConfig {
    /// How often to report (in seconds)
    pub interval_seconds: u64,
    /// Whether the report runs at all
    pub enabled: bool,
}

impl Default for UserCountReporterConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 3600, // Run every hour
            enabled: true,
        }
    }
}

impl From<&ReportingConfig> for UserCountReporterConfig {
    fn from(config: &ReportingConfig) -> Self {
        Self {
            interval_seconds: config.user_count_interval_secs,
            enabled: config.enabled,
        }
    }
}

/// Logs `user_count` on a fixed interval
pub struct UserCountReporter<R: AccountRepository + 'static> {
    repository: Arc<R>,
    config: UserCountReporterConfig,
}

impl<R: AccountRepository> UserCountReporter<R> {
    pub fn new(repository: Arc<R>, config: UserCountReporterConfig) -> Self {
        Self { repository, config }
    }

    /// Run a single report
    pub async fn report_once(&self) -> DomainResult<u64> {
        let user_count = self.repository.count().await?;
        info!(user_count, "user count report");
        Ok(user_count)
    }

    /// Start the reporter as a background task
    ///
    /// The first report runs immediately. A tick that falls behind is skipped
    /// rather than run back to back, so two reports never overlap.
    pub fn start_background_task(self: Arc<Self>) -> Option<JoinHandle<()>> {
        if !self.config.enabled {
            warn!("User count reporter is disabled");
            return None;
        }

        let period = Duration::from_secs(self.config.interval_seconds.max(1));

        Some(tokio::spawn(async move {
            info!(
                "User count reporter started - will run every {} seconds",
                self.config.interval_seconds
            );

            let mut interval_timer = tokio::time::interval(period);
            interval_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                interval_timer.tick().await;

                if let Err(e) = self.report_once().await {
                    error!(error = %e, "failed to count users");
                }
            }
        }))
    }
}
