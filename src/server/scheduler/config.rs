use crate::server::config::Config;

/// Cron expressions and pool size of the scheduled jobs.
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    /// Cron expression of the corporation bulk refresh, every 6 hours by default
    pub refresh_cron: String,
    /// Workers of each bulk refresh run
    pub refresh_worker_count: usize,
    /// Cron expression of the credential validation, hourly at half past by default
    pub credential_validation_cron: String,
}

impl From<&Config> for ScheduleConfig {
    fn from(config: &Config) -> Self {
        Self {
            refresh_cron: config.refresh_cron.clone(),
            refresh_worker_count: config.refresh_worker_count,
            credential_validation_cron: config.credential_validation_cron.clone(),
        }
    }
}
